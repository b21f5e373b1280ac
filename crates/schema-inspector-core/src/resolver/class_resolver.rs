use crate::host::HostType;
use crate::host::HostTypeRegistry;
use crate::schema::SchemaTypeGraph;
use std::sync::Arc;
use thiserror::Error;

/// Maps a schema type name to the simple name its host type is expected to
/// have. The identity function is used when none is configured.
pub type ClassNameFunction = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Finds the candidate host types for a schema type.
///
/// `declared` is the host type that the surrounding signature promises
/// (for example, the element type of the controller method that returns a
/// union). It's `None` if the signature names a type that isn't registered.
pub trait ClassResolver: std::fmt::Debug + Send + Sync {
    /// Checks that this resolver's configuration only refers to schema types
    /// and host types that actually exist.
    fn check_config(
        &self,
        _schema: &SchemaTypeGraph,
        _registry: &HostTypeRegistry,
    ) -> Result<(), ClassResolverConfigError> {
        Ok(())
    }

    /// Returns the paths of the candidate host types for `schema_type_name`,
    /// in preference order.
    ///
    /// `None` means this resolver has no opinion about the type and the next
    /// resolver in a [`ClassResolverChain`](crate::resolver::ClassResolverChain)
    /// should be consulted. `Some(vec![])` is a definitive "no candidates".
    fn resolve_class(
        &self,
        schema_type_name: &str,
        declared: Option<&HostType>,
        registry: &HostTypeRegistry,
    ) -> Option<Vec<String>>;
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClassResolverConfigError {
    #[error(
        "The class name table maps `{host_type_path}` to the `{schema_type_name}` \
        schema type, but no host type with that path is registered"
    )]
    UnknownHostType {
        host_type_path: String,
        schema_type_name: String,
    },

    #[error(
        "The class name table maps `{host_type_path}` to `{schema_type_name}`, \
        but the schema defines no type with that name"
    )]
    UnknownSchemaType {
        host_type_path: String,
        schema_type_name: String,
    },
}
