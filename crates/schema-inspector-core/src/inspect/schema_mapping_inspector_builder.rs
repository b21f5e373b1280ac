use crate::host::WrapperTypes;
use crate::inspect::InterfaceFieldPolicy;
use crate::inspect::SchemaMappingInspector;
use crate::resolver::ClassNameFunction;
use crate::resolver::ClassNameTable;
use crate::resolver::ClassNameTypeResolver;
use crate::resolver::ClassResolver;
use crate::resolver::ClassResolverChain;
use crate::resolver::NamingConventionClassResolver;
use std::sync::Arc;

/// Configures a [`SchemaMappingInspector`].
///
/// Host type candidates are resolved by consulting, in order: resolvers
/// added with [`class_resolver`](Self::class_resolver), the mappings from
/// any [`ClassNameTypeResolver`], and finally the naming convention (which
/// uses the [class name function](Self::class_name_function) if one is set).
#[derive(Debug, Default)]
pub struct SchemaMappingInspectorBuilder {
    class_name_function: Option<NamingConventionClassResolver>,
    class_name_table: ClassNameTable,
    class_resolvers: ClassResolverChain,
    interface_field_policy: InterfaceFieldPolicy,
    wrapper_types: WrapperTypes,
}
impl SchemaMappingInspectorBuilder {
    pub fn build(self) -> SchemaMappingInspector {
        let mut class_resolver = self.class_resolvers;
        if !self.class_name_table.is_empty() {
            class_resolver.push(self.class_name_table);
        }
        class_resolver.push(self.class_name_function.unwrap_or_default());

        SchemaMappingInspector {
            class_resolver,
            interface_field_policy: self.interface_field_policy,
            wrapper_types: self.wrapper_types,
        }
    }

    /// Maps a schema type name to the simple name of its host type, for use
    /// by the naming convention. Defaults to the identity function.
    pub fn class_name_function(
        mut self,
        class_name_function: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        let class_name_function: ClassNameFunction = Arc::new(class_name_function);
        self.class_name_function = Some(
            NamingConventionClassResolver::with_class_name_function(class_name_function),
        );
        self
    }

    /// Adds the host-type-to-schema-type mappings of a type resolver. Schema
    /// types named by these mappings only resolve to the mapped host types.
    pub fn class_name_type_resolver(mut self, type_resolver: &ClassNameTypeResolver) -> Self {
        for (host_type_path, schema_type_name) in type_resolver.mappings() {
            self.class_name_table.insert(schema_type_name.as_str(), host_type_path.as_str());
        }
        self
    }

    /// Adds a custom resolver. Custom resolvers are consulted before any
    /// mappings and before the naming convention.
    pub fn class_resolver(mut self, class_resolver: impl ClassResolver + 'static) -> Self {
        self.class_resolvers.push(class_resolver);
        self
    }

    pub fn interface_field_policy(mut self, interface_field_policy: InterfaceFieldPolicy) -> Self {
        self.interface_field_policy = interface_field_policy;
        self
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a generic container whose first type argument is unwrapped when
    /// matching host types against the schema.
    pub fn wrapper_type(mut self, name: impl Into<String>) -> Self {
        self.wrapper_types.insert(name);
        self
    }

    /// Replaces the whole set of wrapper types.
    pub fn wrapper_types(mut self, wrapper_types: WrapperTypes) -> Self {
        self.wrapper_types = wrapper_types;
        self
    }
}
