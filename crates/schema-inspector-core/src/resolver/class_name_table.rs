use crate::host::HostType;
use crate::host::HostTypeRegistry;
use crate::resolver::ClassNameTypeResolver;
use crate::resolver::ClassResolver;
use crate::resolver::ClassResolverConfigError;
use crate::schema::SchemaTypeGraph;
use indexmap::IndexMap;

/// An explicit table from schema type name to candidate host type paths.
///
/// Schema types that appear in the table resolve only to the host types
/// listed for them. Types missing from the table are left to the next
/// resolver in the chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassNameTable {
    entries: IndexMap<String, Vec<String>>,
}
impl ClassNameTable {
    pub fn candidates(&self, schema_type_name: &str) -> Option<&[String]> {
        self.entries.get(schema_type_name).map(Vec::as_slice)
    }

    pub fn entries(&self) -> &IndexMap<String, Vec<String>> {
        &self.entries
    }

    /// Inverts the host-type-to-schema-type mappings of a
    /// [`ClassNameTypeResolver`].
    pub fn from_type_resolver(type_resolver: &ClassNameTypeResolver) -> Self {
        let mut table = Self::new();
        for (host_type_path, schema_type_name) in type_resolver.mappings() {
            table.insert(schema_type_name.as_str(), host_type_path.as_str());
        }
        table
    }

    pub fn insert(
        &mut self,
        schema_type_name: impl Into<String>,
        host_type_path: impl Into<String>,
    ) -> &mut Self {
        let host_type_path = host_type_path.into();
        let paths = self.entries.entry(schema_type_name.into()).or_default();
        if !paths.contains(&host_type_path) {
            paths.push(host_type_path);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassResolver for ClassNameTable {
    fn check_config(
        &self,
        schema: &SchemaTypeGraph,
        registry: &HostTypeRegistry,
    ) -> Result<(), ClassResolverConfigError> {
        for (schema_type_name, host_type_paths) in &self.entries {
            for host_type_path in host_type_paths {
                if !schema.has_type(schema_type_name) {
                    return Err(ClassResolverConfigError::UnknownSchemaType {
                        host_type_path: host_type_path.to_string(),
                        schema_type_name: schema_type_name.to_string(),
                    });
                }
                if !registry.contains(host_type_path) {
                    return Err(ClassResolverConfigError::UnknownHostType {
                        host_type_path: host_type_path.to_string(),
                        schema_type_name: schema_type_name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn resolve_class(
        &self,
        schema_type_name: &str,
        _declared: Option<&HostType>,
        _registry: &HostTypeRegistry,
    ) -> Option<Vec<String>> {
        self.candidates(schema_type_name).map(<[String]>::to_vec)
    }
}
