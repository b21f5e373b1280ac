use crate::host::HostType;
use crate::host::HostTypeRegistry;
use indexmap::IndexMap;

/// Resolves the schema type name for a host type at runtime: an explicit
/// mapping wins, otherwise the host type's simple name is used.
///
/// The same mappings drive static inspection. Turn them into a
/// [`ClassNameTable`](crate::resolver::ClassNameTable) with
/// [`ClassNameTable::from_type_resolver`](crate::resolver::ClassNameTable::from_type_resolver).
///
/// ```
/// use schema_inspector_core::resolver::ClassNameTypeResolver;
///
/// let mut resolver = ClassNameTypeResolver::new();
/// resolver.add_mapping("garage::CarImpl", "Car");
/// assert_eq!(resolver.mapping("garage::CarImpl"), Some("Car"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassNameTypeResolver {
    mappings: IndexMap<String, String>,
}
impl ClassNameTypeResolver {
    /// Maps a host type path to a schema type name. A later mapping for the
    /// same host type replaces an earlier one.
    pub fn add_mapping(
        &mut self,
        host_type_path: impl Into<String>,
        schema_type_name: impl Into<String>,
    ) -> &mut Self {
        self.mappings.insert(host_type_path.into(), schema_type_name.into());
        self
    }

    pub fn mapping(&self, host_type_path: &str) -> Option<&str> {
        self.mappings.get(host_type_path).map(String::as_str)
    }

    /// Host type path to schema type name, in the order mappings were added.
    pub fn mappings(&self) -> &IndexMap<String, String> {
        &self.mappings
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// The schema type name for a value of the given host type.
    ///
    /// If the host type itself isn't mapped, the abstract types it
    /// implements are tried (breadth-first) before falling back to its
    /// simple name.
    pub fn resolve_type_name<'a>(
        &'a self,
        host_type: &'a HostType,
        registry: &'a HostTypeRegistry,
    ) -> &'a str {
        let mut to_visit = std::collections::VecDeque::from([host_type.path()]);
        let mut seen = std::collections::HashSet::new();
        while let Some(path) = to_visit.pop_front() {
            if !seen.insert(path) {
                continue;
            }
            if let Some(schema_type_name) = self.mapping(path) {
                return schema_type_name;
            }
            if let Some(host_type) = registry.get(path) {
                to_visit.extend(host_type.implements().iter().map(String::as_str));
            }
        }
        host_type.simple_name()
    }
}
