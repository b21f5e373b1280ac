use crate::host::HostType;
use crate::host::HostTypeRegistry;
use crate::resolver::ClassNameFunction;
use crate::resolver::ClassResolver;
use std::sync::Arc;

/// Finds host types by naming convention: the candidate for schema type `T`
/// lives in the same module as the declared host type and is named
/// `class_name_function(T)`.
///
/// When the declared type is abstract and explicitly permits concrete
/// types, permitted types with the expected simple name are candidates too,
/// wherever they live.
///
/// With no declared host type to anchor on, every registered type with the
/// expected simple name is a candidate.
#[derive(Clone)]
pub struct NamingConventionClassResolver {
    class_name_function: ClassNameFunction,
}
impl NamingConventionClassResolver {
    pub fn expected_simple_name(&self, schema_type_name: &str) -> String {
        (self.class_name_function)(schema_type_name)
    }

    pub fn new() -> Self {
        Self {
            class_name_function: Arc::new(|schema_type_name: &str| schema_type_name.to_string()),
        }
    }

    pub fn with_class_name_function(class_name_function: ClassNameFunction) -> Self {
        Self {
            class_name_function,
        }
    }
}

impl ClassResolver for NamingConventionClassResolver {
    fn resolve_class(
        &self,
        schema_type_name: &str,
        declared: Option<&HostType>,
        registry: &HostTypeRegistry,
    ) -> Option<Vec<String>> {
        let simple_name = self.expected_simple_name(schema_type_name);

        let Some(declared) = declared else {
            return Some(
                registry.iter()
                    .filter(|host_type| host_type.simple_name() == simple_name)
                    .map(|host_type| host_type.path().to_string())
                    .collect(),
            );
        };

        let mut candidates = vec![];
        let module_path = declared.module_path();
        let sibling_path =
            if module_path.is_empty() {
                simple_name.to_string()
            } else {
                format!("{module_path}::{simple_name}")
            };
        if registry.contains(sibling_path.as_str()) {
            candidates.push(sibling_path);
        }

        for permitted in declared.permits() {
            if crate::host::simple_name(permitted) == simple_name
                && registry.contains(permitted)
                && !candidates.contains(permitted) {
                candidates.push(permitted.to_string());
            }
        }

        log::trace!(
            "naming convention resolved `{schema_type_name}` (declared `{}`) to {candidates:?}",
            declared.path(),
        );
        Some(candidates)
    }
}

impl std::fmt::Debug for NamingConventionClassResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamingConventionClassResolver")
            .finish_non_exhaustive()
    }
}

impl Default for NamingConventionClassResolver {
    fn default() -> Self {
        Self::new()
    }
}
