use crate::controller::ControllerMethod;
use crate::controller::ControllerRegistry;
use crate::host::HostType;
use crate::host::HostTypeRegistry;
use crate::host::WrapperTypes;
use crate::inspect::InterfaceFieldPolicy;
use crate::resolver::ClassResolver;
use crate::schema::FieldCoordinate;
use crate::schema::SchemaTypeGraph;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Everything a single inspection run reads from, plus the per-run cache of
/// resolved host type candidates.
pub(crate) struct InspectionContext<'a> {
    candidate_cache: HashMap<(String, Option<String>), Vec<&'a HostType>>,
    pub class_resolver: &'a dyn ClassResolver,
    pub controllers: IndexMap<FieldCoordinate, &'a ControllerMethod>,
    pub interface_field_policy: InterfaceFieldPolicy,
    pub registry: &'a HostTypeRegistry,
    pub schema: &'a SchemaTypeGraph,
    pub wrapper_types: &'a WrapperTypes,
}
impl<'a> InspectionContext<'a> {
    /// The registered host types that may back `schema_type_name` when it is
    /// reached through a signature declaring `declared`.
    ///
    /// Each (schema type, declared host type) pair is resolved once per run.
    pub fn candidates(
        &mut self,
        schema_type_name: &str,
        declared: Option<&'a HostType>,
    ) -> Vec<&'a HostType> {
        let key = (
            schema_type_name.to_string(),
            declared.map(|host_type| host_type.path().to_string()),
        );
        if let Some(candidates) = self.candidate_cache.get(&key) {
            return candidates.clone();
        }

        let registry = self.registry;
        let candidates: Vec<&'a HostType> = self.class_resolver
            .resolve_class(schema_type_name, declared, registry)
            .unwrap_or_default()
            .iter()
            .filter_map(|path| {
                let host_type = registry.get(path);
                if host_type.is_none() {
                    log::warn!(
                        "class resolution for `{schema_type_name}` produced \
                        unregistered host type `{path}`",
                    );
                }
                host_type
            })
            .collect();

        log::trace!(
            "candidates for `{schema_type_name}` (declared {:?}): {:?}",
            key.1,
            candidates.iter().map(|c| c.path()).collect::<Vec<_>>(),
        );
        self.candidate_cache.insert(key, candidates.clone());
        candidates
    }

    pub fn new(
        schema: &'a SchemaTypeGraph,
        controllers: &'a ControllerRegistry,
        registry: &'a HostTypeRegistry,
        class_resolver: &'a dyn ClassResolver,
        interface_field_policy: InterfaceFieldPolicy,
        wrapper_types: &'a WrapperTypes,
    ) -> Self {
        Self {
            candidate_cache: HashMap::new(),
            class_resolver,
            controllers: controllers.coordinate_map(schema),
            interface_field_policy,
            registry,
            schema,
            wrapper_types,
        }
    }
}
