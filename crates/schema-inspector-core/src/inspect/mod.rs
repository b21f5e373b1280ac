mod inspect_error;
mod inspection_context;
mod interface_field_policy;
mod schema_mapping_inspector;
mod schema_mapping_inspector_builder;
mod type_graph_walker;

pub use inspect_error::InspectError;
pub(crate) use inspection_context::InspectionContext;
pub use interface_field_policy::InterfaceFieldPolicy;
pub use schema_mapping_inspector::SchemaMappingInspector;
pub use schema_mapping_inspector_builder::SchemaMappingInspectorBuilder;
pub(crate) use type_graph_walker::TypeGraphWalker;

#[cfg(test)]
mod tests;
