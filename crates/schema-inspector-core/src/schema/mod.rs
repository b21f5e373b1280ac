mod enum_type;
mod field_coordinate;
mod fields_container;
mod input_object_type;
mod interface_type;
mod object_type;
mod operation_kind;
mod scalar_type;
mod schema_build_error;
mod schema_field;
mod schema_file_error;
mod schema_graph_builder;
mod schema_type;
mod schema_type_graph;
mod schema_type_kind;
mod type_annotation;
mod type_builders;
mod types_map_builder;
mod union_type;

pub use enum_type::EnumType;
pub use field_coordinate::FieldCoordinate;
pub use fields_container::FieldsContainer;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use operation_kind::OperationKind;
pub use scalar_type::ScalarType;
pub use schema_build_error::NamedTypeDefLocation;
pub use schema_build_error::SchemaBuildError;
pub use schema_build_error::TypeReferenceError;
pub use schema_field::SchemaField;
pub use schema_file_error::SchemaFileError;
pub use schema_graph_builder::SchemaGraphBuilder;
pub use schema_type::SchemaType;
pub use schema_type_graph::SchemaTypeGraph;
pub use schema_type_kind::SchemaTypeKind;
pub use type_annotation::TypeAnnotation;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;

pub type NamedSchemaTypeRef = crate::NamedRef<SchemaTypeGraph, SchemaType>;
