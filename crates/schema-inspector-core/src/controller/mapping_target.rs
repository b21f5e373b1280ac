use crate::schema::FieldCoordinate;
use crate::schema::OperationKind;
use crate::schema::SchemaTypeGraph;

/// The schema field a controller method is registered against.
///
/// Root operation fields are registered by operation rather than by type
/// name, so that a `schema { query: RootQuery }` override doesn't require
/// re-registering every query handler.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum MappingTarget {
    Field(FieldCoordinate),
    Operation {
        field_name: String,
        operation: OperationKind,
    },
}
impl MappingTarget {
    /// The coordinate this target refers to within `schema`.
    ///
    /// Operation targets for an operation the schema doesn't define fall back
    /// to the operation's conventional type name.
    pub fn coordinate(&self, schema: &SchemaTypeGraph) -> FieldCoordinate {
        match self {
            Self::Field(coordinate) => coordinate.to_owned(),
            Self::Operation { field_name, operation } => {
                let type_name = schema.root_operation_type(*operation)
                    .map(|obj| obj.name())
                    .unwrap_or(operation.default_type_name());
                FieldCoordinate::new(type_name, field_name.as_str())
            },
        }
    }

    pub fn field_name(&self) -> &str {
        match self {
            Self::Field(coordinate) => coordinate.field_name(),
            Self::Operation { field_name, .. } => field_name.as_str(),
        }
    }
}
impl std::fmt::Display for MappingTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(coordinate) => write!(f, "{coordinate}"),
            Self::Operation { field_name, operation } =>
                write!(f, "{}.{field_name}", operation.default_type_name()),
        }
    }
}
