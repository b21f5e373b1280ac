use crate::schema::SchemaType;

/// The category of a [`SchemaType`] without its type metadata. Built-in
/// scalars are reported as [`SchemaTypeKind::Scalar`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum SchemaTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl SchemaTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&SchemaType> for SchemaTypeKind {
    fn from(value: &SchemaType) -> Self {
        match value {
            SchemaType::Bool
                | SchemaType::Float
                | SchemaType::ID
                | SchemaType::Int
                | SchemaType::Scalar(_)
                | SchemaType::String => SchemaTypeKind::Scalar,
            SchemaType::Enum(_) => SchemaTypeKind::Enum,
            SchemaType::InputObject(_) => SchemaTypeKind::InputObject,
            SchemaType::Interface(_) => SchemaTypeKind::Interface,
            SchemaType::Object(_) => SchemaTypeKind::Object,
            SchemaType::Union(_) => SchemaTypeKind::Union,
        }
    }
}
