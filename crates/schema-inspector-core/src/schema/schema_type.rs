use crate::DerefByName;
use crate::DerefByNameError;
use crate::loc;
use crate::schema::EnumType;
use crate::schema::FieldsContainer;
use crate::schema::InputObjectType;
use crate::schema::InterfaceType;
use crate::schema::ObjectType;
use crate::schema::ScalarType;
use crate::schema::SchemaTypeGraph;
use crate::schema::SchemaTypeKind;
use crate::schema::UnionType;

static BUILTIN_LOCATION: loc::SourceLocation = loc::SourceLocation::GraphQLBuiltIn;

/// Represents a named type defined within a [`SchemaTypeGraph`].
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl SchemaType {
    /// The fields of an object or interface type. `None` for every other kind
    /// of type.
    pub fn as_fields_container(&self) -> Option<&FieldsContainer> {
        match self {
            Self::Interface(iface) => Some(&iface.0),
            Self::Object(obj) => Some(&obj.0),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(iface) = self {
            Some(iface)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj) = self {
            Some(obj)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_type) = self {
            Some(union_type)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String => &BUILTIN_LOCATION,
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    /// Leaf types (scalars and enums) terminate a walk of the type graph.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind(), SchemaTypeKind::Enum | SchemaTypeKind::Scalar)
    }

    /// Interfaces and unions may be backed by more than one object type.
    pub fn is_polymorphic(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn kind(&self) -> SchemaTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }
}
impl DerefByName for SchemaType {
    type Source = SchemaTypeGraph;

    fn deref_name<'a>(
        graph: &'a SchemaTypeGraph,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        graph.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
