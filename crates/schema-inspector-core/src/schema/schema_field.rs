use crate::loc;
use crate::schema::FieldCoordinate;
use crate::schema::TypeAnnotation;
use indexmap::IndexMap;

/// A field declared on an object, interface, or input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaField {
    pub(crate) arguments: IndexMap<String, TypeAnnotation>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl SchemaField {
    /// The names of the arguments declared on this field, in declaration
    /// order.
    pub fn argument_names(&self) -> Vec<&str> {
        self.arguments.keys().map(|name| name.as_str()).collect()
    }

    pub fn arguments(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.arguments
    }

    pub fn coordinate(&self) -> FieldCoordinate {
        FieldCoordinate::new(&self.parent_type_name, &self.name)
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the type this field is declared on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
