use crate::schema::FieldCoordinate;

/// A controller method argument that doesn't match any argument declared
/// on the schema field the method is registered for.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct UnmappedArgument {
    pub(crate) argument_name: String,
    pub(crate) field_coordinate: FieldCoordinate,
    pub(crate) method: String,
}
impl UnmappedArgument {
    pub fn argument_name(&self) -> &str {
        self.argument_name.as_str()
    }

    pub fn field_coordinate(&self) -> &FieldCoordinate {
        &self.field_coordinate
    }

    pub fn method(&self) -> &str {
        self.method.as_str()
    }
}
