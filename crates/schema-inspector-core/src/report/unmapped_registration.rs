use crate::schema::FieldCoordinate;

/// A controller method registered for a field the schema doesn't define.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct UnmappedRegistration {
    pub(crate) field_coordinate: FieldCoordinate,
    pub(crate) method: String,
}
impl UnmappedRegistration {
    pub fn field_coordinate(&self) -> &FieldCoordinate {
        &self.field_coordinate
    }

    pub fn method(&self) -> &str {
        self.method.as_str()
    }
}
