use crate::report::SkipReason;
use crate::schema::FieldCoordinate;

/// A schema type (or one schema type/host type pairing) that was not
/// checked.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SkippedType {
    pub(crate) field_coordinate: Option<FieldCoordinate>,
    pub(crate) host_type: Option<String>,
    pub(crate) reason: SkipReason,
    pub(crate) type_name: String,
}
impl SkippedType {
    /// The field through which the type was reached.
    pub fn field_coordinate(&self) -> Option<&FieldCoordinate> {
        self.field_coordinate.as_ref()
    }

    /// The host type the schema type was paired with, when there was one.
    pub fn host_type(&self) -> Option<&str> {
        self.host_type.as_deref()
    }

    pub fn reason(&self) -> SkipReason {
        self.reason
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl std::fmt::Display for SkippedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name)?;
        if let Some(host_type) = &self.host_type {
            write!(f, " ({host_type})")?;
        }
        if let Some(coordinate) = &self.field_coordinate {
            write!(f, " via {coordinate}")?;
        }
        write!(f, ": {}", self.reason)
    }
}
