/// Identifies a field within a schema by the name of its declaring type and
/// its own name, written `Type.field`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldCoordinate {
    field_name: String,
    type_name: String,
}
impl FieldCoordinate {
    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn new(
        type_name: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            type_name: type_name.into(),
        }
    }

    /// Parse a coordinate written as `Type.field`. Returns `None` if either
    /// half is missing.
    pub fn parse(coordinate: &str) -> Option<Self> {
        let (type_name, field_name) = coordinate.split_once('.')?;
        if type_name.is_empty() || field_name.is_empty() || field_name.contains('.') {
            return None;
        }
        Some(Self::new(type_name, field_name))
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl Ord for FieldCoordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.type_name.cmp(&other.type_name)
            .then_with(|| self.field_name.cmp(&other.field_name))
    }
}
impl PartialOrd for FieldCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl std::fmt::Display for FieldCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field_name)
    }
}
impl serde::Serialize for FieldCoordinate {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
