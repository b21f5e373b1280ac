use crate::loc;

/// A custom scalar declared with `scalar Name`. Built-in scalars are
/// represented directly as [`SchemaType`](crate::schema::SchemaType)
/// variants.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
