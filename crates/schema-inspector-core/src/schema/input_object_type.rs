use crate::loc;
use crate::schema::SchemaField;
use indexmap::IndexMap;

/// Input object types are kept so that field and argument type references
/// resolve, but they are never walked by the inspector.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fields: IndexMap<String, SchemaField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn fields(&self) -> &IndexMap<String, SchemaField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
