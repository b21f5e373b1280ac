use crate::loc;
use crate::schema::NamedSchemaTypeRef;
use crate::schema::SchemaField;
use indexmap::IndexMap;

/// The data shared by [`ObjectType`](crate::schema::ObjectType) and
/// [`InterfaceType`](crate::schema::InterfaceType): an ordered set of fields
/// and the interfaces the type declares it implements.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldsContainer {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fields: IndexMap<String, SchemaField>,
    pub(crate) interfaces: Vec<NamedSchemaTypeRef>,
    pub(crate) name: String,
}
impl FieldsContainer {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }

    /// The fields of this type, in the order they were declared in the schema.
    /// Fields added by a type extension follow the fields of the original
    /// definition.
    pub fn fields(&self) -> &IndexMap<String, SchemaField> {
        &self.fields
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|iface| iface.name() == interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(|iface| iface.name()).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
