use crate::loc;
use crate::schema::NamedSchemaTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`SchemaTypeGraph`](crate::schema::SchemaTypeGraph).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) members: IndexMap<String, NamedSchemaTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// An ordered list of the names of each member type of this union.
    ///
    /// The order matches the order members were listed on the union in the
    /// schema. Members added by type extensions follow the members of the
    /// original definition.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
