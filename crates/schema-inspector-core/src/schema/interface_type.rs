use crate::schema::FieldsContainer;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`SchemaTypeGraph`](crate::schema::SchemaTypeGraph).
///
/// Use [`SchemaTypeGraph::implementations()`](crate::schema::SchemaTypeGraph::implementations)
/// to list the object types that implement it.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) FieldsContainer);
impl std::ops::Deref for InterfaceType {
    type Target = FieldsContainer;

    fn deref(&self) -> &FieldsContainer {
        &self.0
    }
}
