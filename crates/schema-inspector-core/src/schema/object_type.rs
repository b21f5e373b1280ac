use crate::schema::FieldsContainer;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`SchemaTypeGraph`](crate::schema::SchemaTypeGraph).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) FieldsContainer);
impl std::ops::Deref for ObjectType {
    type Target = FieldsContainer;

    fn deref(&self) -> &FieldsContainer {
        &self.0
    }
}
