use crate::schema::FieldCoordinate;
use crate::schema::ObjectType;
use crate::schema::OperationKind;
use crate::schema::SchemaField;
use crate::schema::SchemaGraphBuilder;
use crate::schema::SchemaType;
use indexmap::IndexMap;

/// A fully built, reference-checked, and immutable graph of the named types
/// defined by one or more GraphQL SDL documents.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaTypeGraph {
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, SchemaType>,
}
impl SchemaTypeGraph {
    /// Helper function that just delegates to [`SchemaGraphBuilder::new()`].
    pub fn builder() -> SchemaGraphBuilder {
        SchemaGraphBuilder::new()
    }

    /// Look up the field identified by a `Type.field` coordinate. Returns
    /// `None` if the type is missing or has no fields by that name.
    pub fn field(&self, coordinate: &FieldCoordinate) -> Option<&SchemaField> {
        self.types.get(coordinate.type_name())?
            .as_fields_container()?
            .field(coordinate.field_name())
    }

    pub fn get_type(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// The object types that declare they implement the named interface, in
    /// schema declaration order.
    pub fn implementations(&self, interface_name: &str) -> Vec<&ObjectType> {
        self.types.values()
            .filter_map(|type_| type_.as_object())
            .filter(|obj| obj.implements(interface_name))
            .collect()
    }

    /// The names of the object types that may be returned where the named
    /// type is expected: union members for a union, implementations for an
    /// interface, and the type itself otherwise.
    pub fn possible_type_names(&self, type_name: &str) -> Vec<&str> {
        match self.types.get(type_name) {
            Some(SchemaType::Union(union_type)) => union_type.member_type_names(),
            Some(SchemaType::Interface(_)) =>
                self.implementations(type_name)
                    .into_iter()
                    .map(|obj| obj.name())
                    .collect(),
            Some(type_) => vec![type_.name()],
            None => vec![],
        }
    }

    /// Returns this graph's Query root operation type.
    ///
    /// This factors in any `schema { query: .. }` override, so prefer it over
    /// looking up a type named `"Query"`.
    pub fn query_type(&self) -> &ObjectType {
        self.root_operation_type(OperationKind::Query)
            .expect("query type is verified while building the graph")
    }

    /// The object type used for the given root operation, if the schema
    /// defines one.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        let type_name = match kind {
            OperationKind::Query => Some(&self.query_type),
            OperationKind::Mutation => self.mutation_type.as_ref(),
            OperationKind::Subscription => self.subscription_type.as_ref(),
        }?;
        self.types.get(type_name)?.as_object()
    }

    /// Every defined root operation type paired with its kind, in
    /// query/mutation/subscription order.
    pub fn root_operation_types(&self) -> Vec<(OperationKind, &ObjectType)> {
        [OperationKind::Query, OperationKind::Mutation, OperationKind::Subscription]
            .into_iter()
            .filter_map(|kind| self.root_operation_type(kind).map(|t| (kind, t)))
            .collect()
    }

    /// All types in the graph, built-in scalars first and then in schema
    /// declaration order.
    pub fn types(&self) -> &IndexMap<String, SchemaType> {
        &self.types
    }
}
