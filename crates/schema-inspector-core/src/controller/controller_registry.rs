use crate::controller::ControllerMethod;
use crate::controller::ControllerRegistryBuilder;
use crate::controller::MappingTarget;
use crate::schema::FieldCoordinate;
use crate::schema::SchemaTypeGraph;
use indexmap::IndexMap;

/// Every controller method registered as the data fetcher for a schema
/// field, keyed by the field it's registered against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControllerRegistry {
    pub(crate) mappings: IndexMap<MappingTarget, ControllerMethod>,
}
impl ControllerRegistry {
    pub fn builder() -> ControllerRegistryBuilder {
        ControllerRegistryBuilder::new()
    }

    /// Resolves every registration to a field coordinate within `schema`.
    ///
    /// If two registrations land on the same coordinate (say, one by
    /// operation and one by `Query.field`), the one registered first wins.
    pub fn coordinate_map(
        &self,
        schema: &SchemaTypeGraph,
    ) -> IndexMap<FieldCoordinate, &ControllerMethod> {
        let mut coordinates = IndexMap::new();
        for (target, method) in &self.mappings {
            let coordinate = target.coordinate(schema);
            if let Some(existing) = coordinates.get(&coordinate) {
                log::warn!(
                    "`{target}` resolves to `{coordinate}`, which is already \
                    mapped to `{existing}`; ignoring `{method}`",
                );
                continue;
            }
            coordinates.insert(coordinate, method);
        }
        coordinates
    }

    pub fn get(&self, target: &MappingTarget) -> Option<&ControllerMethod> {
        self.mappings.get(target)
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn mappings(&self) -> &IndexMap<MappingTarget, ControllerMethod> {
        &self.mappings
    }
}
