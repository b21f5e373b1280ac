use crate::controller::ControllerMethod;
use crate::controller::ControllerRegistry;
use crate::controller::ControllerRegistryError;
use crate::controller::MappingTarget;
use crate::schema::FieldCoordinate;
use crate::schema::OperationKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ControllerRegistryError>;

/// Collects controller method registrations.
///
/// ```
/// use schema_inspector_core::controller::ControllerMethod;
/// use schema_inspector_core::controller::ControllerRegistry;
/// use schema_inspector_core::host::HostTypeRef;
///
/// let controllers = ControllerRegistry::builder()
///     .query("books", ControllerMethod::new(
///         "BookController",
///         "books",
///         "Vec<library::Book>".parse().unwrap(),
///     ))?
///     .schema_mapping("Book", "author", ControllerMethod::new(
///         "BookController",
///         "author",
///         HostTypeRef::named("library::Author"),
///     ))?
///     .build();
///
/// assert_eq!(controllers.len(), 2);
/// # Ok::<(), schema_inspector_core::controller::ControllerRegistryError>(())
/// ```
#[derive(Debug, Default)]
pub struct ControllerRegistryBuilder {
    mappings: IndexMap<MappingTarget, ControllerMethod>,
}
impl ControllerRegistryBuilder {
    pub fn build(self) -> ControllerRegistry {
        ControllerRegistry {
            mappings: self.mappings,
        }
    }

    /// Registers a method against a `Type.field` coordinate string.
    pub fn coordinate(self, coordinate: &str, method: ControllerMethod) -> Result<Self> {
        let coordinate = FieldCoordinate::parse(coordinate).ok_or_else(
            || ControllerRegistryError::InvalidCoordinate {
                coordinate: coordinate.to_string(),
            },
        )?;
        self.register(MappingTarget::Field(coordinate), method)
    }

    pub fn mutation(self, field_name: &str, method: ControllerMethod) -> Result<Self> {
        self.operation(OperationKind::Mutation, field_name, method)
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation(
        self,
        operation: OperationKind,
        field_name: &str,
        method: ControllerMethod,
    ) -> Result<Self> {
        self.register(MappingTarget::Operation {
            field_name: field_name.to_string(),
            operation,
        }, method)
    }

    pub fn query(self, field_name: &str, method: ControllerMethod) -> Result<Self> {
        self.operation(OperationKind::Query, field_name, method)
    }

    pub fn register(
        mut self,
        target: MappingTarget,
        method: ControllerMethod,
    ) -> Result<Self> {
        if let Some(existing) = self.mappings.get(&target) {
            return Err(ControllerRegistryError::DuplicateMapping {
                existing_method: existing.to_string(),
                new_method: method.to_string(),
                target,
            });
        }
        log::trace!("registering `{method}` for `{target}`");
        self.mappings.insert(target, method);
        Ok(self)
    }

    pub fn schema_mapping(
        self,
        type_name: &str,
        field_name: &str,
        method: ControllerMethod,
    ) -> Result<Self> {
        self.register(
            MappingTarget::Field(FieldCoordinate::new(type_name, field_name)),
            method,
        )
    }

    pub fn subscription(self, field_name: &str, method: ControllerMethod) -> Result<Self> {
        self.operation(OperationKind::Subscription, field_name, method)
    }
}
