use crate::report::SkippedType;
use crate::report::TypeState;
use crate::report::UnmappedArgument;
use crate::report::UnmappedRegistration;
use crate::schema::FieldCoordinate;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// The result of inspecting a schema against the controllers and host types
/// that are meant to serve it.
///
/// A report is immutable. Findings are listed in the order they were
/// discovered, which follows schema declaration order starting from the
/// root operation types.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SchemaReport {
    pub(crate) skipped_types: Vec<SkippedType>,
    pub(crate) type_states: IndexMap<String, TypeState>,
    pub(crate) unmapped_arguments: Vec<UnmappedArgument>,
    pub(crate) unmapped_fields: IndexSet<FieldCoordinate>,
    pub(crate) unmapped_registrations: Vec<UnmappedRegistration>,
}
impl SchemaReport {
    /// `true` when inspection found nothing to report.
    pub fn is_empty(&self) -> bool {
        self.skipped_types.is_empty()
            && self.unmapped_arguments.is_empty()
            && self.unmapped_fields.is_empty()
            && self.unmapped_registrations.is_empty()
    }

    pub fn skipped_type_count(&self) -> usize {
        self.skipped_types.len()
    }

    /// Distinct names of skipped schema types, in discovery order.
    pub fn skipped_type_names(&self) -> Vec<&str> {
        let names: IndexSet<&str> = self.skipped_types.iter()
            .map(SkippedType::type_name)
            .collect();
        names.into_iter().collect()
    }

    pub fn skipped_types(&self) -> &[SkippedType] {
        self.skipped_types.as_slice()
    }

    pub fn skipped_types_for(&self, type_name: &str) -> Vec<&SkippedType> {
        self.skipped_types.iter()
            .filter(|skipped| skipped.type_name() == type_name)
            .collect()
    }

    /// The furthest state inspection reached for the named schema type.
    pub fn type_state(&self, type_name: &str) -> TypeState {
        self.type_states.get(type_name).copied().unwrap_or_default()
    }

    pub fn unmapped_arguments(&self) -> &[UnmappedArgument] {
        self.unmapped_arguments.as_slice()
    }

    pub fn unmapped_field_count(&self) -> usize {
        self.unmapped_fields.len()
    }

    pub fn unmapped_fields(&self) -> &IndexSet<FieldCoordinate> {
        &self.unmapped_fields
    }

    /// Unmapped field names grouped by the name of their declaring type.
    pub fn unmapped_fields_by_type(&self) -> IndexMap<&str, Vec<&str>> {
        let mut by_type: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for coordinate in &self.unmapped_fields {
            by_type.entry(coordinate.type_name())
                .or_default()
                .push(coordinate.field_name());
        }
        by_type
    }

    /// Names of the unmapped fields declared on the named type.
    pub fn unmapped_fields_for(&self, type_name: &str) -> Vec<&str> {
        self.unmapped_fields.iter()
            .filter(|coordinate| coordinate.type_name() == type_name)
            .map(FieldCoordinate::field_name)
            .collect()
    }

    pub fn unmapped_registrations(&self) -> &[UnmappedRegistration] {
        self.unmapped_registrations.as_slice()
    }
}

impl std::fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "GraphQL schema inspection:")?;

        write!(f, "\tUnmapped fields: {{")?;
        for (idx, (type_name, field_names)) in self.unmapped_fields_by_type().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{type_name}=[{}]", field_names.join(", "))?;
        }
        writeln!(f, "}}")?;

        write!(f, "\tUnmapped registrations: {{")?;
        for (idx, registration) in self.unmapped_registrations.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", registration.field_coordinate(), registration.method())?;
        }
        writeln!(f, "}}")?;

        let mut arguments_by_field: IndexMap<&FieldCoordinate, Vec<&str>> = IndexMap::new();
        for argument in &self.unmapped_arguments {
            arguments_by_field.entry(argument.field_coordinate())
                .or_default()
                .push(argument.argument_name());
        }
        write!(f, "\tUnmapped arguments: {{")?;
        for (idx, (coordinate, argument_names)) in arguments_by_field.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coordinate}=[{}]", argument_names.join(", "))?;
        }
        writeln!(f, "}}")?;

        write!(f, "\tSkipped types: [{}]", self.skipped_type_names().join(", "))
    }
}
