use crate::report::SchemaReport;
use crate::report::SkipReason;
use crate::report::SkippedType;
use crate::report::TypeState;
use crate::report::UnmappedArgument;
use crate::report::UnmappedRegistration;
use crate::schema::FieldCoordinate;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Accumulates findings during a single inspection run. Every kind of
/// finding is recorded at most once.
#[derive(Debug, Default)]
pub(crate) struct SchemaReportBuilder {
    checked: IndexSet<(String, String)>,
    skipped_keys: IndexSet<(String, Option<String>)>,
    skipped_types: Vec<SkippedType>,
    type_states: IndexMap<String, TypeState>,
    unmapped_arguments: IndexSet<UnmappedArgument>,
    unmapped_fields: IndexSet<FieldCoordinate>,
    unmapped_registrations: IndexSet<UnmappedRegistration>,
}
impl SchemaReportBuilder {
    pub fn add_skipped_type(
        &mut self,
        type_name: &str,
        host_type: Option<&str>,
        field_coordinate: Option<&FieldCoordinate>,
        reason: SkipReason,
    ) -> bool {
        let key = (type_name.to_string(), host_type.map(str::to_string));
        if !self.skipped_keys.insert(key) {
            return false;
        }
        log::debug!(
            "skipping `{type_name}` (host type: {host_type:?}, via: {}): {reason}",
            field_coordinate.map_or("-".to_string(), |c| c.to_string()),
        );
        self.skipped_types.push(SkippedType {
            field_coordinate: field_coordinate.cloned(),
            host_type: host_type.map(str::to_string),
            reason,
            type_name: type_name.to_string(),
        });
        if !self.type_states.contains_key(type_name) {
            self.type_states.insert(type_name.to_string(), TypeState::Skipped);
        }
        true
    }

    pub fn add_unmapped_argument(
        &mut self,
        field_coordinate: &FieldCoordinate,
        argument_name: &str,
        method: &str,
    ) -> bool {
        log::debug!("`{method}` argument `{argument_name}` is not declared on `{field_coordinate}`");
        self.unmapped_arguments.insert(UnmappedArgument {
            argument_name: argument_name.to_string(),
            field_coordinate: field_coordinate.to_owned(),
            method: method.to_string(),
        })
    }

    pub fn add_unmapped_field(&mut self, field_coordinate: &FieldCoordinate) -> bool {
        let is_new = self.unmapped_fields.insert(field_coordinate.to_owned());
        if is_new {
            log::debug!("`{field_coordinate}` is unmapped");
        }
        is_new
    }

    pub fn add_unmapped_registration(
        &mut self,
        field_coordinate: &FieldCoordinate,
        method: &str,
    ) -> bool {
        log::debug!("`{method}` is registered for `{field_coordinate}`, which is not in the schema");
        self.unmapped_registrations.insert(UnmappedRegistration {
            field_coordinate: field_coordinate.to_owned(),
            method: method.to_string(),
        })
    }

    /// Skipped entries are withdrawn for pairs that some other path through
    /// the graph checked, whichever came first. An entry without a host type
    /// is withdrawn once its schema type was resolved.
    pub fn build(self) -> SchemaReport {
        let checked = self.checked;
        let type_states = self.type_states;
        let skipped_types = self.skipped_types
            .into_iter()
            .filter(|skipped| match &skipped.host_type {
                Some(host_type) =>
                    !checked.contains(&(skipped.type_name.clone(), host_type.clone())),
                None =>
                    type_states.get(&skipped.type_name) != Some(&TypeState::Resolved),
            })
            .collect();

        SchemaReport {
            skipped_types,
            type_states,
            unmapped_arguments: self.unmapped_arguments.into_iter().collect(),
            unmapped_fields: self.unmapped_fields,
            unmapped_registrations: self.unmapped_registrations.into_iter().collect(),
        }
    }

    /// Records that `type_name` was checked field by field against
    /// `host_type`.
    pub fn mark_checked(&mut self, type_name: &str, host_type: &str) {
        self.checked.insert((type_name.to_string(), host_type.to_string()));
    }

    pub fn mark_resolved(&mut self, type_name: &str) {
        self.type_states.insert(type_name.to_string(), TypeState::Resolved);
    }

    /// Records that a type reached during the walk was not checked against
    /// any host type. A type that was already resolved stays resolved.
    pub fn mark_skipped(&mut self, type_name: &str) {
        let state = self.type_states.entry(type_name.to_string()).or_default();
        if *state != TypeState::Resolved {
            *state = TypeState::Skipped;
        }
    }

    pub fn mark_visiting(&mut self, type_name: &str) {
        let state = self.type_states.entry(type_name.to_string()).or_default();
        if *state != TypeState::Resolved {
            *state = TypeState::Visiting;
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_state(&self, type_name: &str) -> TypeState {
        self.type_states.get(type_name).copied().unwrap_or_default()
    }
}
