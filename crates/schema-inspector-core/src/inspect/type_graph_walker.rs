use crate::host::HostType;
use crate::host::HostTypeRef;
use crate::inspect::InspectionContext;
use crate::inspect::InterfaceFieldPolicy;
use crate::report::SchemaReport;
use crate::report::SchemaReportBuilder;
use crate::report::SkipReason;
use crate::schema::FieldCoordinate;
use crate::schema::FieldsContainer;
use crate::schema::ObjectType;
use crate::schema::SchemaField;
use crate::schema::SchemaType;
use std::collections::HashSet;

/// Walks the schema type graph from the root operation types, pairing each
/// reachable schema type with the host types that back it and recording
/// every schema field that nothing can serve.
///
/// Each (schema type, host type) pair is checked at most once, so cycles in
/// the schema terminate.
pub(crate) struct TypeGraphWalker<'a> {
    ctx: InspectionContext<'a>,
    report: SchemaReportBuilder,
    visited: HashSet<(&'a str, &'a str)>,
}
impl<'a> TypeGraphWalker<'a> {
    pub fn new(ctx: InspectionContext<'a>) -> Self {
        Self {
            ctx,
            report: SchemaReportBuilder::new(),
            visited: HashSet::new(),
        }
    }

    pub fn walk(mut self) -> SchemaReport {
        let schema = self.ctx.schema;
        for (operation, root_type) in schema.root_operation_types() {
            log::debug!("inspecting {operation:?} root type `{}`", root_type.name());
            self.report.mark_visiting(root_type.name());
            for field in root_type.fields().values() {
                let coordinate = field.coordinate();
                match self.ctx.controllers.get(&coordinate).copied() {
                    Some(method) => self.check_field(field, &coordinate, method.return_type()),
                    None => {
                        self.report.add_unmapped_field(&coordinate);
                    },
                }
            }
            self.report.mark_resolved(root_type.name());
        }

        self.check_registrations();
        self.report.build()
    }

    /// Controller registrations for fields the schema doesn't have, and
    /// bound arguments that the schema field doesn't declare.
    fn check_registrations(&mut self) {
        let schema = self.ctx.schema;
        for (coordinate, method) in &self.ctx.controllers {
            let method_desc = method.to_string();
            let Some(field) = schema.field(coordinate) else {
                self.report.add_unmapped_registration(coordinate, method_desc.as_str());
                continue;
            };
            for argument_name in method.arguments() {
                if !field.arguments().contains_key(argument_name) {
                    self.report.add_unmapped_argument(
                        coordinate,
                        argument_name.as_str(),
                        method_desc.as_str(),
                    );
                }
            }
        }
    }

    /// Checks the schema type a field returns against the host type that
    /// serves the field.
    fn check_field(
        &mut self,
        field: &'a SchemaField,
        coordinate: &FieldCoordinate,
        host_type_ref: &'a HostTypeRef,
    ) {
        let schema = self.ctx.schema;
        let Some(output_type) = field.type_annotation().innermost_type(schema) else {
            return;
        };
        let element = host_type_ref.element_type(self.ctx.wrapper_types);
        log::trace!(
            "`{coordinate}` returns `{}` backed by `{element}`",
            output_type.name(),
        );

        match output_type {
            SchemaType::Object(obj) => self.check_object(obj, coordinate, element),
            SchemaType::Interface(_) | SchemaType::Union(_) =>
                self.check_polymorphic(output_type, coordinate, element),
            leaf_type if leaf_type.is_leaf() => self.report.mark_resolved(leaf_type.name()),
            // Output fields never reference input types in a built graph.
            _ => (),
        }
    }

    /// Checks every field of a schema type against one host type.
    fn check_fields(
        &mut self,
        container: &'a FieldsContainer,
        host_type: &'a HostType,
    ) {
        if !self.visited.insert((container.name(), host_type.path())) {
            return;
        }

        log::trace!("checking `{}` against `{}`", container.name(), host_type.path());
        self.report.mark_checked(container.name(), host_type.path());
        self.report.mark_visiting(container.name());
        for field in container.fields().values() {
            let coordinate = field.coordinate();
            if let Some(method) = self.ctx.controllers.get(&coordinate).copied() {
                self.check_field(field, &coordinate, method.return_type());
            } else if let Some(member_type_ref) = host_type.member(field.name()) {
                self.check_field(field, &coordinate, member_type_ref);
            } else {
                self.report.add_unmapped_field(&coordinate);
            }
        }
        self.report.mark_resolved(container.name());
    }

    /// Checks one object type that may be returned where `declared` is
    /// expected. Returns `true` if it was checked against any host type.
    ///
    /// A concrete `declared` type only ever backs the object type it was
    /// resolved for. When `binds_directly` is set (the object type *is* the
    /// field's type) the concrete type is used as-is; otherwise the object
    /// type is an implementation that the data fetcher never returns.
    fn check_member(
        &mut self,
        member: &'a ObjectType,
        coordinate: &FieldCoordinate,
        declared: &'a HostType,
        binds_directly: bool,
    ) -> bool {
        if !declared.is_abstract() {
            if binds_directly {
                self.check_fields(member, declared);
                return true;
            }

            let candidates = self.ctx.candidates(member.name(), Some(declared));
            if candidates.iter().any(|candidate| candidate.path() == declared.path()) {
                self.check_fields(member, declared);
                return true;
            }
            self.skip(
                member.name(),
                candidates.first().map(|candidate| candidate.path()),
                coordinate,
                SkipReason::NotActiveImplementation,
            );
            return false;
        }

        let registry = self.ctx.registry;
        let candidates = self.ctx.candidates(member.name(), Some(declared));
        let active = candidates.iter()
            .copied()
            .filter(|candidate| registry.is_assignable(candidate.path(), declared.path()))
            .collect::<Vec<_>>();

        if active.is_empty() {
            let reason =
                if candidates.is_empty() {
                    SkipReason::NoHostCandidate
                } else {
                    SkipReason::NotAssignable
                };
            self.skip(
                member.name(),
                candidates.first().map(|candidate| candidate.path()),
                coordinate,
                reason,
            );
            return false;
        }

        for host_type in active {
            self.check_fields(member, host_type);
        }
        true
    }

    fn check_object(
        &mut self,
        obj: &'a ObjectType,
        coordinate: &FieldCoordinate,
        element: &'a HostTypeRef,
    ) {
        match self.declared_host_type(element) {
            Ok(declared) => {
                self.check_member(obj, coordinate, declared, true);
            },
            Err(reason) =>
                self.skip(obj.name(), element.path(), coordinate, reason),
        }
    }

    /// Checks an interface or union against the host type declared for it by
    /// checking each of its possible object types in turn.
    fn check_polymorphic(
        &mut self,
        type_: &'a SchemaType,
        coordinate: &FieldCoordinate,
        element: &'a HostTypeRef,
    ) {
        let schema = self.ctx.schema;
        let member_names = schema.possible_type_names(type_.name());

        let declared = match self.declared_host_type(element) {
            Ok(declared) => declared,
            Err(reason) => {
                for member_name in member_names {
                    self.skip(member_name, element.path(), coordinate, reason);
                }
                self.report.mark_skipped(type_.name());
                return;
            },
        };

        self.report.mark_visiting(type_.name());
        let mut any_checked = false;
        // A concrete declared type is checked per implementation below.
        if self.ctx.interface_field_policy == InterfaceFieldPolicy::IncludeAbstractType
            && declared.is_abstract()
            && let Some(iface) = type_.as_interface() {
            self.check_fields(iface, declared);
            any_checked = true;
        }

        for member_name in member_names {
            let Some(member) = schema.get_type(member_name).and_then(SchemaType::as_object) else {
                continue;
            };
            any_checked |= self.check_member(member, coordinate, declared, false);
        }

        if any_checked {
            self.report.mark_resolved(type_.name());
        } else {
            self.report.mark_skipped(type_.name());
        }
    }

    fn declared_host_type(
        &self,
        element: &'a HostTypeRef,
    ) -> std::result::Result<&'a HostType, SkipReason> {
        match element {
            HostTypeRef::Named { path, .. } =>
                self.ctx.registry.get(path).ok_or(SkipReason::UnknownHostType),
            HostTypeRef::List(_) | HostTypeRef::Opaque | HostTypeRef::Optional(_) =>
                Err(SkipReason::OpaqueHostType),
        }
    }

    fn skip(
        &mut self,
        type_name: &str,
        host_type: Option<&str>,
        coordinate: &FieldCoordinate,
        reason: SkipReason,
    ) {
        self.report.add_skipped_type(type_name, host_type, Some(coordinate), reason);
        self.report.mark_skipped(type_name);
    }
}
