use crate::controller::ControllerRegistry;
use crate::host::HostTypeRegistry;
use crate::host::WrapperTypes;
use crate::inspect::InspectError;
use crate::inspect::InspectionContext;
use crate::inspect::InterfaceFieldPolicy;
use crate::inspect::SchemaMappingInspectorBuilder;
use crate::inspect::TypeGraphWalker;
use crate::report::SchemaReport;
use crate::resolver::ClassResolver;
use crate::resolver::ClassResolverChain;
use crate::schema::SchemaGraphBuilder;
use crate::schema::SchemaTypeGraph;
use std::path::Path;

type Result<T> = std::result::Result<T, InspectError>;

/// Checks that every field of a schema is served by something: either a
/// registered controller method or a member of the host type backing the
/// field's parent type.
///
/// ```
/// use schema_inspector_core::SchemaMappingInspector;
/// use schema_inspector_core::controller::ControllerMethod;
/// use schema_inspector_core::controller::ControllerRegistry;
/// use schema_inspector_core::host::HostType;
/// use schema_inspector_core::host::HostTypeRef;
/// use schema_inspector_core::host::HostTypeRegistry;
/// use schema_inspector_core::schema::SchemaGraphBuilder;
///
/// let schema = SchemaGraphBuilder::new()
///     .load_str(None, "type Query { books: [Book] } type Book { title: String isbn: String }")?
///     .build()?;
/// let controllers = ControllerRegistry::builder()
///     .query("books", ControllerMethod::new(
///         "BookController",
///         "books",
///         "Vec<library::Book>".parse().unwrap(),
///     ))
///     .unwrap()
///     .build();
/// let host_types = HostTypeRegistry::try_from_types([
///     HostType::concrete("library::Book")
///         .with_member("title", HostTypeRef::named("String")),
/// ]).unwrap();
///
/// let report = SchemaMappingInspector::builder()
///     .build()
///     .inspect(&schema, &controllers, &host_types)?;
/// assert_eq!(report.unmapped_fields_for("Book"), vec!["isbn"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// An inspector holds configuration only. It can be run any number of
/// times and produces the same report for the same inputs.
#[derive(Debug)]
pub struct SchemaMappingInspector {
    pub(crate) class_resolver: ClassResolverChain,
    pub(crate) interface_field_policy: InterfaceFieldPolicy,
    pub(crate) wrapper_types: WrapperTypes,
}
impl SchemaMappingInspector {
    pub fn builder() -> SchemaMappingInspectorBuilder {
        SchemaMappingInspectorBuilder::new()
    }

    pub fn class_resolver(&self) -> &dyn ClassResolver {
        &self.class_resolver
    }

    pub fn inspect(
        &self,
        schema: &SchemaTypeGraph,
        controllers: &ControllerRegistry,
        host_types: &HostTypeRegistry,
    ) -> Result<SchemaReport> {
        self.class_resolver.check_config(schema, host_types)?;

        let ctx = InspectionContext::new(
            schema,
            controllers,
            host_types,
            &self.class_resolver,
            self.interface_field_policy,
            &self.wrapper_types,
        );
        let report = TypeGraphWalker::new(ctx).walk();
        log::debug!(
            "Inspection found {} unmapped fields and {} skipped types.",
            report.unmapped_field_count(),
            report.skipped_type_count(),
        );
        Ok(report)
    }

    /// Builds a schema from SDL files and inspects it.
    pub fn inspect_files(
        &self,
        schema_files: Vec<impl AsRef<Path>>,
        controllers: &ControllerRegistry,
        host_types: &HostTypeRegistry,
    ) -> Result<SchemaReport> {
        let schema = SchemaGraphBuilder::new()
            .load_files(schema_files)?
            .build()?;
        self.inspect(&schema, controllers, host_types)
    }

    /// Builds a schema from an SDL string and inspects it.
    pub fn inspect_sdl(
        &self,
        sdl: &str,
        controllers: &ControllerRegistry,
        host_types: &HostTypeRegistry,
    ) -> Result<SchemaReport> {
        let schema = SchemaGraphBuilder::new()
            .load_str(None, sdl)?
            .build()?;
        self.inspect(&schema, controllers, host_types)
    }

    pub fn interface_field_policy(&self) -> InterfaceFieldPolicy {
        self.interface_field_policy
    }

    pub fn wrapper_types(&self) -> &WrapperTypes {
        &self.wrapper_types
    }
}

impl Default for SchemaMappingInspector {
    fn default() -> Self {
        Self::builder().build()
    }
}
