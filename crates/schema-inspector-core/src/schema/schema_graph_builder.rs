use crate::ast;
use crate::loc;
use crate::schema::NamedTypeDefLocation;
use crate::schema::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaFileError;
use crate::schema::SchemaType;
use crate::schema::SchemaTypeGraph;
use crate::schema::TypesMapBuilder;
use crate::schema::type_builders::EnumTypeBuilder;
use crate::schema::type_builders::InputObjectTypeBuilder;
use crate::schema::type_builders::InterfaceTypeBuilder;
use crate::schema::type_builders::ObjectTypeBuilder;
use crate::schema::type_builders::ScalarTypeBuilder;
use crate::schema::type_builders::TypeBuilder;
use crate::schema::type_builders::UnionTypeBuilder;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`SchemaTypeGraph`] from one or more SDL documents.
///
/// ```
/// use schema_inspector_core::schema::SchemaGraphBuilder;
///
/// let graph = SchemaGraphBuilder::new()
///     .load_str(None, "type Query { books: [Book!]! }")?
///     .load_str(None, "type Book { title: String! }")?
///     .build()?;
///
/// assert!(graph.has_type("Book"));
/// # Ok::<(), schema_inspector_core::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaGraphBuilder {
    enum_builder: EnumTypeBuilder,
    inputobject_builder: InputObjectTypeBuilder,
    interface_builder: InterfaceTypeBuilder,
    mutation_type: Option<NamedTypeDefLocation>,
    object_builder: ObjectTypeBuilder,
    query_type: Option<NamedTypeDefLocation>,
    scalar_builder: ScalarTypeBuilder,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
    union_builder: UnionTypeBuilder,
}
impl SchemaGraphBuilder {
    pub fn build(mut self) -> Result<SchemaTypeGraph> {
        self.enum_builder.finalize(&mut self.types_map_builder)?;
        self.inputobject_builder.finalize(&mut self.types_map_builder)?;
        self.interface_builder.finalize(&mut self.types_map_builder)?;
        self.object_builder.finalize(&mut self.types_map_builder)?;
        self.scalar_builder.finalize(&mut self.types_map_builder)?;
        self.union_builder.finalize(&mut self.types_map_builder)?;

        let query_type = Self::resolve_operation_type(
            &self.types_map_builder,
            OperationKind::Query,
            self.query_type.take(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = Self::resolve_operation_type(
            &self.types_map_builder,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;
        let subscription_type = Self::resolve_operation_type(
            &self.types_map_builder,
            OperationKind::Subscription,
            self.subscription_type.take(),
        )?;

        let types = self.types_map_builder.into_types_map()?;
        log::debug!(
            "Built schema type graph with {} types (query: `{query_type}`).",
            types.len(),
        );

        Ok(SchemaTypeGraph {
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }

    pub fn new() -> Self {
        Self {
            enum_builder: EnumTypeBuilder::new(),
            inputobject_builder: InputObjectTypeBuilder::new(),
            interface_builder: InterfaceTypeBuilder::new(),
            mutation_type: None,
            object_builder: ObjectTypeBuilder::new(),
            query_type: None,
            scalar_builder: ScalarTypeBuilder::new(),
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
            union_builder: UnionTypeBuilder::new(),
        }
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = SchemaFileError::read(file_path)?;
            self = self.load_str(Some(file_path), file_content.as_str())?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.map(Path::to_path_buf),
                    err: err.to_string(),
                })?.into_static();

        log::trace!(
            "Parsed {} definitions from {:?}.",
            ast_doc.definitions.len(),
            file_path,
        );
        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }

        Ok(self)
    }

    /// An explicit `schema { .. }` declaration wins; otherwise an object type
    /// with the conventional root name is used if one exists.
    fn resolve_operation_type(
        types_map_builder: &TypesMapBuilder,
        operation: OperationKind,
        declared: Option<NamedTypeDefLocation>,
    ) -> Result<Option<String>> {
        match declared {
            Some(typedef_loc) => match types_map_builder.get_type(&typedef_loc.type_name) {
                Some(SchemaType::Object(_)) => Ok(Some(typedef_loc.type_name)),
                _ => Err(SchemaBuildError::InvalidOperationType {
                    operation,
                    type_name: typedef_loc.type_name,
                }),
            },

            None => match types_map_builder.get_type(operation.default_type_name()) {
                Some(SchemaType::Object(_)) =>
                    Ok(Some(operation.default_type_name().to_string())),
                _ => Ok(None),
            },
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            // Directives carry no information about field coverage.
            Definition::DirectiveDefinition(_) => Ok(()),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, schema_def.position).into();

        let declarations = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];
        for (operation, type_name) in declarations {
            let Some(type_name) = type_name else { continue };
            let typedef_loc = NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name,
            };
            let slot = match operation {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot.as_ref() {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.to_owned(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                self.enum_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    enum_def,
                ),

            TypeDefinition::InputObject(inputobj_def) =>
                self.inputobject_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_def,
                ),

            TypeDefinition::Interface(iface_def) =>
                self.interface_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    iface_def,
                ),

            TypeDefinition::Object(obj_def) =>
                self.object_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    obj_def,
                ),

            TypeDefinition::Scalar(scalar_def) =>
                self.scalar_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_def,
                ),

            TypeDefinition::Union(union_def) =>
                self.union_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    union_def,
                ),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(enum_ext) =>
                self.enum_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    enum_ext,
                ),

            TypeExtension::InputObject(inputobj_ext) =>
                self.inputobject_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_ext,
                ),

            TypeExtension::Interface(iface_ext) =>
                self.interface_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    iface_ext,
                ),

            TypeExtension::Object(obj_ext) =>
                self.object_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    obj_ext,
                ),

            TypeExtension::Scalar(scalar_ext) =>
                self.scalar_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_ext,
                ),

            TypeExtension::Union(union_ext) =>
                self.union_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    union_ext,
                ),
        }
    }
}
impl Default for SchemaGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
