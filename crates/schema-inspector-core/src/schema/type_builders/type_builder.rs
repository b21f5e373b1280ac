use crate::ast;
use crate::loc;
use crate::schema::NamedSchemaTypeRef;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaField;
use crate::schema::SchemaType;
use crate::schema::SchemaTypeKind;
use crate::schema::TypeAnnotation;
use crate::schema::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Each kind of type definition gets its own builder. Extensions whose base
/// type has not been seen yet are held until [`TypeBuilder::finalize`].
pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;
    type AstTypeExtension;

    fn finalize(self, types_builder: &mut TypesMapBuilder) -> Result<()>;

    fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: Self::AstTypeDef,
    ) -> Result<()>;

    fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: Self::AstTypeExtension,
    ) -> Result<()>;
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn append_fields(
        type_name: &str,
        fields: &mut IndexMap<String, SchemaField>,
        file_path: Option<&Path>,
        ast_fields: &[ast::schema::Field],
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field_pos = loc::FilePosition::from_pos(file_path, ast_field.position);
            let field_loc = loc::SourceLocation::from(field_pos);

            if let Some(existing_field) = fields.get(ast_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: field_loc,
                });
            }

            fields.insert(ast_field.name.to_string(), SchemaField {
                arguments: Self::arguments_from_ast(file_path, &ast_field.arguments),
                def_location: field_loc.to_owned(),
                name: ast_field.name.to_string(),
                parent_type_name: type_name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_loc,
                    &ast_field.field_type,
                ),
            });
        }
        Ok(())
    }

    pub fn append_input_fields(
        type_name: &str,
        fields: &mut IndexMap<String, SchemaField>,
        file_path: Option<&Path>,
        ast_fields: &[ast::schema::InputValue],
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field_loc = loc::SourceLocation::from(
                loc::FilePosition::from_pos(file_path, ast_field.position),
            );

            if let Some(existing_field) = fields.get(ast_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: field_loc,
                });
            }

            fields.insert(ast_field.name.to_string(), SchemaField {
                arguments: IndexMap::new(),
                def_location: field_loc.to_owned(),
                name: ast_field.name.to_string(),
                parent_type_name: type_name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_loc,
                    &ast_field.value_type,
                ),
            });
        }
        Ok(())
    }

    /// Interfaces listed more than once in an `implements` clause are kept
    /// once.
    pub fn append_interface_refs(
        interfaces: &mut Vec<NamedSchemaTypeRef>,
        def_location: &loc::SourceLocation,
        interface_names: &[String],
    ) {
        for iface_name in interface_names {
            if !interfaces.iter().any(|iface| iface.name() == iface_name) {
                interfaces.push(NamedSchemaTypeRef::new(
                    iface_name,
                    def_location.to_owned(),
                ));
            }
        }
    }

    fn arguments_from_ast(
        file_path: Option<&Path>,
        ast_args: &[ast::schema::InputValue],
    ) -> IndexMap<String, TypeAnnotation> {
        ast_args.iter().map(|input_val| {
            let arg_loc = loc::SourceLocation::from(
                loc::FilePosition::from_pos(file_path, input_val.position),
            );
            (
                input_val.name.to_string(),
                TypeAnnotation::from_ast_type(&arg_loc, &input_val.value_type),
            )
        }).collect()
    }

    pub fn invalid_extension(
        type_name: &str,
        defined_type: &SchemaType,
        extension_kind: SchemaTypeKind,
        file_path: Option<&Path>,
        position: graphql_parser::Pos,
    ) -> SchemaBuildError {
        SchemaBuildError::InvalidExtensionType {
            type_name: type_name.to_string(),
            defined_kind: defined_type.kind(),
            extension_kind,
            extension_loc: loc::FilePosition::from_pos(file_path, position).into(),
        }
    }

    pub fn undefined_extension(
        type_name: &str,
        file_path: Option<&Path>,
        position: graphql_parser::Pos,
    ) -> SchemaBuildError {
        SchemaBuildError::ExtensionOfUndefinedType {
            type_name: type_name.to_string(),
            extension_loc: loc::FilePosition::from_pos(file_path, position).into(),
        }
    }
}
