use crate::ast;
use crate::loc;
use crate::schema::InputObjectType;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaType;
use crate::schema::SchemaTypeKind;
use crate::schema::TypesMapBuilder;
use crate::schema::type_builders::TypeBuilder;
use crate::schema::type_builders::TypeBuilderHelpers;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::InputObjectTypeExtension)>,
}
impl InputObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }
}

#[inherent]
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::schema::InputObjectType;
    type AstTypeExtension = ast::schema::InputObjectTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let ext_path = ext_path.as_deref();
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(SchemaType::InputObject(input_type)) =>
                    TypeBuilderHelpers::append_input_fields(
                        ext.name.as_str(),
                        &mut input_type.fields,
                        ext_path,
                        &ext.fields,
                    )?,

                Some(non_input_type) =>
                    return Err(TypeBuilderHelpers::invalid_extension(
                        ext.name.as_str(),
                        non_input_type,
                        SchemaTypeKind::InputObject,
                        ext_path,
                        ext.position,
                    )),

                None =>
                    return Err(TypeBuilderHelpers::undefined_extension(
                        ext.name.as_str(),
                        ext_path,
                        ext.position,
                    )),
            }
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: <Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        let mut fields = IndexMap::new();
        TypeBuilderHelpers::append_input_fields(
            def.name.as_str(),
            &mut fields,
            file_path,
            &def.fields,
        )?;

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            SchemaType::InputObject(InputObjectType {
                def_location: def_location.to_owned(),
                fields,
                name: def.name.to_string(),
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: <Self as TypeBuilder>::AstTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(SchemaType::InputObject(input_type)) =>
                TypeBuilderHelpers::append_input_fields(
                    ext.name.as_str(),
                    &mut input_type.fields,
                    file_path,
                    &ext.fields,
                ),

            Some(non_input_type) =>
                Err(TypeBuilderHelpers::invalid_extension(
                    ext.name.as_str(),
                    non_input_type,
                    SchemaTypeKind::InputObject,
                    file_path,
                    ext.position,
                )),

            None => {
                self.extensions.push((file_path.map(Path::to_path_buf), ext));
                Ok(())
            },
        }
    }
}
