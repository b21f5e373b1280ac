use crate::ast;
use crate::loc;
use crate::schema::FieldsContainer;
use crate::schema::ObjectType;
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
pub(crate) struct ObjectTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::ObjectTypeExtension)>,
}
impl ObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        obj_type: &mut ObjectType,
        ext_file_path: Option<&Path>,
        ext: ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        let ext_loc: loc::SourceLocation =
            loc::FilePosition::from_pos(ext_file_path, ext.position).into();
        TypeBuilderHelpers::append_interface_refs(
            &mut obj_type.0.interfaces,
            &ext_loc,
            &ext.implements_interfaces,
        );
        TypeBuilderHelpers::append_fields(
            ext.name.as_str(),
            &mut obj_type.0.fields,
            ext_file_path,
            &ext.fields,
        )
    }
}

#[inherent]
impl TypeBuilder for ObjectTypeBuilder {
    type AstTypeDef = ast::schema::ObjectType;
    type AstTypeExtension = ast::schema::ObjectTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let ext_path = ext_path.as_deref();
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(SchemaType::Object(obj_type)) =>
                    Self::merge_type_extension(obj_type, ext_path, ext)?,

                Some(non_obj_type) =>
                    return Err(TypeBuilderHelpers::invalid_extension(
                        ext.name.as_str(),
                        non_obj_type,
                        SchemaTypeKind::Object,
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
        TypeBuilderHelpers::append_fields(
            def.name.as_str(),
            &mut fields,
            file_path,
            &def.fields,
        )?;

        let mut interfaces = vec![];
        TypeBuilderHelpers::append_interface_refs(
            &mut interfaces,
            &def_location,
            &def.implements_interfaces,
        );

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            SchemaType::Object(ObjectType(FieldsContainer {
                def_location: def_location.to_owned(),
                fields,
                interfaces,
                name: def.name.to_string(),
            })),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: <Self as TypeBuilder>::AstTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(SchemaType::Object(obj_type)) =>
                Self::merge_type_extension(obj_type, file_path, ext),

            Some(non_obj_type) =>
                Err(TypeBuilderHelpers::invalid_extension(
                    ext.name.as_str(),
                    non_obj_type,
                    SchemaTypeKind::Object,
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
