use crate::ast;
use crate::loc;
use crate::schema::FieldsContainer;
use crate::schema::InterfaceType;
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
pub(crate) struct InterfaceTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::InterfaceTypeExtension)>,
}
impl InterfaceTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        iface_type: &mut InterfaceType,
        ext_file_path: Option<&Path>,
        ext: ast::schema::InterfaceTypeExtension,
    ) -> Result<()> {
        TypeBuilderHelpers::append_fields(
            ext.name.as_str(),
            &mut iface_type.0.fields,
            ext_file_path,
            &ext.fields,
        )
    }
}

#[inherent]
impl TypeBuilder for InterfaceTypeBuilder {
    type AstTypeDef = ast::schema::InterfaceType;
    type AstTypeExtension = ast::schema::InterfaceTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let ext_path = ext_path.as_deref();
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(SchemaType::Interface(iface_type)) =>
                    Self::merge_type_extension(iface_type, ext_path, ext)?,

                Some(non_iface_type) =>
                    return Err(TypeBuilderHelpers::invalid_extension(
                        ext.name.as_str(),
                        non_iface_type,
                        SchemaTypeKind::Interface,
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
            SchemaType::Interface(InterfaceType(FieldsContainer {
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
            Some(SchemaType::Interface(iface_type)) =>
                Self::merge_type_extension(iface_type, file_path, ext),

            Some(non_iface_type) =>
                Err(TypeBuilderHelpers::invalid_extension(
                    ext.name.as_str(),
                    non_iface_type,
                    SchemaTypeKind::Interface,
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
