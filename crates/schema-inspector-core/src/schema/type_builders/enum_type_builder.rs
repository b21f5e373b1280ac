use crate::ast;
use crate::loc;
use crate::schema::EnumType;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaType;
use crate::schema::SchemaTypeKind;
use crate::schema::TypesMapBuilder;
use crate::schema::type_builders::TypeBuilder;
use crate::schema::type_builders::TypeBuilderHelpers;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::EnumTypeExtension)>,
}
impl EnumTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        type_: &mut EnumType,
        ext: ast::schema::EnumTypeExtension,
    ) {
        for ext_val in ext.values {
            if !type_.values.contains(&ext_val.name) {
                type_.values.push(ext_val.name);
            }
        }
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;
    type AstTypeExtension = ast::schema::EnumTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let ext_path = ext_path.as_deref();
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(SchemaType::Enum(enum_type)) =>
                    Self::merge_type_extension(enum_type, ext),

                Some(non_enum_type) =>
                    return Err(TypeBuilderHelpers::invalid_extension(
                        ext.name.as_str(),
                        non_enum_type,
                        SchemaTypeKind::Enum,
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

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            SchemaType::Enum(EnumType {
                def_location: def_location.to_owned(),
                name: def.name.to_string(),
                values: def.values.into_iter().map(|val| val.name).collect(),
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
            Some(SchemaType::Enum(enum_type)) => {
                Self::merge_type_extension(enum_type, ext);
                Ok(())
            },

            Some(non_enum_type) =>
                Err(TypeBuilderHelpers::invalid_extension(
                    ext.name.as_str(),
                    non_enum_type,
                    SchemaTypeKind::Enum,
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
