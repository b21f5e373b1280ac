use crate::ast;
use crate::loc;
use crate::schema::ScalarType;
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

/// Scalar extensions only add directives, which the inspector does not track;
/// they are still checked against the type they extend.
#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::ScalarTypeExtension)>,
}
impl ScalarTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn check_extension(
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: &ast::schema::ScalarTypeExtension,
    ) -> Result<bool> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(SchemaType::Scalar(_)) => Ok(true),

            Some(non_scalar_type) =>
                Err(TypeBuilderHelpers::invalid_extension(
                    ext.name.as_str(),
                    non_scalar_type,
                    SchemaTypeKind::Scalar,
                    file_path,
                    ext.position,
                )),

            None => Ok(false),
        }
    }
}

#[inherent]
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;
    type AstTypeExtension = ast::schema::ScalarTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let ext_path = ext_path.as_deref();
            if !Self::check_extension(types_builder, ext_path, &ext)? {
                return Err(TypeBuilderHelpers::undefined_extension(
                    ext.name.as_str(),
                    ext_path,
                    ext.position,
                ));
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
            SchemaType::Scalar(ScalarType {
                def_location: def_location.to_owned(),
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
        if !Self::check_extension(types_builder, file_path, &ext)? {
            self.extensions.push((file_path.map(Path::to_path_buf), ext));
        }
        Ok(())
    }
}
