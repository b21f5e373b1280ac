use crate::ast;
use crate::loc;
use crate::schema::NamedSchemaTypeRef;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaType;
use crate::schema::SchemaTypeKind;
use crate::schema::TypesMapBuilder;
use crate::schema::UnionType;
use crate::schema::type_builders::TypeBuilder;
use crate::schema::type_builders::TypeBuilderHelpers;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::UnionTypeExtension)>,
}
impl UnionTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn append_members(
        union_name: &str,
        members: &mut IndexMap<String, NamedSchemaTypeRef>,
        member_loc: &loc::SourceLocation,
        member_names: &[String],
    ) -> Result<()> {
        for member_name in member_names {
            if members.contains_key(member_name.as_str()) {
                return Err(SchemaBuildError::DuplicateUnionMember {
                    type_name: union_name.to_string(),
                    member_name: member_name.to_string(),
                    location: member_loc.to_owned(),
                });
            }
            members.insert(member_name.to_string(), NamedSchemaTypeRef::new(
                member_name,
                member_loc.to_owned(),
            ));
        }
        Ok(())
    }

    fn merge_type_extension(
        type_: &mut UnionType,
        ext_file_path: Option<&Path>,
        ext: ast::schema::UnionTypeExtension,
    ) -> Result<()> {
        let ext_loc: loc::SourceLocation =
            loc::FilePosition::from_pos(ext_file_path, ext.position).into();
        Self::append_members(
            ext.name.as_str(),
            &mut type_.members,
            &ext_loc,
            &ext.types,
        )
    }
}

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::schema::UnionType;
    type AstTypeExtension = ast::schema::UnionTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in self.extensions.drain(..) {
            let ext_path = ext_path.as_deref();
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(SchemaType::Union(union_type)) =>
                    Self::merge_type_extension(union_type, ext_path, ext)?,

                Some(non_union_type) =>
                    return Err(TypeBuilderHelpers::invalid_extension(
                        ext.name.as_str(),
                        non_union_type,
                        SchemaTypeKind::Union,
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

        let mut members = IndexMap::new();
        Self::append_members(
            def.name.as_str(),
            &mut members,
            &def_location,
            &def.types,
        )?;

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            SchemaType::Union(UnionType {
                def_location: def_location.to_owned(),
                members,
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
            Some(SchemaType::Union(union_type)) =>
                Self::merge_type_extension(union_type, file_path, ext),

            Some(non_union_type) =>
                Err(TypeBuilderHelpers::invalid_extension(
                    ext.name.as_str(),
                    non_union_type,
                    SchemaTypeKind::Union,
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
