use crate::loc;
use crate::schema::FieldsContainer;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaType;
use crate::schema::TypeReferenceError;
use crate::schema::UnionType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: IndexMap<String, SchemaType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::from([
                ("Boolean".to_string(), SchemaType::Bool),
                ("Float".to_string(), SchemaType::Float),
                ("ID".to_string(), SchemaType::ID),
                ("Int".to_string(), SchemaType::Int),
                ("String".to_string(), SchemaType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: SchemaType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_loc.to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type(&self, type_name: &str) -> Option<&SchemaType> {
        self.types.get(type_name)
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut SchemaType> {
        self.types.get_mut(type_name)
    }

    /// Check every type reference in the graph and hand back the finished
    /// types map. All reference errors are collected before failing.
    pub fn into_types_map(self) -> Result<IndexMap<String, SchemaType>> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                SchemaType::Interface(iface) =>
                    self.check_fields_container(iface, &mut errors),
                SchemaType::Object(obj) =>
                    self.check_fields_container(obj, &mut errors),
                SchemaType::Union(union_type) =>
                    self.check_union_members(union_type, &mut errors),
                SchemaType::InputObject(input_type) => {
                    for field in input_type.fields().values() {
                        self.check_named_ref(
                            field.type_annotation().innermost_type_name(),
                            field.type_annotation().ref_location(),
                            &mut errors,
                        );
                    }
                },
                SchemaType::Bool
                    | SchemaType::Enum(_)
                    | SchemaType::Float
                    | SchemaType::ID
                    | SchemaType::Int
                    | SchemaType::Scalar(_)
                    | SchemaType::String => (),
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeReferenceErrors { errors });
        }

        Ok(self.types)
    }

    fn check_fields_container(
        &self,
        container: &FieldsContainer,
        errors: &mut Vec<TypeReferenceError>,
    ) {
        for iface_ref in &container.interfaces {
            match self.types.get(iface_ref.name()) {
                Some(SchemaType::Interface(_)) => (),
                Some(_) => errors.push(TypeReferenceError::ImplementsNonInterfaceType {
                    type_name: container.name().to_string(),
                    non_interface_type_name: iface_ref.name().to_string(),
                    loc: iface_ref.ref_location().to_owned(),
                }),
                None => errors.push(TypeReferenceError::ImplementsUndefinedInterface {
                    type_name: container.name().to_string(),
                    undefined_interface_name: iface_ref.name().to_string(),
                    loc: iface_ref.ref_location().to_owned(),
                }),
            }
        }

        for field in container.fields().values() {
            let annot = field.type_annotation();
            let innermost_type_name = annot.innermost_type_name();
            let is_defined = self.check_named_ref(
                innermost_type_name,
                annot.ref_location(),
                errors,
            );
            if is_defined
                && let Some(SchemaType::InputObject(_)) = self.types.get(innermost_type_name) {
                errors.push(TypeReferenceError::OutputFieldWithInputType {
                    def_location: field.def_location().to_owned(),
                    field_name: field.name().to_string(),
                    input_type_name: innermost_type_name.to_string(),
                    parent_type_name: container.name().to_string(),
                });
            }

            for arg_annot in field.arguments().values() {
                self.check_named_ref(
                    arg_annot.innermost_type_name(),
                    arg_annot.ref_location(),
                    errors,
                );
            }
        }
    }

    fn check_named_ref(
        &self,
        type_name: &str,
        ref_location: &loc::SourceLocation,
        errors: &mut Vec<TypeReferenceError>,
    ) -> bool {
        if self.types.contains_key(type_name) {
            return true;
        }
        errors.push(TypeReferenceError::UndefinedTypeName {
            ref_location: ref_location.to_owned(),
            undefined_type_name: type_name.to_string(),
        });
        false
    }

    fn check_union_members(
        &self,
        union_type: &UnionType,
        errors: &mut Vec<TypeReferenceError>,
    ) {
        // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
        for (member_name, member_ref) in &union_type.members {
            match self.types.get(member_name) {
                Some(SchemaType::Object(_)) => (),
                Some(_) => errors.push(TypeReferenceError::InvalidUnionMemberType {
                    location: member_ref.ref_location().to_owned(),
                    member_type_name: member_name.to_string(),
                    union_type_name: union_type.name().to_string(),
                }),
                None => errors.push(TypeReferenceError::UndefinedTypeName {
                    ref_location: member_ref.ref_location().to_owned(),
                    undefined_type_name: member_name.to_string(),
                }),
            }
        }
    }
}
