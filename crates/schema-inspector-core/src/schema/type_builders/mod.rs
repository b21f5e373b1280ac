mod enum_type_builder;
mod input_object_type_builder;
mod interface_type_builder;
mod object_type_builder;
mod scalar_type_builder;
mod type_builder;
mod union_type_builder;

pub(crate) use enum_type_builder::EnumTypeBuilder;
pub(crate) use input_object_type_builder::InputObjectTypeBuilder;
pub(crate) use interface_type_builder::InterfaceTypeBuilder;
pub(crate) use object_type_builder::ObjectTypeBuilder;
pub(crate) use scalar_type_builder::ScalarTypeBuilder;
pub(crate) use type_builder::TypeBuilder;
pub(crate) use type_builder::TypeBuilderHelpers;
pub(crate) use union_type_builder::UnionTypeBuilder;
