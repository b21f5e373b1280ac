use crate::loc;
use crate::schema::OperationKind;
use crate::schema::SchemaFileError;
use crate::schema::SchemaTypeKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple fields named `{field_name}` were defined on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error("Multiple `{operation:?}` root operation types were defined")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicateUnionMember {
        type_name: String,
        member_name: String,
        location: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type with a {} extension, but \
        `{type_name}` is a {} type",
        extension_kind.name(),
        defined_kind.name(),
    )]
    InvalidExtensionType {
        type_name: String,
        defined_kind: SchemaTypeKind,
        extension_kind: SchemaTypeKind,
        extension_loc: loc::SourceLocation,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The `{operation:?}` root operation type is declared as `{type_name}`, \
        which is not a defined object type"
    )]
    InvalidOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("Error parsing schema from {}: {err}", display_file(file))]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(#[from] SchemaFileError),

    #[error(
        "Encountered the following type reference errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeReferenceErrors {
        errors: Vec<TypeReferenceError>,
    },
}

/// Problems with how one type refers to another, collected across the whole
/// graph before being reported together.
#[derive(Debug, Error, PartialEq)]
pub enum TypeReferenceError {
    #[error("The `{type_name}` type implements `{non_interface_type_name}`, which is not an interface")]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error("The `{type_name}` type implements `{undefined_interface_name}`, which is not defined")]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{union_type_name}` union lists `{member_type_name}` as a member, \
        but union members can only be object types"
    )]
    InvalidUnionMemberType {
        location: loc::SourceLocation,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The `{parent_type_name}.{field_name}` output field is declared with \
        the `{input_type_name}` input type"
    )]
    OutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },
}

/// Where the type used for a root operation was declared.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}

fn display_file(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) => format!("{path:?}"),
        None => "<str>".to_string(),
    }
}
