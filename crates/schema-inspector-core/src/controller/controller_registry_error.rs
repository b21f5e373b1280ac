use crate::controller::MappingTarget;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ControllerRegistryError {
    #[error(
        "`{target}` is mapped to both `{existing_method}` and `{new_method}`"
    )]
    DuplicateMapping {
        existing_method: String,
        new_method: String,
        target: MappingTarget,
    },

    #[error("`{coordinate}` is not a valid `Type.field` coordinate")]
    InvalidCoordinate {
        coordinate: String,
    },
}
