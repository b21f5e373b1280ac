use crate::arguments::ContextScope;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArgumentResolutionError {
    #[error(
        "Parameter {index} is bound to a context value without a name, and \
        the parameter's own name is not known"
    )]
    MissingParameterName {
        index: usize,
    },

    #[error("Missing required {scope} context value `{name}` for parameter {index}")]
    MissingRequiredValue {
        index: usize,
        name: String,
        scope: ContextScope,
    },

    #[error("No argument resolver supports parameter {index}")]
    UnsupportedParameter {
        index: usize,
    },
}
