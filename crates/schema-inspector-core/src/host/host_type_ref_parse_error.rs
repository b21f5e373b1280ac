use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum HostTypeRefParseError {
    #[error("Empty type path in `{input}`")]
    EmptyPath {
        input: String,
    },

    #[error("`{wrapper}` expects exactly one type argument in `{input}`")]
    InvalidWrapperArity {
        input: String,
        wrapper: String,
    },

    #[error("Unexpected `{found}` at offset {offset} in `{input}`")]
    UnexpectedChar {
        found: char,
        input: String,
        offset: usize,
    },

    #[error("Unexpected end of input in `{input}`")]
    UnexpectedEnd {
        input: String,
    },
}
