use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum HostTypeRegistryError {
    #[error("Host type `{path}` was registered more than once")]
    DuplicateHostType {
        path: String,
    },

    #[error("Host type path `{path}` is not a valid `::`-separated path")]
    InvalidHostTypePath {
        path: String,
    },
}
