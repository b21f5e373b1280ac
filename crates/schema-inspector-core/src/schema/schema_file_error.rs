use std::path::PathBuf;
use thiserror::Error;

/// Why a schema file couldn't be loaded.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaFileError {
    #[error("{path:?} is not a file")]
    NotAFile {
        path: PathBuf,
    },

    #[error("{path:?} is not valid UTF-8 (valid up to byte {valid_up_to})")]
    NotUtf8 {
        path: PathBuf,
        valid_up_to: usize,
    },

    #[error("Failed to read {path:?}: {message}")]
    Unreadable {
        kind: std::io::ErrorKind,
        message: String,
        path: PathBuf,
    },
}
impl SchemaFileError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotAFile { path }
                | Self::NotUtf8 { path, .. }
                | Self::Unreadable { path, .. } => path.as_path(),
        }
    }

    /// Reads the SDL text of a schema file.
    pub(crate) fn read(path: &std::path::Path) -> Result<String, Self> {
        if !path.is_file() {
            return Err(Self::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|err| Self::Unreadable {
            kind: err.kind(),
            message: err.to_string(),
            path: path.to_path_buf(),
        })?;
        String::from_utf8(bytes).map_err(|err| Self::NotUtf8 {
            path: path.to_path_buf(),
            valid_up_to: err.utf8_error().valid_up_to(),
        })
    }
}
