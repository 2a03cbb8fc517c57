//! Error types for `AmigaCatalog`

use std::path::PathBuf;

use thiserror::Error;

use crate::formats::ctlg::ChunkTag;

/// The error type for `AmigaCatalog` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Lookup Errors ====================
    /// No candidate catalog file could be opened.
    #[error("catalog not found: {0}")]
    NotFound(String),

    /// A specific catalog file does not exist on disk.
    #[error("catalog file not found: {path}")]
    FileNotFound {
        /// The path that was probed.
        path: PathBuf,
    },

    /// A catalog file exists but could not be opened.
    #[error("cannot open catalog file {path}: {source}")]
    OpenFailed {
        /// The path that was probed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ==================== CTLG Format Errors ====================
    /// The container header or chunk layout is invalid.
    #[error("malformed IFF container: {reason}")]
    MalformedContainer {
        /// Description of what is invalid.
        reason: String,
    },

    /// The IFF form type is not `CTLG`.
    #[error("unsupported IFF form type: expected CTLG, found {0}")]
    UnsupportedFormType(ChunkTag),

    /// A declared size runs past the end of the available data.
    #[error("truncated data: needed {needed} bytes, {available} available")]
    Truncated {
        /// Bytes the declared size asked for.
        needed: u64,
        /// Bytes left in the stream.
        available: u64,
    },

    // ==================== Catalog Errors ====================
    /// Catalogs in this format can only be read.
    #[error("writing CTLG catalogs is not supported")]
    WriteUnsupported,

    // ==================== Configuration Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedContainer {
            reason: reason.into(),
        }
    }

    /// Whether this error means the catalog file does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) | Error::FileNotFound { .. } => true,
            Error::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Whether the catalog file could not be opened at all, as opposed to
    /// being opened and failing to read or decode.
    pub fn is_unopened(&self) -> bool {
        self.is_not_found() || matches!(self, Error::OpenFailed { .. })
    }
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_open_failures_are_unopened() {
        let denied = Error::OpenFailed {
            path: PathBuf::from("demo.catalog"),
            source: std::io::Error::from(ErrorKind::PermissionDenied),
        };
        assert!(denied.is_unopened());
        assert!(!denied.is_not_found());

        let missing = Error::FileNotFound {
            path: PathBuf::from("demo.catalog"),
        };
        assert!(missing.is_unopened());
        assert!(missing.is_not_found());

        let read = Error::Io(std::io::Error::from(ErrorKind::UnexpectedEof));
        assert!(!read.is_unopened());
        assert!(!Error::malformed("bad").is_unopened());
    }
}

/// A specialized Result type for `AmigaCatalog` operations.
pub type Result<T> = std::result::Result<T, Error>;
