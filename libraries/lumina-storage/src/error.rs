/// Storage-specific errors
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing file exists but does not hold a JSON array of user records
    #[error("Corrupt user store at {}: {}", .path.display(), .source)]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error while encoding records
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a corrupt store error
    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}

impl From<StorageError> for lumina_core::LuminaError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => lumina_core::LuminaError::Io(e),
            other => lumina_core::LuminaError::storage(other.to_string()),
        }
    }
}
