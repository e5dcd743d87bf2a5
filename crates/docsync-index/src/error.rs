//! Error types for docsync-index

use std::path::PathBuf;

/// Result type for docsync-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in docsync-index operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A sentinel token was not found in the target document
    #[error("Marker {marker} not found in target document")]
    MissingMarker { marker: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn missing_marker(marker: impl Into<String>) -> Self {
        Self::MissingMarker {
            marker: marker.into(),
        }
    }
}
