//! Error types for the webview hooks.

use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for webview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or resolving dialog requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host reported a dialog mode this crate does not know.
    #[error("Unknown file dialog mode: {0}")]
    UnknownDialogMode(u32),

    /// The accept filter columns do not line up.
    #[error(
        "Accept filter sequences differ in length: {filters} filters, {extensions} extensions, {descriptions} descriptions"
    )]
    FilterLengthMismatch {
        filters: usize,
        extensions: usize,
        descriptions: usize,
    },

    /// A temporary path could not be created.
    #[error("Failed to create temporary path in '{}': {source}", .directory.display())]
    TempPath {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The completion callback was dropped without being resolved.
    #[error("File dialog callback was dropped without being resolved")]
    CallbackAbandoned,

    /// No resolution arrived within the allotted time.
    #[error("File dialog was not resolved within {0:?}")]
    Timeout(Duration),
}

impl Error {
    /// Create a filter length mismatch error.
    pub fn filter_length_mismatch(filters: usize, extensions: usize, descriptions: usize) -> Self {
        Self::FilterLengthMismatch {
            filters,
            extensions,
            descriptions,
        }
    }

    /// Create a temporary path error.
    pub fn temp_path(directory: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TempPath {
            directory: directory.into(),
            source,
        }
    }
}
