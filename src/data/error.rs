use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a catalog file.
///
/// All of them are recoverable: the caller shows a message and renders nothing.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("data file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },
}

impl LoadError {
    /// Whether the source simply does not exist (as opposed to being corrupt).
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
