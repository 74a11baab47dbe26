use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the core operations.
///
/// Everything here is fatal to the invocation that hits it: the CLI
/// propagates it to `main`, which prints a diagnostic and exits with
/// the internal-error code. Business-rule failures (hash mismatch,
/// traceability inconsistency) are not errors; they are ordinary
/// return values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{path}: row {row} has {cells} cells but the header names {columns} columns")]
    RowShape {
        path: PathBuf,
        row: usize,
        cells: usize,
        columns: usize,
    },

    #[error("{path}: missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
