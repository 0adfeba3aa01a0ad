use crate::grid::range::RangeError;
use crate::grid::GridError;
use thiserror::Error;

/// Main error type for the gridtable crate.
/// Aggregates errors from the grid collaborator and internal modules.
#[derive(Error, Debug)]
pub enum GridTableError {
    #[error("{0}")]
    WithContextError(String),

    // Grid collaborator errors
    #[error("{0}")]
    GridError(#[from] GridError),

    #[error("{0}")]
    RangeError(#[from] RangeError),

    // Extraction errors
    #[error("Worker thread panicked while reading sheet '{sheet}'")]
    WorkerPanicError { sheet: String },
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, GridTableError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| GridTableError::WithContextError(format!("{}: {}", message, e)))
    }
}
