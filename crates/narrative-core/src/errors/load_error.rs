//! Dataset loading errors.

use super::error_code::{self, NarrativeErrorCode};

/// Errors that abort a dataset load. Individual malformed records never
/// surface here; they are skipped and counted.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("dataset {source_name} could not be read: {message}")]
    Unreadable {
        source_name: String,
        message: String,
    },

    #[error(
        "dataset {source_name} contains no valid post records ({malformed_skipped} malformed lines skipped)"
    )]
    EmptyDataset {
        source_name: String,
        malformed_skipped: usize,
    },
}

impl NarrativeErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } => error_code::LOAD_UNREADABLE,
            Self::EmptyDataset { .. } => error_code::EMPTY_DATASET,
        }
    }
}
