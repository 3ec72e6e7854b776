//! Query boundary errors.

use chrono::{DateTime, Utc};

use super::error_code::{self, NarrativeErrorCode};

/// Errors rejected at the query boundary, before any aggregation runs.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("invalid window: start {start} is after end {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("unknown narrative: {label}")]
    UnknownNarrative { label: String },
}

impl NarrativeErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidWindow { .. } => error_code::INVALID_WINDOW,
            Self::UnknownNarrative { .. } => error_code::UNKNOWN_NARRATIVE,
        }
    }
}
