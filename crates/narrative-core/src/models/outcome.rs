use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// Result of a narrative-scoped query. A narrative with no posts in the
/// window is an explicit outcome, never an error or an empty chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum WindowOutcome<T> {
    Data(T),
    NoDataInWindow { label: String, window: TimeWindow },
}

impl<T> WindowOutcome<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(value) => Some(value),
            Self::NoDataInWindow { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(value) => Some(value),
            Self::NoDataInWindow { .. } => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoDataInWindow { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WindowOutcome<U> {
        match self {
            Self::Data(value) => WindowOutcome::Data(f(value)),
            Self::NoDataInWindow { label, window } => WindowOutcome::NoDataInWindow { label, window },
        }
    }
}
