//! Stable error codes for the presentation boundary.

/// Every error enum implements this to expose a structured code string
/// that a dashboard can switch on without parsing messages.
pub trait NarrativeErrorCode {
    /// Returns the error code string (e.g., "EMPTY_DATASET").
    fn error_code(&self) -> &'static str;

    /// Returns the user-facing string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const LOAD_UNREADABLE: &str = "LOAD_UNREADABLE";
pub const EMPTY_DATASET: &str = "EMPTY_DATASET";
pub const INVALID_WINDOW: &str = "INVALID_WINDOW";
pub const UNKNOWN_NARRATIVE: &str = "UNKNOWN_NARRATIVE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
