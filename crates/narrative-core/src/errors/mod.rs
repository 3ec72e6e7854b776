//! Error handling for narrative spread analysis.
//! One `thiserror` enum per concern, aggregated by [`NarrativeError`].

pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod query_error;

pub use config_error::ConfigError;
pub use error_code::NarrativeErrorCode;
pub use load_error::LoadError;
pub use query_error::QueryError;

/// Top-level error for anything a presentation layer can call.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl NarrativeErrorCode for NarrativeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Query(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type NarrativeResult<T> = Result<T, NarrativeError>;
