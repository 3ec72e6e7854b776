//! # narrative-core
//!
//! Foundation crate for narrative spread analysis.
//! Defines the domain models, the `Matcher` trait, errors, config, tracing,
//! and constants. `narrative-analysis` builds the pipeline on top of it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SpreadConfig;
pub use errors::{NarrativeError, NarrativeResult};
pub use models::{NarrativeRule, Post, RuleSet, TimeWindow, WindowOutcome};
pub use traits::Matcher;
