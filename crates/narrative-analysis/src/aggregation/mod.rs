//! Window-scoped aggregation over the Assignment.
//!
//! Amplification (per-day curves), community spread, and dataset-level
//! activity. All functions are pure; narratives with no posts in the
//! window produce no output rather than zero-valued placeholders.

pub mod activity;
pub mod amplification;
pub mod community;

pub use activity::dataset_activity;
pub use amplification::{all_series, build_series};
pub use community::{all_breakdowns, build_breakdown};
