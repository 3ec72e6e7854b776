//! Shared constants for narrative spread analysis.

/// Seconds in one normalized day bucket.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Default share of posts the first part of a span must exceed to count as front-loaded.
pub const DEFAULT_FRONT_LOADED_SHARE: f64 = 0.5;

/// Default fraction of the observed span treated as its "first part".
pub const DEFAULT_SPAN_FRACTION: f64 = 1.0 / 3.0;

/// Default top-subreddit share at or above which spread counts as siloed.
pub const DEFAULT_SILOED_THRESHOLD: f64 = 0.5;

/// Default number of ranked communities returned by `top` queries.
pub const DEFAULT_TOP_COMMUNITIES: usize = 10;

/// Tolerance for community shares summing to 1.0.
pub const SHARE_TOLERANCE: f64 = 1e-6;

/// Earliest accepted `created_utc` (2005-06-01T00:00:00Z, the month Reddit launched).
pub const EARLIEST_POST_SECS: i64 = 1_117_584_000;

/// Latest accepted `created_utc` (2100-01-01T00:00:00Z). Millisecond
/// timestamps land far past this and are rejected.
pub const LATEST_POST_SECS: i64 = 4_102_444_800;

/// Author recorded when a record carries none (Reddit's own convention).
pub const DELETED_AUTHOR: &str = "[deleted]";

/// Project-level config file name, looked up in the analysis root.
pub const CONFIG_FILE_NAME: &str = "narratives.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "NARRATIVE_LOG";

/// Filter used when `NARRATIVE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "narrative_core=info,narrative_analysis=info";
