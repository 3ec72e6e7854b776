//! Domain models: inputs (posts, rules, windows) and derived views.

pub mod activity;
pub mod community;
pub mod insight;
pub mod outcome;
pub mod post;
pub mod rule;
pub mod series;
pub mod window;

pub use activity::{DatasetActivity, NarrativeCount};
pub use community::{CommunityBreakdown, CommunityContribution, Concentration, SpreadPattern};
pub use insight::{GrowthShape, InsightReport, PeakDay};
pub use outcome::WindowOutcome;
pub use post::Post;
pub use rule::{NarrativeRule, RuleSet};
pub use series::{NarrativeSeries, SeriesPoint};
pub use window::TimeWindow;
