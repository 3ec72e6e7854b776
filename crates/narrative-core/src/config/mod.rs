//! Configuration for narrative analysis.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod analysis_config;
pub mod spread_config;

pub use analysis_config::{AnalysisConfig, MatchMode};
pub use spread_config::{ConfigOverrides, SpreadConfig};
