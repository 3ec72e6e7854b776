use serde::{Deserialize, Serialize};

use super::CommunityContribution;

/// Earliest day holding the maximal daily count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakDay {
    pub day: u32,
    pub count: usize,
}

/// Coarse shape of a narrative's growth over its observed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthShape {
    /// Every post fell on day 0; there is no span to characterize.
    SingleDay,
    /// More than the configured share of posts arrived in the first part of the span.
    FrontLoaded,
    Sustained,
}

impl GrowthShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleDay => "single-day",
            Self::FrontLoaded => "front-loaded",
            Self::Sustained => "sustained",
        }
    }
}

/// Descriptive summary of one narrative in one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub label: String,
    pub total: usize,
    pub peak: PeakDay,
    pub growth_shape: GrowthShape,
    /// Fraction of posts inside the first part of the span.
    pub early_share: f64,
    /// `None` only for a breakdown with no contributions.
    pub top_community: Option<CommunityContribution>,
    pub communities_reached: usize,
    pub statements: Vec<String>,
}
