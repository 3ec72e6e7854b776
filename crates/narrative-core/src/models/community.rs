use serde::{Deserialize, Serialize};

/// Posts one subreddit contributed to a narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityContribution {
    pub subreddit: String,
    pub count: usize,
    /// `count / narrative total`, in `[0, 1]`.
    pub share: f64,
}

/// Whether amplification came from one dominant community or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadPattern {
    Siloed,
    Broad,
}

impl SpreadPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Siloed => "siloed",
            Self::Broad => "broad",
        }
    }
}

/// Concentration indicator: how much the top subreddit holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concentration {
    pub top_subreddit: String,
    pub top_share: f64,
    pub pattern: SpreadPattern,
}

/// Per-subreddit breakdown of one narrative inside a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityBreakdown {
    pub label: String,
    pub total: usize,
    pub communities_reached: usize,
    /// Ranked by count descending, then subreddit ascending.
    pub contributions: Vec<CommunityContribution>,
    pub concentration: Concentration,
}

impl CommunityBreakdown {
    /// The `n` largest contributors.
    pub fn top(&self, n: usize) -> &[CommunityContribution] {
        &self.contributions[..n.min(self.contributions.len())]
    }

    pub fn share_sum(&self) -> f64 {
        self.contributions.iter().map(|c| c.share).sum()
    }

    pub fn top_contributor(&self) -> Option<&CommunityContribution> {
        self.contributions.first()
    }
}
