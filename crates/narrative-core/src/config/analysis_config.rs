//! Matching and summarization thresholds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FRONT_LOADED_SHARE, DEFAULT_SILOED_THRESHOLD, DEFAULT_SPAN_FRACTION,
    DEFAULT_TOP_COMMUNITIES,
};

/// How a keyword must occur in post text to fire its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Anywhere, including inside longer words ("war" fires on "warriors").
    #[default]
    Substring,
    /// Bounded on both sides by a non-alphanumeric character or the text edge.
    Token,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Token => "token",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "token" => Ok(Self::Token),
            other => Err(format!("unknown match mode '{other}' (expected 'token' or 'substring')")),
        }
    }
}

/// Configuration for matching and the insight thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Keyword match mode. Default: substring.
    pub match_mode: Option<MatchMode>,
    /// Share of posts the early span must exceed to be front-loaded. Default: 0.5.
    pub front_loaded_share: Option<f64>,
    /// Fraction of the observed span counted as "early". Default: 1/3.
    pub span_fraction: Option<f64>,
    /// Top-subreddit share at or above which spread is siloed. Default: 0.5.
    pub siloed_threshold: Option<f64>,
    /// Ranked communities returned by top-N views. Default: 10.
    pub top_communities: Option<usize>,
}

impl AnalysisConfig {
    /// Substring containment unless `token` is configured.
    pub fn effective_match_mode(&self) -> MatchMode {
        self.match_mode.unwrap_or_default()
    }

    pub fn effective_front_loaded_share(&self) -> f64 {
        self.front_loaded_share.unwrap_or(DEFAULT_FRONT_LOADED_SHARE)
    }

    pub fn effective_span_fraction(&self) -> f64 {
        self.span_fraction.unwrap_or(DEFAULT_SPAN_FRACTION)
    }

    pub fn effective_siloed_threshold(&self) -> f64 {
        self.siloed_threshold.unwrap_or(DEFAULT_SILOED_THRESHOLD)
    }

    pub fn effective_top_communities(&self) -> usize {
        self.top_communities.unwrap_or(DEFAULT_TOP_COMMUNITIES)
    }
}
