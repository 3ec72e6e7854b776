use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day bucket of a narrative's amplification curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Whole days since the narrative's window-relative first appearance.
    pub day: u32,
    /// Posts created during this day.
    pub count: usize,
    /// Posts created on or before this day.
    pub cumulative: usize,
}

/// Per-narrative amplification curve normalized to days since first appearance.
///
/// Points are dense: one per day from 0 through the last observed day, so
/// `day` strictly increases and `cumulative` never decreases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSeries {
    pub label: String,
    /// Earliest post of this narrative inside the queried window.
    pub first_appearance: DateTime<Utc>,
    /// Amplification: distinct posts assigned to the narrative in the window.
    pub total: usize,
    pub points: Vec<SeriesPoint>,
}

impl NarrativeSeries {
    pub fn last_day(&self) -> u32 {
        self.points.last().map_or(0, |p| p.day)
    }

    /// Number of days covered, counting day 0.
    pub fn span_days(&self) -> u32 {
        self.points.len() as u32
    }

    pub fn cumulative_totals(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.cumulative).collect()
    }

    pub fn daily_counts(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.count).collect()
    }
}
