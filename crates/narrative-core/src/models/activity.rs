use serde::{Deserialize, Serialize};

/// Posts assigned to one narrative inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeCount {
    pub label: String,
    pub count: usize,
}

/// Window-level activity across all narratives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetActivity {
    /// Sum over narratives of assigned posts; a post in two narratives counts twice.
    pub total_amplifications: usize,
    /// Distinct posts carrying at least one narrative.
    pub narrative_posts: usize,
    pub active_communities: usize,
    pub narratives_active: usize,
    /// Sorted by count descending, then rule order.
    pub distribution: Vec<NarrativeCount>,
    pub dominant_narrative: String,
    /// UTC calendar days with at least one narrative post.
    pub active_days: usize,
    pub avg_amplifications_per_day: f64,
}
