//! Window-level activity across all narratives.

use narrative_core::models::{DatasetActivity, NarrativeCount};
use narrative_core::types::collections::FxHashSet;
use narrative_core::{Post, TimeWindow};

use crate::matcher::Assignment;

/// Totals for every narrative post inside `window`. `None` when no
/// narrative post falls in the window.
///
/// Average activity is taken over UTC calendar days that saw at least one
/// narrative post, not over the full window length.
pub fn dataset_activity(posts: &[Post], assignment: &Assignment, window: &TimeWindow) -> Option<DatasetActivity> {
    let mut per_narrative = vec![0usize; assignment.labels().len()];
    let mut communities = FxHashSet::default();
    let mut days = FxHashSet::default();
    let mut narrative_posts = 0;

    for (post, narratives) in assignment.matched_in_window(posts, window) {
        narrative_posts += 1;
        communities.insert(post.subreddit.as_str());
        days.insert(post.created.date_naive());
        for &idx in narratives {
            per_narrative[idx as usize] += 1;
        }
    }

    if narrative_posts == 0 {
        return None;
    }

    let mut distribution: Vec<NarrativeCount> = per_narrative
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(idx, &count)| NarrativeCount {
            label: assignment.labels()[idx].clone(),
            count,
        })
        .collect();
    // Stable sort: equal counts keep rule order.
    distribution.sort_by(|a, b| b.count.cmp(&a.count));

    let total_amplifications: usize = distribution.iter().map(|d| d.count).sum();
    let dominant_narrative = distribution[0].label.clone();

    Some(DatasetActivity {
        total_amplifications,
        narrative_posts,
        active_communities: communities.len(),
        narratives_active: distribution.len(),
        dominant_narrative,
        active_days: days.len(),
        avg_amplifications_per_day: total_amplifications as f64 / days.len() as f64,
        distribution,
    })
}
