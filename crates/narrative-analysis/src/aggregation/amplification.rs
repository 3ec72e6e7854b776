//! Amplification Aggregator: per-narrative day-bucketed curves.

use narrative_core::models::{NarrativeSeries, SeriesPoint};
use narrative_core::types::collections::NarrativeIdx;
use narrative_core::{Post, TimeWindow};

use crate::matcher::Assignment;
use crate::temporal;

/// Build the curve for one narrative's in-window posts.
///
/// Points are dense from day 0 to the last observed day. `None` when
/// `posts` is empty.
pub fn build_series(label: &str, posts: &[&Post]) -> Option<NarrativeSeries> {
    let (first_appearance, normalized) = temporal::normalize(posts)?;

    let last_day = normalized.iter().map(|n| n.day).max().unwrap_or(0);
    let mut counts = vec![0usize; last_day as usize + 1];
    for n in &normalized {
        counts[n.day as usize] += 1;
    }

    let mut cumulative = 0;
    let points = counts
        .into_iter()
        .enumerate()
        .map(|(day, count)| {
            cumulative += count;
            SeriesPoint {
                day: day as u32,
                count,
                cumulative,
            }
        })
        .collect();

    Some(NarrativeSeries {
        label: label.to_string(),
        first_appearance,
        total: posts.len(),
        points,
    })
}

/// One series per narrative with posts in `window`, in rule order.
pub fn all_series(posts: &[Post], assignment: &Assignment, window: &TimeWindow) -> Vec<NarrativeSeries> {
    (0..assignment.labels().len())
        .filter_map(|idx| {
            let idx = idx as NarrativeIdx;
            let in_window = assignment.posts_in_window(posts, idx, window);
            build_series(assignment.label(idx), &in_window)
        })
        .collect()
}
