//! Time Normalizer: absolute timestamps → days since a narrative's
//! window-relative first appearance.
//!
//! The anchor is the earliest post *inside the active window*, so it moves
//! whenever the window does. Narratives that start on different calendar
//! dates become comparable on a shared day-0 axis.

use chrono::{DateTime, Utc};
use narrative_core::constants::SECONDS_PER_DAY;
use narrative_core::Post;

/// A post with its normalized day coordinate.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedPost<'a> {
    pub post: &'a Post,
    pub day: u32,
}

/// Earliest creation time among `posts`.
pub fn first_appearance<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Option<DateTime<Utc>> {
    posts.into_iter().map(|p| p.created).min()
}

/// `floor((created - anchor) / 1 day)`, clamped to 0 for instants before the anchor.
pub fn day_offset(created: DateTime<Utc>, anchor: DateTime<Utc>) -> u32 {
    let seconds = (created - anchor).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    u32::try_from(seconds / SECONDS_PER_DAY).unwrap_or(u32::MAX)
}

/// Anchor `posts` at their own first appearance. `None` when empty.
pub fn normalize<'a>(posts: &[&'a Post]) -> Option<(DateTime<Utc>, Vec<NormalizedPost<'a>>)> {
    let anchor = first_appearance(posts.iter().copied())?;
    let normalized = posts
        .iter()
        .map(|&post| NormalizedPost {
            post,
            day: day_offset(post.created, anchor),
        })
        .collect();
    Some((anchor, normalized))
}
