//! Community Aggregator: per-subreddit contribution to each narrative.

use narrative_core::models::{CommunityBreakdown, CommunityContribution, Concentration, SpreadPattern};
use narrative_core::types::collections::{BTreeMap, NarrativeIdx};
use narrative_core::{Post, TimeWindow};

use crate::matcher::Assignment;

/// Rank subreddits for one narrative's in-window posts.
///
/// Shares are `count / total`, so they sum to 1 within floating-point
/// tolerance. `None` when `posts` is empty.
pub fn build_breakdown(label: &str, posts: &[&Post], siloed_threshold: f64) -> Option<CommunityBreakdown> {
    if posts.is_empty() {
        return None;
    }
    let total = posts.len();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for post in posts {
        *counts.entry(post.subreddit.as_str()).or_insert(0) += 1;
    }

    // BTreeMap yields subreddits ascending; a stable sort keeps that as the tie-break.
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let contributions: Vec<CommunityContribution> = ranked
        .into_iter()
        .map(|(subreddit, count)| CommunityContribution {
            subreddit: subreddit.to_string(),
            count,
            share: count as f64 / total as f64,
        })
        .collect();

    let top = &contributions[0];
    let pattern = if top.share >= siloed_threshold {
        SpreadPattern::Siloed
    } else {
        SpreadPattern::Broad
    };
    let concentration = Concentration {
        top_subreddit: top.subreddit.clone(),
        top_share: top.share,
        pattern,
    };

    Some(CommunityBreakdown {
        label: label.to_string(),
        total,
        communities_reached: contributions.len(),
        contributions,
        concentration,
    })
}

/// One breakdown per narrative with posts in `window`, in rule order.
pub fn all_breakdowns(
    posts: &[Post],
    assignment: &Assignment,
    window: &TimeWindow,
    siloed_threshold: f64,
) -> Vec<CommunityBreakdown> {
    (0..assignment.labels().len())
        .filter_map(|idx| {
            let idx = idx as NarrativeIdx;
            let in_window = assignment.posts_in_window(posts, idx, window);
            build_breakdown(assignment.label(idx), &in_window, siloed_threshold)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(subreddit: &str) -> Post {
        Post {
            id: subreddit.into(),
            subreddit: subreddit.into(),
            author: "a".into(),
            title: "t".into(),
            body: None,
            created: Utc.timestamp_opt(0, 0).unwrap(),
            url: None,
        }
    }

    #[test]
    fn ranks_by_count_then_name() {
        let posts = [post("b"), post("a"), post("c"), post("c")];
        let refs: Vec<&Post> = posts.iter().collect();
        let breakdown = build_breakdown("x", &refs, 0.5).unwrap();
        let order: Vec<&str> = breakdown
            .contributions
            .iter()
            .map(|c| c.subreddit.as_str())
            .collect();
        assert_eq!(order, vec!["c", "a", "b"]);
        assert_eq!(breakdown.concentration.top_share, 0.5);
        assert_eq!(breakdown.concentration.pattern, SpreadPattern::Siloed);
        assert!((breakdown.share_sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn many_equal_communities_are_broad() {
        let posts = [post("a"), post("b"), post("c")];
        let refs: Vec<&Post> = posts.iter().collect();
        let breakdown = build_breakdown("x", &refs, 0.5).unwrap();
        assert_eq!(breakdown.concentration.pattern, SpreadPattern::Broad);
        assert_eq!(breakdown.communities_reached, 3);
    }

    #[test]
    fn no_posts_no_breakdown() {
        assert!(build_breakdown("x", &[], 0.5).is_none());
    }
}
