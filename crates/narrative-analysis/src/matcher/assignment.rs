//! The post → narratives relation.

use narrative_core::errors::ConfigError;
use narrative_core::traits::Matcher;
use narrative_core::types::collections::{FxHashSet, NarrativeIdx, NarrativeSet};
use narrative_core::{Post, TimeWindow};
use tracing::info;

/// Narratives assigned to each post, indexed like the post sequence.
/// Computed once per load and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    labels: Vec<String>,
    sets: Vec<NarrativeSet>,
}

/// Run `matcher` over every post's case-folded title and body.
///
/// Fails when the matcher reports duplicate labels, more labels than a
/// `NarrativeIdx` can address, or an index outside its own labels.
pub fn assign(posts: &[Post], matcher: &dyn Matcher) -> Result<Assignment, ConfigError> {
    let labels = matcher.labels();
    check_labels(labels)?;

    let mut sets = Vec::with_capacity(posts.len());
    for post in posts {
        let mut set = matcher.match_text(&post.match_text());
        if let Some(&bad) = set.iter().find(|&&idx| usize::from(idx) >= labels.len()) {
            return Err(ConfigError::ValidationFailed {
                field: format!("matcher.{}", matcher.name()),
                message: format!("narrative index {bad} is out of range for {} labels", labels.len()),
            });
        }
        set.sort_unstable();
        set.dedup();
        sets.push(set);
    }

    let assignment = Assignment {
        labels: labels.to_vec(),
        sets,
    };
    info!(
        matcher = matcher.name(),
        posts = posts.len(),
        unmatched = assignment.unmatched_count(),
        "narratives assigned"
    );
    Ok(assignment)
}

fn check_labels(labels: &[String]) -> Result<(), ConfigError> {
    if labels.len() > usize::from(NarrativeIdx::MAX) {
        return Err(ConfigError::ValidationFailed {
            field: "narratives".to_string(),
            message: format!("{} labels exceed the supported maximum", labels.len()),
        });
    }
    let mut seen = FxHashSet::default();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ConfigError::DuplicateNarrative { label: label.clone() });
        }
    }
    Ok(())
}

impl Assignment {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, idx: NarrativeIdx) -> &str {
        &self.labels[idx as usize]
    }

    pub fn index_of(&self, label: &str) -> Option<NarrativeIdx> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| i as NarrativeIdx)
    }

    /// Narratives of the post at `post_idx`, in rule order.
    pub fn narratives_of(&self, post_idx: usize) -> &[NarrativeIdx] {
        &self.sets[post_idx]
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Posts that matched no narrative. They stay in the post sequence but
    /// take no part in narrative-scoped aggregates.
    pub fn unmatched_count(&self) -> usize {
        self.sets.iter().filter(|s| s.is_empty()).count()
    }

    /// Posts assigned to `narrative` whose creation time falls in `window`,
    /// in input order.
    pub fn posts_in_window<'a>(
        &self,
        posts: &'a [Post],
        narrative: NarrativeIdx,
        window: &TimeWindow,
    ) -> Vec<&'a Post> {
        posts
            .iter()
            .zip(&self.sets)
            .filter(|(post, set)| set.contains(&narrative) && window.contains(&post.created))
            .map(|(post, _)| post)
            .collect()
    }

    /// Every `(post, narratives)` pair with at least one narrative inside `window`.
    pub fn matched_in_window<'a, 's>(
        &'s self,
        posts: &'a [Post],
        window: &'s TimeWindow,
    ) -> impl Iterator<Item = (&'a Post, &'s [NarrativeIdx])> + 's
    where
        'a: 's,
    {
        posts
            .iter()
            .zip(&self.sets)
            .filter(move |(post, set)| !set.is_empty() && window.contains(&post.created))
            .map(|(post, set)| (post, set.as_slice()))
    }
}
