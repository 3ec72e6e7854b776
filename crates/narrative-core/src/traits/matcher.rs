use crate::types::collections::NarrativeSet;

/// Assigns narratives to case-folded post text.
///
/// Aggregation only ever sees the returned label indices, so a semantic
/// matcher can replace the keyword one without touching the aggregators.
pub trait Matcher: Send + Sync {
    /// Short identifier for logs (e.g., "keyword").
    fn name(&self) -> &'static str;

    /// Narrative labels in canonical order. Indices returned by
    /// `match_text` point into this slice.
    fn labels(&self) -> &[String];

    /// Narratives whose rules fire on `text`, ascending by index, no duplicates.
    /// `text` is already case-folded.
    fn match_text(&self, text: &str) -> NarrativeSet;
}
