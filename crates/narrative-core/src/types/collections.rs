//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashSet;
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for per-post narrative sets (posts rarely match more than 4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// Index of a narrative within its `RuleSet`.
pub type NarrativeIdx = u16;

/// Narratives matched by one post, in rule order.
pub type NarrativeSet = SmallVec4<NarrativeIdx>;
