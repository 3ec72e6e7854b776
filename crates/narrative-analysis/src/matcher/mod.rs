//! Narrative Matcher: rule evaluation producing the post → narratives relation.

pub mod assignment;
pub mod keyword;

pub use assignment::{assign, Assignment};
pub use keyword::{KeywordMatcher, MatchEvidence};
