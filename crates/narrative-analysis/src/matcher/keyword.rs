//! Keyword rule matcher backed by a single Aho-Corasick automaton.

use aho_corasick::AhoCorasick;
use narrative_core::config::MatchMode;
use narrative_core::errors::ConfigError;
use narrative_core::traits::Matcher;
use narrative_core::types::collections::{NarrativeIdx, NarrativeSet};
use narrative_core::RuleSet;
use serde::Serialize;

/// Which keyword fired a rule; lets a reader audit every assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEvidence {
    pub label: String,
    pub keyword: String,
    /// Byte offset in the case-folded text.
    pub offset: usize,
}

/// Transparent rule matcher: a narrative fires when any of its keywords
/// occurs in the text under the configured [`MatchMode`].
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    labels: Vec<String>,
    keywords: Vec<String>,
    /// Pattern id → owning rule.
    pattern_rules: Vec<NarrativeIdx>,
    automaton: AhoCorasick,
    mode: MatchMode,
}

impl KeywordMatcher {
    pub fn new(rules: &RuleSet, mode: MatchMode) -> Result<Self, ConfigError> {
        let mut keywords = Vec::new();
        let mut pattern_rules = Vec::new();
        for (idx, rule) in rules.rules().iter().enumerate() {
            for keyword in &rule.keywords {
                keywords.push(keyword.clone());
                pattern_rules.push(idx as NarrativeIdx);
            }
        }

        let automaton = AhoCorasick::new(&keywords).map_err(|e| ConfigError::ValidationFailed {
            field: "narratives.keywords".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            labels: rules.labels().map(str::to_string).collect(),
            keywords,
            pattern_rules,
            automaton,
            mode,
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// First qualifying keyword per fired rule, in rule order.
    pub fn explain(&self, text: &str) -> Vec<MatchEvidence> {
        let mut evidence: Vec<Option<MatchEvidence>> = vec![None; self.labels.len()];
        self.scan(text, |rule, pattern, offset| {
            let slot = &mut evidence[rule as usize];
            if slot.is_none() {
                *slot = Some(MatchEvidence {
                    label: self.labels[rule as usize].clone(),
                    keyword: self.keywords[pattern].clone(),
                    offset,
                });
            }
        });
        evidence.into_iter().flatten().collect()
    }

    /// Visits every qualifying hit as `(rule, pattern, start)`.
    fn scan(&self, text: &str, mut visit: impl FnMut(NarrativeIdx, usize, usize)) {
        for m in self.automaton.find_overlapping_iter(text) {
            if self.mode == MatchMode::Token && !is_token_bounded(text, m.start(), m.end()) {
                continue;
            }
            let pattern = m.pattern().as_usize();
            visit(self.pattern_rules[pattern], pattern, m.start());
        }
    }
}

impl Matcher for KeywordMatcher {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn match_text(&self, text: &str) -> NarrativeSet {
        let mut fired = vec![false; self.labels.len()];
        self.scan(text, |rule, _, _| fired[rule as usize] = true);
        fired
            .iter()
            .enumerate()
            .filter(|(_, hit)| **hit)
            .map(|(idx, _)| idx as NarrativeIdx)
            .collect()
    }
}

/// True when the hit is not glued to a letter or digit on either side.
fn is_token_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use narrative_core::NarrativeRule;

    fn rules() -> RuleSet {
        RuleSet::new(vec![
            NarrativeRule::new("Tech", ["ai", "artificial intelligence"]),
            NarrativeRule::new("Conflict", ["war", "missile"]),
        ])
        .unwrap()
    }

    #[test]
    fn token_mode_rejects_embedded_hits() {
        let m = KeywordMatcher::new(&rules(), MatchMode::Token).unwrap();
        assert!(m.match_text("she said the software was fine").is_empty());
        assert_eq!(m.match_text("new ai rules, war looms").as_slice(), &[0, 1]);
    }

    #[test]
    fn substring_mode_accepts_embedded_hits() {
        let m = KeywordMatcher::new(&rules(), MatchMode::Substring).unwrap();
        assert_eq!(m.match_text("she said the software was fine").as_slice(), &[0, 1]);
    }

    #[test]
    fn token_boundary_handles_punctuation_and_edges() {
        assert!(is_token_bounded("ai", 0, 2));
        assert!(is_token_bounded("(ai).", 1, 3));
        assert!(!is_token_bounded("rain", 1, 3));
        assert!(is_token_bounded("é ai", 3, 5));
    }

    #[test]
    fn overlapping_hits_still_find_a_token_match() {
        // "ai" inside "aid" is rejected but the later standalone "ai" fires.
        let m = KeywordMatcher::new(&rules(), MatchMode::Token).unwrap();
        assert_eq!(m.match_text("aid for ai").as_slice(), &[0]);
    }

    #[test]
    fn explain_reports_first_keyword_per_rule() {
        let m = KeywordMatcher::new(&rules(), MatchMode::Token).unwrap();
        let evidence = m.explain("artificial intelligence and missile tests");
        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence[0].label, "Tech");
        assert_eq!(evidence[0].keyword, "artificial intelligence");
        assert_eq!(evidence[1].keyword, "missile");
        assert_eq!(evidence[1].offset, 28);
    }
}
