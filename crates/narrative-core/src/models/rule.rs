use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::collections::{FxHashSet, NarrativeIdx};

/// A named narrative and the keywords or phrases that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl NarrativeRule {
    pub fn new(label: impl Into<String>, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            label: label.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Trims the label, case-folds and trims keywords, drops blanks and duplicates.
    fn normalized(&self) -> Self {
        let mut seen = FxHashSet::default();
        let keywords = self
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .filter(|k| seen.insert(k.clone()))
            .collect();
        Self {
            label: self.label.trim().to_string(),
            keywords,
        }
    }
}

/// Validated, ordered narrative rules. Rule order is the canonical
/// narrative order for every derived output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    rules: Vec<NarrativeRule>,
}

impl RuleSet {
    /// Normalizes and validates `rules`.
    ///
    /// Fails on an empty set, a blank label, a rule without usable keywords,
    /// or a duplicate label (which would make aggregation keys ambiguous).
    pub fn new(rules: Vec<NarrativeRule>) -> Result<Self, ConfigError> {
        if rules.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "narratives".to_string(),
                message: "at least one narrative rule is required".to_string(),
            });
        }
        if rules.len() > NarrativeIdx::MAX as usize {
            return Err(ConfigError::ValidationFailed {
                field: "narratives".to_string(),
                message: format!("at most {} narrative rules are supported", NarrativeIdx::MAX),
            });
        }

        let mut labels = FxHashSet::default();
        let mut normalized = Vec::with_capacity(rules.len());
        for rule in &rules {
            let rule = rule.normalized();
            if rule.label.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "narratives.label".to_string(),
                    message: "label must not be blank".to_string(),
                });
            }
            if rule.keywords.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("narratives.{}.keywords", rule.label),
                    message: "at least one non-blank keyword is required".to_string(),
                });
            }
            if !labels.insert(rule.label.clone()) {
                return Err(ConfigError::DuplicateNarrative { label: rule.label });
            }
            normalized.push(rule);
        }
        Ok(Self { rules: normalized })
    }

    /// The four narratives tracked by the Reddit spread dashboard.
    pub fn defaults() -> Self {
        Self {
            rules: default_rules().iter().map(NarrativeRule::normalized).collect(),
        }
    }

    pub fn rules(&self) -> &[NarrativeRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.label.as_str())
    }

    /// Position of `label` in rule order.
    pub fn index_of(&self, label: &str) -> Option<NarrativeIdx> {
        self.rules
            .iter()
            .position(|r| r.label == label)
            .map(|i| i as NarrativeIdx)
    }
}

/// Built-in keyword lists.
pub fn default_rules() -> Vec<NarrativeRule> {
    vec![
        NarrativeRule::new(
            "Technology / Big Tech",
            [
                "technology", "tech", "ai", "artificial intelligence", "google", "meta",
                "facebook", "twitter", "musk", "data",
            ],
        ),
        NarrativeRule::new(
            "Politics / Government",
            [
                "election", "vote", "government", "policy", "bill", "parliament", "congress",
                "minister", "president", "party",
            ],
        ),
        NarrativeRule::new(
            "Geopolitics / Conflict",
            [
                "war", "attack", "terror", "terrorist", "military", "missile", "killed",
                "invasion", "border", "conflict",
            ],
        ),
        NarrativeRule::new(
            "Economy / Jobs",
            [
                "economy", "inflation", "jobs", "unemployment", "recession", "market", "wages",
                "growth",
            ],
        ),
    ]
}
