//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, MatchMode};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::models::{NarrativeRule, RuleSet};

/// Top-level configuration: analysis thresholds plus the narrative rules.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`NARRATIVE_*`)
/// 3. Project config (`narratives.toml` in the analysis root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SpreadConfig {
    pub analysis: AnalysisConfig,
    /// `[[narratives]]` tables. Empty means the built-in rule set.
    pub narratives: Vec<NarrativeRule>,
}

/// Caller-supplied overrides, e.g. from a dashboard settings panel.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub match_mode: Option<MatchMode>,
    pub front_loaded_share: Option<f64>,
    pub span_fraction: Option<f64>,
    pub siloed_threshold: Option<f64>,
    pub top_communities: Option<usize>,
}

impl SpreadConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string, without other layers.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// The validated rule set: configured rules, or the built-in ones when none are given.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        if self.narratives.is_empty() {
            Ok(RuleSet::defaults())
        } else {
            RuleSet::new(self.narratives.clone())
        }
    }

    /// Validate thresholds and rules.
    pub fn validate(config: &SpreadConfig) -> Result<(), ConfigError> {
        let fractions = [
            ("analysis.front_loaded_share", config.analysis.front_loaded_share),
            ("analysis.span_fraction", config.analysis.span_fraction),
            ("analysis.siloed_threshold", config.analysis.siloed_threshold),
        ];
        for (field, value) in fractions {
            if let Some(v) = value {
                if !(v > 0.0 && v <= 1.0) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be greater than 0.0 and at most 1.0".to_string(),
                    });
                }
            }
        }
        if config.analysis.top_communities == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.top_communities".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        config.rule_set().map(|_| ())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut SpreadConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SpreadConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut SpreadConfig, other: &SpreadConfig) {
        if other.analysis.match_mode.is_some() {
            base.analysis.match_mode = other.analysis.match_mode;
        }
        if other.analysis.front_loaded_share.is_some() {
            base.analysis.front_loaded_share = other.analysis.front_loaded_share;
        }
        if other.analysis.span_fraction.is_some() {
            base.analysis.span_fraction = other.analysis.span_fraction;
        }
        if other.analysis.siloed_threshold.is_some() {
            base.analysis.siloed_threshold = other.analysis.siloed_threshold;
        }
        if other.analysis.top_communities.is_some() {
            base.analysis.top_communities = other.analysis.top_communities;
        }
        if !other.narratives.is_empty() {
            base.narratives = other.narratives.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `NARRATIVE_MATCH_MODE`, `NARRATIVE_FRONT_LOADED_SHARE`, etc.
    fn apply_env_overrides(config: &mut SpreadConfig) {
        Self::apply_env_from(config, |key| std::env::var(key).ok());
    }

    /// Environment layer over an arbitrary lookup. Unparseable values are
    /// logged and ignored so a stray variable cannot block a load.
    pub fn apply_env_from(config: &mut SpreadConfig, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("NARRATIVE_MATCH_MODE") {
            match val.parse::<MatchMode>() {
                Ok(mode) => config.analysis.match_mode = Some(mode),
                Err(message) => tracing::warn!(%message, "ignoring NARRATIVE_MATCH_MODE"),
            }
        }
        if let Some(v) = parse_env::<f64>(&lookup, "NARRATIVE_FRONT_LOADED_SHARE") {
            config.analysis.front_loaded_share = Some(v);
        }
        if let Some(v) = parse_env::<f64>(&lookup, "NARRATIVE_SPAN_FRACTION") {
            config.analysis.span_fraction = Some(v);
        }
        if let Some(v) = parse_env::<f64>(&lookup, "NARRATIVE_SILOED_THRESHOLD") {
            config.analysis.siloed_threshold = Some(v);
        }
        if let Some(v) = parse_env::<usize>(&lookup, "NARRATIVE_TOP_COMMUNITIES") {
            config.analysis.top_communities = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut SpreadConfig, overrides: &ConfigOverrides) {
        if overrides.match_mode.is_some() {
            config.analysis.match_mode = overrides.match_mode;
        }
        if overrides.front_loaded_share.is_some() {
            config.analysis.front_loaded_share = overrides.front_loaded_share;
        }
        if overrides.span_fraction.is_some() {
            config.analysis.span_fraction = overrides.span_fraction;
        }
        if overrides.siloed_threshold.is_some() {
            config.analysis.siloed_threshold = overrides.siloed_threshold;
        }
        if overrides.top_communities.is_some() {
            config.analysis.top_communities = overrides.top_communities;
        }
    }
}

fn parse_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
