//! Query facade for a presentation layer.
//!
//! A `NarrativeAnalyzer` owns the loaded posts and their narrative
//! assignment. Queries take an explicit window and return fresh values;
//! nothing is cached or mutated, so concurrent callers need no locking.

use std::path::Path;

use chrono::{DateTime, Utc};
use narrative_core::config::AnalysisConfig;
use narrative_core::errors::{ConfigError, NarrativeResult, QueryError};
use narrative_core::models::{
    CommunityBreakdown, CommunityContribution, DatasetActivity, InsightReport, NarrativeCount, NarrativeSeries,
};
use narrative_core::traits::Matcher;
use narrative_core::types::collections::NarrativeIdx;
use narrative_core::{Post, SpreadConfig, TimeWindow, WindowOutcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregation::{activity, amplification, community};
use crate::insights::{self, InsightThresholds};
use crate::loader::{self, LoadDiagnostics, LoadedDataset};
use crate::matcher::{assign, Assignment, KeywordMatcher};

/// Series, breakdown, and insights for one narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeReport {
    pub series: NarrativeSeries,
    pub communities: CommunityBreakdown,
    pub insights: InsightReport,
}

/// Everything a dashboard renders for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadReport {
    pub window: TimeWindow,
    /// `None` when no narrative post falls in the window.
    pub activity: Option<DatasetActivity>,
    /// Narratives with posts in the window, in rule order.
    pub narratives: Vec<NarrativeReport>,
}

pub struct NarrativeAnalyzer {
    posts: Vec<Post>,
    assignment: Assignment,
    analysis: AnalysisConfig,
    diagnostics: LoadDiagnostics,
}

impl NarrativeAnalyzer {
    /// Assign narratives to `posts` with any matcher. Fails when the
    /// matcher's labels or indices are inconsistent.
    pub fn new(posts: Vec<Post>, matcher: &dyn Matcher, analysis: AnalysisConfig) -> Result<Self, ConfigError> {
        let assignment = assign(&posts, matcher)?;
        let diagnostics = LoadDiagnostics {
            lines_read: posts.len(),
            records_loaded: posts.len(),
            ..LoadDiagnostics::default()
        };
        Ok(Self {
            posts,
            assignment,
            analysis,
            diagnostics,
        })
    }

    /// Build the keyword matcher from `config` and assign a loaded dataset.
    pub fn from_dataset(dataset: LoadedDataset, config: &SpreadConfig) -> NarrativeResult<Self> {
        let rules = config.rule_set()?;
        let matcher = KeywordMatcher::new(&rules, config.analysis.effective_match_mode())?;
        let mut analyzer = Self::new(dataset.posts, &matcher, config.analysis.clone())?;
        analyzer.diagnostics = dataset.diagnostics;
        Ok(analyzer)
    }

    /// Load `path` and assign narratives per `config`.
    pub fn open(path: &Path, config: &SpreadConfig) -> NarrativeResult<Self> {
        let dataset = loader::load_path(path)?;
        Self::from_dataset(dataset, config)
    }

    /// Validated window for subsequent queries.
    pub fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<TimeWindow, QueryError> {
        TimeWindow::new(start, end)
    }

    /// Window spanning the whole dataset.
    pub fn dataset_window(&self) -> TimeWindow {
        TimeWindow::spanning(&self.posts).unwrap_or_default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn labels(&self) -> &[String] {
        self.assignment.labels()
    }

    pub fn diagnostics(&self) -> &LoadDiagnostics {
        &self.diagnostics
    }

    /// Narratives with at least one post in `window`, in rule order, with counts.
    pub fn narrative_list(&self, window: &TimeWindow) -> Vec<NarrativeCount> {
        (0..self.labels().len())
            .map(|idx| idx as NarrativeIdx)
            .filter_map(|idx| {
                let count = self.assignment.posts_in_window(&self.posts, idx, window).len();
                (count > 0).then(|| NarrativeCount {
                    label: self.assignment.label(idx).to_string(),
                    count,
                })
            })
            .collect()
    }

    pub fn series(&self, label: &str, window: &TimeWindow) -> Result<WindowOutcome<NarrativeSeries>, QueryError> {
        let in_window = self.narrative_posts(label, window)?;
        Ok(outcome(label, window, amplification::build_series(label, &in_window)))
    }

    pub fn community_breakdown(
        &self,
        label: &str,
        window: &TimeWindow,
    ) -> Result<WindowOutcome<CommunityBreakdown>, QueryError> {
        let in_window = self.narrative_posts(label, window)?;
        let breakdown =
            community::build_breakdown(label, &in_window, self.analysis.effective_siloed_threshold());
        Ok(outcome(label, window, breakdown))
    }

    /// The configured number of top contributing subreddits.
    pub fn top_communities(
        &self,
        label: &str,
        window: &TimeWindow,
    ) -> Result<WindowOutcome<Vec<CommunityContribution>>, QueryError> {
        let n = self.analysis.effective_top_communities();
        Ok(self
            .community_breakdown(label, window)?
            .map(|b| b.top(n).to_vec()))
    }

    pub fn insights(&self, label: &str, window: &TimeWindow) -> Result<WindowOutcome<InsightReport>, QueryError> {
        let report = self.narrative_report(label, window)?;
        Ok(report.map(|r| r.insights))
    }

    /// Series, breakdown, and insights for one narrative in a single pass.
    pub fn narrative_report(
        &self,
        label: &str,
        window: &TimeWindow,
    ) -> Result<WindowOutcome<NarrativeReport>, QueryError> {
        let in_window = self.narrative_posts(label, window)?;
        Ok(outcome(label, window, self.build_report(label, &in_window)))
    }

    /// Window-level totals across narratives.
    pub fn activity(&self, window: &TimeWindow) -> Option<DatasetActivity> {
        activity::dataset_activity(&self.posts, &self.assignment, window)
    }

    /// Activity plus a report for every narrative active in `window`.
    pub fn report(&self, window: &TimeWindow) -> SpreadReport {
        let narratives = (0..self.labels().len())
            .map(|idx| idx as NarrativeIdx)
            .filter_map(|idx| {
                let in_window = self.assignment.posts_in_window(&self.posts, idx, window);
                self.build_report(self.assignment.label(idx), &in_window)
            })
            .collect();
        SpreadReport {
            window: *window,
            activity: self.activity(window),
            narratives,
        }
    }

    fn narrative_posts(&self, label: &str, window: &TimeWindow) -> Result<Vec<&Post>, QueryError> {
        let idx = self
            .assignment
            .index_of(label)
            .ok_or_else(|| QueryError::UnknownNarrative {
                label: label.to_string(),
            })?;
        Ok(self.assignment.posts_in_window(&self.posts, idx, window))
    }

    fn build_report(&self, label: &str, in_window: &[&Post]) -> Option<NarrativeReport> {
        let series = amplification::build_series(label, in_window)?;
        let communities =
            community::build_breakdown(label, in_window, self.analysis.effective_siloed_threshold())?;
        let insights = insights::summarize(
            &series,
            &communities,
            &InsightThresholds::from_config(&self.analysis),
        );
        Some(NarrativeReport {
            series,
            communities,
            insights,
        })
    }
}

fn outcome<T>(label: &str, window: &TimeWindow, value: Option<T>) -> WindowOutcome<T> {
    match value {
        Some(value) => WindowOutcome::Data(value),
        None => {
            debug!(narrative = label, "no posts in window");
            WindowOutcome::NoDataInWindow {
                label: label.to_string(),
                window: *window,
            }
        }
    }
}
