//! Insight Summarizer: plain descriptive statements about one narrative.
//!
//! Growth shape rule: with an observed span of `S` days (day 0 through the
//! last observed day), the "early" part is every day `d < S * span_fraction`.
//! A one-day span is `SingleDay`. Otherwise the shape is `FrontLoaded` when
//! the early part holds strictly more than `front_loaded_share` of the posts,
//! and `Sustained` when it does not.

use narrative_core::config::AnalysisConfig;
use narrative_core::models::{CommunityBreakdown, GrowthShape, InsightReport, NarrativeSeries, PeakDay};

/// Appended to every report. Post counts are the only signal available.
pub const REACH_CAVEAT: &str =
    "These figures count posts only; reach, views and impressions are not measured.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightThresholds {
    pub front_loaded_share: f64,
    pub span_fraction: f64,
}

impl InsightThresholds {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            front_loaded_share: config.effective_front_loaded_share(),
            span_fraction: config.effective_span_fraction(),
        }
    }
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

/// Earliest day with the maximal daily count.
pub fn peak_day(series: &NarrativeSeries) -> PeakDay {
    let mut peak = PeakDay { day: 0, count: 0 };
    for point in &series.points {
        if point.count > peak.count {
            peak = PeakDay {
                day: point.day,
                count: point.count,
            };
        }
    }
    peak
}

/// Growth shape and the share of posts in the early part of the span.
pub fn classify_growth(series: &NarrativeSeries, thresholds: &InsightThresholds) -> (GrowthShape, f64) {
    if series.total == 0 {
        return (GrowthShape::SingleDay, 0.0);
    }
    let span = series.span_days();
    if span <= 1 {
        return (GrowthShape::SingleDay, 1.0);
    }

    // Days are integers, so shaving the cutoff only guards against rounding up past one.
    let cutoff = f64::from(span) * thresholds.span_fraction - 1e-9;
    let early: usize = series
        .points
        .iter()
        .filter(|p| f64::from(p.day) < cutoff)
        .map(|p| p.count)
        .sum();
    let early_share = early as f64 / series.total as f64;

    let shape = if early_share > thresholds.front_loaded_share {
        GrowthShape::FrontLoaded
    } else {
        GrowthShape::Sustained
    };
    (shape, early_share)
}

/// Summarize one narrative from its series and community breakdown.
pub fn summarize(
    series: &NarrativeSeries,
    breakdown: &CommunityBreakdown,
    thresholds: &InsightThresholds,
) -> InsightReport {
    let peak = peak_day(series);
    let (growth_shape, early_share) = classify_growth(series, thresholds);
    let top_community = breakdown.top_contributor().cloned();

    let mut statements = Vec::with_capacity(4);
    statements.push(format!(
        "Posting about {} peaked on day {} after its first appearance in this window, with {} {}.",
        series.label,
        peak.day,
        peak.count,
        plural(peak.count, "post", "posts"),
    ));
    statements.push(match growth_shape {
        GrowthShape::SingleDay => format!(
            "All {} {} fell on a single day, so no growth shape can be described.",
            series.total,
            plural(series.total, "post", "posts"),
        ),
        GrowthShape::FrontLoaded => format!(
            "About {:.0}% of posts appeared in the first {:.0}% of the {}-day span, which looks front-loaded.",
            early_share * 100.0,
            thresholds.span_fraction * 100.0,
            series.span_days(),
        ),
        GrowthShape::Sustained => format!(
            "About {:.0}% of posts appeared in the first {:.0}% of the {}-day span, which looks sustained rather than front-loaded.",
            early_share * 100.0,
            thresholds.span_fraction * 100.0,
            series.span_days(),
        ),
    });
    statements.push(match &top_community {
        Some(top) => format!(
            "r/{} contributed the largest share of posts ({:.0}%) across {} {}; spread appears {}.",
            top.subreddit,
            top.share * 100.0,
            breakdown.communities_reached,
            plural(breakdown.communities_reached, "community", "communities"),
            breakdown.concentration.pattern.as_str(),
        ),
        None => "No community contributions were recorded for this narrative.".to_string(),
    });
    statements.push(REACH_CAVEAT.to_string());

    InsightReport {
        label: series.label.clone(),
        total: series.total,
        peak,
        growth_shape,
        early_share,
        top_community,
        communities_reached: breakdown.communities_reached,
        statements,
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
