//! End-to-end tests: load → match → aggregate → summarize.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use narrative_analysis::insights::REACH_CAVEAT;
use narrative_analysis::matcher::KeywordMatcher;
use narrative_analysis::{LoadDiagnostics, LoadedDataset, NarrativeAnalyzer};
use narrative_core::config::{AnalysisConfig, MatchMode};
use narrative_core::errors::{NarrativeError, QueryError};
use narrative_core::models::{GrowthShape, SpreadPattern};
use narrative_core::{NarrativeRule, Post, RuleSet, SpreadConfig, TimeWindow};

const DAY: i64 = 86_400;
const BASE: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn make_post(id: &str, subreddit: &str, title: &str, secs: i64) -> Post {
    Post {
        id: id.to_string(),
        subreddit: subreddit.to_string(),
        author: format!("author_{id}"),
        title: title.to_string(),
        body: None,
        created: at(secs),
        url: None,
    }
}

/// Five posts: three "election" on relative days 0, 0, 2 and two "sports"
/// on days 0 and 5.
fn scenario() -> NarrativeAnalyzer {
    let rules = RuleSet::new(vec![
        NarrativeRule::new("election", ["election", "vote"]),
        NarrativeRule::new("sports", ["match", "league"]),
    ])
    .unwrap();
    let matcher = KeywordMatcher::new(&rules, MatchMode::Token).unwrap();
    let posts = vec![
        make_post("e1", "politics", "Election day is here", BASE + 3_600),
        make_post("s1", "soccer", "Match report", BASE + 7_200),
        make_post("e2", "news", "Early vote numbers", BASE + 10_000),
        make_post("e3", "politics", "Election recount", BASE + 2 * DAY + 7_200),
        make_post("s2", "soccer", "League standings", BASE + 5 * DAY + 7_200),
    ];
    NarrativeAnalyzer::new(posts, &matcher, AnalysisConfig::default()).unwrap()
}

fn ten_day_window() -> TimeWindow {
    TimeWindow::new(at(BASE), at(BASE + 10 * DAY)).unwrap()
}

#[test]
fn test_scenario_election_series() {
    let analyzer = scenario();
    let series = analyzer
        .series("election", &ten_day_window())
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(series.cumulative_totals(), vec![2, 2, 3]);
    assert_eq!(series.daily_counts(), vec![2, 0, 1]);
    assert_eq!(series.total, 3);
    assert_eq!(series.first_appearance, at(BASE + 3_600));
}

#[test]
fn test_scenario_sports_series_and_shares() {
    let analyzer = scenario();
    let window = ten_day_window();
    let sports = analyzer.series("sports", &window).unwrap().into_data().unwrap();
    assert_eq!(sports.last_day(), 5);
    assert_eq!(sports.cumulative_totals(), vec![1, 1, 1, 1, 1, 2]);

    for label in ["election", "sports"] {
        let breakdown = analyzer
            .community_breakdown(label, &window)
            .unwrap()
            .into_data()
            .unwrap();
        assert!((breakdown.share_sum() - 1.0).abs() < 1e-6);
    }

    let election = analyzer
        .community_breakdown("election", &window)
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(election.contributions[0].subreddit, "politics");
    assert_eq!(election.contributions[0].count, 2);
    assert_eq!(election.concentration.pattern, SpreadPattern::Siloed);
}

#[test]
fn test_narrative_list_follows_window() {
    let analyzer = scenario();
    let all = analyzer.narrative_list(&ten_day_window());
    assert_eq!(all.len(), 2);
    assert_eq!((all[0].label.as_str(), all[0].count), ("election", 3));
    assert_eq!((all[1].label.as_str(), all[1].count), ("sports", 2));

    let late = TimeWindow::new(at(BASE + 3 * DAY), at(BASE + 10 * DAY)).unwrap();
    let active = analyzer.narrative_list(&late);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].label, "sports");
}

#[test]
fn test_no_data_in_window_is_explicit() {
    let analyzer = scenario();
    let late = TimeWindow::new(at(BASE + 3 * DAY), at(BASE + 4 * DAY)).unwrap();
    let outcome = analyzer.series("election", &late).unwrap();
    assert!(outcome.is_no_data());
    assert!(analyzer
        .community_breakdown("election", &late)
        .unwrap()
        .is_no_data());
    assert!(analyzer.insights("election", &late).unwrap().is_no_data());
    assert!(analyzer.activity(&late).is_none());
}

#[test]
fn test_unknown_narrative_is_rejected() {
    let analyzer = scenario();
    let err = analyzer.series("weather", &ten_day_window()).unwrap_err();
    assert!(matches!(err, QueryError::UnknownNarrative { ref label } if label == "weather"));
}

#[test]
fn test_inverted_window_is_rejected_at_boundary() {
    let err = NarrativeAnalyzer::window(at(BASE + DAY), at(BASE)).unwrap_err();
    assert!(matches!(err, QueryError::InvalidWindow { .. }));
}

#[test]
fn test_moving_window_start_rebases_days() {
    let analyzer = scenario();
    let later = TimeWindow::new(at(BASE + DAY), at(BASE + 10 * DAY)).unwrap();
    let series = analyzer.series("election", &later).unwrap().into_data().unwrap();
    // Only e3 remains and becomes its own day 0.
    assert_eq!(series.first_appearance, at(BASE + 2 * DAY + 7_200));
    assert_eq!(series.cumulative_totals(), vec![1]);
}

#[test]
fn test_insights_for_scenario() {
    let analyzer = scenario();
    let insights = analyzer
        .insights("election", &ten_day_window())
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(insights.peak.day, 0);
    assert_eq!(insights.peak.count, 2);
    // Span of 3 days: day 0 holds 2 of 3 posts.
    assert_eq!(insights.growth_shape, GrowthShape::FrontLoaded);
    assert_eq!(insights.top_community.as_ref().unwrap().subreddit, "politics");
    assert_eq!(insights.statements.last().map(String::as_str), Some(REACH_CAVEAT));
    assert!(insights.statements[2].contains("r/politics"));

    let sports = analyzer
        .insights("sports", &ten_day_window())
        .unwrap()
        .into_data()
        .unwrap();
    // Span of 6 days: days 0-1 hold 1 of 2 posts, exactly half.
    assert_eq!(sports.growth_shape, GrowthShape::Sustained);
}

#[test]
fn test_report_is_deterministic() {
    let window = ten_day_window();
    let first = serde_json::to_string(&scenario().report(&window)).unwrap();
    let second = serde_json::to_string(&scenario().report(&window)).unwrap();
    assert_eq!(first, second);

    let analyzer = scenario();
    let a = serde_json::to_vec(&analyzer.report(&window)).unwrap();
    let b = serde_json::to_vec(&analyzer.report(&window)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fixture_end_to_end_with_default_rules() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/reddit_sample.jsonl");
    let analyzer = NarrativeAnalyzer::open(&path, &SpreadConfig::default()).unwrap();
    assert_eq!(analyzer.diagnostics().malformed_skipped, 2);
    assert_eq!(analyzer.assignment().unmatched_count(), 1);

    let window = analyzer.dataset_window();
    let activity = analyzer.activity(&window).unwrap();
    assert_eq!(activity.narrative_posts, 6);
    assert_eq!(activity.total_amplifications, 7);
    assert_eq!(activity.active_communities, 5);
    assert_eq!(activity.active_days, 5);
    assert!((activity.avg_amplifications_per_day - 1.4).abs() < 1e-9);
    assert_eq!(activity.dominant_narrative, "Geopolitics / Conflict");
    let order: Vec<&str> = activity.distribution.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "Geopolitics / Conflict",
            "Politics / Government",
            "Technology / Big Tech",
            "Economy / Jobs"
        ]
    );

    let geo = analyzer
        .series("Geopolitics / Conflict", &window)
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(geo.daily_counts(), vec![1, 0, 1, 0, 1]);

    let report = analyzer.report(&window);
    assert_eq!(report.narratives.len(), 4);
}

#[test]
fn test_default_config_matches_inside_words() {
    let posts = vec![
        make_post("w", "nba", "Warriors win in overtime", BASE),
        make_post("d", "gadgets", "Detailed review of the new phone", BASE + 60),
    ];
    let dataset = LoadedDataset {
        posts,
        diagnostics: LoadDiagnostics::default(),
    };
    let analyzer = NarrativeAnalyzer::from_dataset(dataset, &SpreadConfig::default()).unwrap();
    let assignment = analyzer.assignment();
    let geo = assignment.index_of("Geopolitics / Conflict").unwrap();
    let tech = assignment.index_of("Technology / Big Tech").unwrap();
    assert_eq!(assignment.narratives_of(0), &[geo]);
    assert_eq!(assignment.narratives_of(1), &[tech]);

    let config = SpreadConfig {
        analysis: AnalysisConfig {
            match_mode: Some(MatchMode::Token),
            ..AnalysisConfig::default()
        },
        ..SpreadConfig::default()
    };
    let dataset = LoadedDataset {
        posts: analyzer.posts().to_vec(),
        diagnostics: LoadDiagnostics::default(),
    };
    let token = NarrativeAnalyzer::from_dataset(dataset, &config).unwrap();
    assert_eq!(token.assignment().unmatched_count(), 2);
}

#[test]
fn test_open_missing_file_surfaces_load_error() {
    let err = NarrativeAnalyzer::open(Path::new("/definitely/not/here.jsonl"), &SpreadConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, NarrativeError::Load(_)));
}

#[test]
fn test_top_communities_respects_config() {
    let rules = RuleSet::new(vec![NarrativeRule::new("election", ["election"])]).unwrap();
    let matcher = KeywordMatcher::new(&rules, MatchMode::Token).unwrap();
    let posts: Vec<Post> = (0..5)
        .map(|i| make_post(&format!("p{i}"), &format!("sub{i}"), "election", BASE + i * 60))
        .collect();
    let config = AnalysisConfig {
        top_communities: Some(2),
        ..AnalysisConfig::default()
    };
    let analyzer = NarrativeAnalyzer::new(posts, &matcher, config).unwrap();
    let window = TimeWindow::unbounded();
    let top = analyzer
        .top_communities("election", &window)
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(top.len(), 2);

    let breakdown = analyzer
        .community_breakdown("election", &window)
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(breakdown.communities_reached, 5);
    assert_eq!(breakdown.concentration.pattern, SpreadPattern::Broad);
}
