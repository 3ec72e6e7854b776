//! Tests for the error handling system.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use narrative_core::errors::*;

#[test]
fn test_every_error_has_a_code() {
    let errors: Vec<NarrativeError> = vec![
        LoadError::Unreadable {
            source_name: "posts.jsonl".into(),
            message: "permission denied".into(),
        }
        .into(),
        LoadError::EmptyDataset {
            source_name: "posts.jsonl".into(),
            malformed_skipped: 3,
        }
        .into(),
        QueryError::InvalidWindow {
            start: Utc.timestamp_opt(10, 0).unwrap(),
            end: Utc.timestamp_opt(5, 0).unwrap(),
        }
        .into(),
        QueryError::UnknownNarrative {
            label: "sports".into(),
        }
        .into(),
        ConfigError::DuplicateNarrative {
            label: "sports".into(),
        }
        .into(),
    ];
    for e in &errors {
        assert!(!e.error_code().is_empty());
    }
}

#[test]
fn test_codes_distinguish_user_visible_failures() {
    let empty = LoadError::EmptyDataset {
        source_name: "x".into(),
        malformed_skipped: 0,
    };
    let window = QueryError::InvalidWindow {
        start: Utc.timestamp_opt(2, 0).unwrap(),
        end: Utc.timestamp_opt(1, 0).unwrap(),
    };
    let unknown = QueryError::UnknownNarrative { label: "x".into() };
    let codes: HashSet<&str> = [empty.error_code(), window.error_code(), unknown.error_code()]
        .into_iter()
        .collect();
    assert_eq!(codes.len(), 3);
    assert_eq!(empty.error_code(), error_code::EMPTY_DATASET);
    assert_eq!(window.error_code(), error_code::INVALID_WINDOW);
}

#[test]
fn test_top_level_error_keeps_inner_code() {
    let inner = LoadError::EmptyDataset {
        source_name: "posts.jsonl".into(),
        malformed_skipped: 2,
    };
    let outer: NarrativeError = inner.into();
    assert_eq!(outer.error_code(), error_code::EMPTY_DATASET);
    assert!(matches!(outer, NarrativeError::Load(LoadError::EmptyDataset { .. })));
}

#[test]
fn test_display_string_format() {
    let e = QueryError::UnknownNarrative {
        label: "Sports".into(),
    };
    assert_eq!(e.display_string(), "[UNKNOWN_NARRATIVE] unknown narrative: Sports");

    let empty = LoadError::EmptyDataset {
        source_name: "posts.jsonl".into(),
        malformed_skipped: 4,
    };
    let rendered = empty.display_string();
    assert!(rendered.starts_with("[EMPTY_DATASET]"));
    assert!(rendered.contains("4 malformed lines skipped"));
}
