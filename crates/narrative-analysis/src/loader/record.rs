//! Parsing of a single dataset line.

use chrono::{DateTime, Utc};
use narrative_core::constants::{DELETED_AUTHOR, EARLIEST_POST_SECS, LATEST_POST_SECS};
use narrative_core::Post;
use serde::Deserialize;
use serde_json::Value;

/// Why a line was skipped.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("timestamp {0} is outside the supported range (millisecond units?)")]
    TimestampOutOfRange(String),
}

/// Fields as they appear in a Reddit submission dump. Everything is optional
/// here; `into_post` decides what is required.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    subreddit: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    selftext: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    created_utc: Option<Value>,
    #[serde(default)]
    created: Option<Value>,
    #[serde(default)]
    url: Option<String>,
}

/// Parse one line into a `Post`. `line_no` is 1-based and only used to
/// synthesize an id for records that carry none.
///
/// Accepts both flat objects and listing children of the form
/// `{"kind": "t3", "data": {...}}`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Post, RecordError> {
    let mut value: Value = serde_json::from_str(line)?;
    if !value.is_object() {
        return Err(RecordError::NotAnObject);
    }
    let listing_data = value.get_mut("data").filter(|d| d.is_object()).map(Value::take);
    if let Some(inner) = listing_data {
        value = inner;
    }
    let raw: RawRecord = serde_json::from_value(value)?;
    raw.into_post(line_no)
}

impl RawRecord {
    fn into_post(self, line_no: usize) -> Result<Post, RecordError> {
        let subreddit = non_blank(self.subreddit).ok_or(RecordError::MissingField("subreddit"))?;
        let created_raw = self
            .created_utc
            .or(self.created)
            .filter(|v| !v.is_null())
            .ok_or(RecordError::MissingField("created_utc"))?;
        let created = parse_timestamp(&created_raw)?;

        let id = match self.id {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => format!("line-{line_no}"),
        };

        Ok(Post {
            id,
            subreddit,
            author: non_blank(self.author).unwrap_or_else(|| DELETED_AUTHOR.to_string()),
            title: self.title.unwrap_or_default(),
            body: non_blank(self.selftext).or_else(|| non_blank(self.body)),
            created,
            url: non_blank(self.url),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Unix seconds as an integer, a float, or a numeric string, bounded to
/// `EARLIEST_POST_SECS..=LATEST_POST_SECS`.
fn parse_timestamp(value: &Value) -> Result<DateTime<Utc>, RecordError> {
    let secs = match value {
        Value::Number(n) => match n.as_i64() {
            Some(whole) => return from_whole_seconds(whole, value),
            None => n.as_f64(),
        },
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(whole) = trimmed.parse::<i64>() {
                return from_whole_seconds(whole, value);
            }
            trimmed.parse::<f64>().ok()
        }
        _ => None,
    }
    .ok_or_else(|| RecordError::InvalidTimestamp(value.to_string()))?;

    if !secs.is_finite() {
        return Err(RecordError::InvalidTimestamp(value.to_string()));
    }
    let whole = secs.floor();
    if whole < EARLIEST_POST_SECS as f64 || whole > LATEST_POST_SECS as f64 {
        return Err(RecordError::TimestampOutOfRange(value.to_string()));
    }
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::<Utc>::from_timestamp(whole as i64, nanos)
        .ok_or_else(|| RecordError::InvalidTimestamp(value.to_string()))
}

fn from_whole_seconds(secs: i64, raw: &Value) -> Result<DateTime<Utc>, RecordError> {
    if !(EARLIEST_POST_SECS..=LATEST_POST_SECS).contains(&secs) {
        return Err(RecordError::TimestampOutOfRange(raw.to_string()));
    }
    DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| RecordError::InvalidTimestamp(raw.to_string()))
}
