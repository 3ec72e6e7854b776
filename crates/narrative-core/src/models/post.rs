use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One Reddit submission. Built once by the loader and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub subreddit: String,
    pub author: String,
    pub title: String,
    /// Self-text. `None` for link posts and empty bodies.
    pub body: Option<String>,
    pub created: DateTime<Utc>,
    pub url: Option<String>,
}

impl Post {
    /// Title and body joined by a single space, case-folded.
    /// This is the text every matcher sees.
    pub fn match_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.body.as_ref().map_or(0, |b| b.len() + 1),
        );
        text.push_str(&self.title);
        if let Some(body) = &self.body {
            text.push(' ');
            text.push_str(body);
        }
        text.to_lowercase()
    }
}
