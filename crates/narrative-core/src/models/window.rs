use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::QueryError;
use crate::models::Post;

/// Inclusive `[start, end]` time range filtering every computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Validates the range at the query boundary. `start == end` is a
    /// legal single-instant window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, QueryError> {
        if start > end {
            return Err(QueryError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window covering every representable instant.
    pub fn unbounded() -> Self {
        Self {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Tightest window containing every post, or `None` for no posts.
    pub fn spanning<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Option<Self> {
        let mut bounds: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
        for post in posts {
            bounds = Some(match bounds {
                None => (post.created, post.created),
                Some((lo, hi)) => (lo.min(post.created), hi.max(post.created)),
            });
        }
        bounds.map(|(start, end)| Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::unbounded()
    }
}
