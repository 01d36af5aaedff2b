//! Query model describing which records to keep and how many to return

use super::record::Record;
use serde::{Deserialize, Serialize};

/// Importance threshold used when a query does not set one
pub const DEFAULT_IMPORTANCE_MIN: i32 = 1;

/// Result limit used when a query does not set one
pub const DEFAULT_LIMIT: i64 = 50;

/// Ranking request: topic/importance filter plus a result limit.
///
/// `limit` is signed on purpose. Hosts may pass a negative limit, which
/// selects nothing; it is never read as "unbounded".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Exact topic to keep; `None` or an empty string keeps every topic
    #[serde(rename = "topic", alias = "topic_filter")]
    pub topic_filter: Option<String>,

    /// Records with importance strictly below this are dropped
    pub importance_min: i32,

    /// Maximum number of records returned
    pub limit: i64,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            topic_filter: None,
            importance_min: DEFAULT_IMPORTANCE_MIN,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Query {
    /// Create a query with default settings (no topic filter, importance >= 1, limit 50)
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only records with this exact topic
    pub fn with_topic<S: Into<String>>(mut self, topic: S) -> Self {
        self.topic_filter = Some(topic.into());
        self
    }

    /// Set the minimum importance
    pub fn with_importance_min(mut self, importance_min: i32) -> Self {
        self.importance_min = importance_min;
        self
    }

    /// Set the result limit
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// The topic filter, if one is in effect
    pub fn topic(&self) -> Option<&str> {
        self.topic_filter.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether a record passes the topic and importance filters
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(topic) = self.topic()
            && record.topic != topic
        {
            return false;
        }
        record.importance >= self.importance_min
    }

    /// The limit clamped to a usable count (negative limits select nothing)
    pub fn effective_limit(&self) -> usize {
        usize::try_from(self.limit.max(0)).unwrap_or(usize::MAX)
    }
}
