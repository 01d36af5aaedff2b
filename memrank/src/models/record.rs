//! Record model representing a single rankable memory entry

use serde::{Deserialize, Serialize};

/// A memory entry as seen by the ranker.
///
/// Records are plain values: the ranker reads them, clones the ones it
/// returns, and never mutates them. Only `topic`, `importance` and
/// `timestamp` take part in filtering and scoring; `content` is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Opaque identifier supplied by the host
    pub id: i64,

    /// Recency marker, higher means more recent
    #[serde(rename = "ts")]
    pub timestamp: i64,

    /// Caller-defined importance scale
    pub importance: i32,

    /// Short label used for equality filtering
    pub topic: String,

    /// Free text payload
    pub content: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        id: i64,
        timestamp: i64,
        importance: i32,
        topic: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            importance,
            topic: topic.into(),
            content: content.into(),
        }
    }
}

/// Builder for creating records
///
/// Unset fields default to zero / empty strings.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Create a new record builder with the given ID
    pub fn new(id: i64) -> Self {
        Self {
            record: Record::new(id, 0, 0, String::new(), String::new()),
        }
    }

    /// Set the timestamp
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.record.timestamp = timestamp;
        self
    }

    /// Set the importance
    pub fn importance(mut self, importance: i32) -> Self {
        self.record.importance = importance;
        self
    }

    /// Set the topic
    pub fn topic<S: Into<String>>(mut self, topic: S) -> Self {
        self.record.topic = topic.into();
        self
    }

    /// Set the content
    pub fn content<S: Into<String>>(mut self, content: S) -> Self {
        self.record.content = content.into();
        self
    }

    /// Build the record
    pub fn build(self) -> Record {
        self.record
    }
}
