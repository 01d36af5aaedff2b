//! Domain models for ranked records and ranking queries

pub mod query;
pub mod record;

// Re-export important models
pub use query::{DEFAULT_IMPORTANCE_MIN, DEFAULT_LIMIT, Query};
pub use record::{Record, RecordBuilder};
