//! # Memrank
//!
//! Bounded-memory ranking of memory records. Given an in-memory collection of
//! records and a query, memrank filters, scores, sorts and truncates the
//! collection to return the top-K most relevant entries.
//!
//! ## Quick Start
//!
//! ```rust
//! use memrank::prelude::*;
//!
//! let records = vec![
//!     RecordBuilder::new(1).timestamp(10).importance(5).topic("a").content("x").build(),
//!     RecordBuilder::new(2).timestamp(20).importance(5).topic("a").content("y").build(),
//!     RecordBuilder::new(3).timestamp(5).importance(9).topic("b").content("z").build(),
//! ];
//!
//! let query = Query::new().with_limit(2);
//! let top = rank(&records, &query);
//!
//! let ids: Vec<i64> = top.iter().map(|r| r.id).collect();
//! assert_eq!(ids, vec![3, 2]);
//! ```
//!
//! ## Scoring
//!
//! Every record is scored as `importance * 100000 + timestamp` in 128-bit
//! arithmetic, which no pair of `i32` importance and `i64` timestamp can
//! overflow. Importance dominates and the timestamp breaks ties within an
//! importance tier. Records with equal scores are ordered by a configurable
//! [`TieBreak`](ranking::TieBreak) so the output is always reproducible.
//!
//! ## Host boundary
//!
//! Hosts that hold dynamically-typed data go through [`marshal`], which turns
//! `serde_json::Value` arguments into validated [`Record`](models::Record)s and
//! a [`Query`](models::Query), ranks them, and hands back a JSON array.

pub mod config;
pub mod logging;
pub mod marshal;
pub mod models;
pub mod ranking;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{
        ConfigBuilder, ConfigLoader, LogFormat, LogLevel, LoggingConfig, MemrankConfig,
        RankingConfig,
    };
    pub use crate::marshal::{Decoded, MalformedPolicy, Marshaller, search};
    pub use crate::models::{Query, Record, RecordBuilder};
    pub use crate::ranking::{RankReport, Ranker, TieBreak, rank, score};
    pub use crate::{MemrankError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for memrank operations
#[derive(Debug, thiserror::Error)]
pub enum MemrankError {
    /// Wrong arity or wrongly-shaped top-level argument at the host boundary
    #[error("Invalid argument: {0}. Usage: search(records: Array, query: Object)")]
    InvalidArgument(String),

    /// A record entry could not be decoded (only fatal in strict mode)
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Failure reading input
    #[error("IO error: {0}")]
    Io(String),

    /// Input that is not valid JSON
    #[error("JSON error: {0}. Records must be a JSON array of objects")]
    Json(String),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for MemrankError {
    fn from(err: crate::config::ConfigError) -> Self {
        MemrankError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for MemrankError {
    fn from(err: std::io::Error) -> Self {
        MemrankError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MemrankError {
    fn from(err: serde_json::Error) -> Self {
        MemrankError::Json(err.to_string())
    }
}

/// Result type for memrank operations
pub type Result<T> = std::result::Result<T, MemrankError>;

/// Initialize memrank's ambient services (logging) from a configuration.
///
/// Ranking itself needs no initialisation; this only installs the tracing
/// subscriber described by `config.logging`. Calling it more than once is
/// harmless.
///
/// # Examples
///
/// ```rust
/// use memrank::prelude::*;
///
/// let config = ConfigBuilder::testing().build()?;
/// memrank::init(&config)?;
/// # Ok::<(), memrank::MemrankError>(())
/// ```
pub fn init(config: &config::MemrankConfig) -> Result<()> {
    logging::init(&config.logging)?;
    Ok(())
}
