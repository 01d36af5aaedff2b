//! Record ranking module
//!
//! This module turns a collection of records and a [`Query`](crate::models::Query)
//! into the top-K records by composite score.
//!
//! # Overview
//!
//! The pipeline is:
//! - **Filter**: keep records whose topic matches the query (if it sets one)
//!   and whose importance is at least `importance_min`
//! - **Score**: `importance * 100000 + timestamp`, in 64-bit arithmetic
//! - **Order**: score descending, ties resolved by the configured [`TieBreak`]
//! - **Select**: the first `limit` records, cloned
//!
//! # Example
//!
//! ```
//! use memrank::models::{Query, Record};
//! use memrank::ranking::{Ranker, TieBreak};
//!
//! let records = vec![
//!     Record::new(1, 10, 5, "a", "x"),
//!     Record::new(2, 20, 5, "a", "y"),
//!     Record::new(3, 5, 9, "b", "z"),
//! ];
//!
//! let ranker = Ranker::new(TieBreak::IdAscending);
//! let top = ranker.rank(&records, &Query::new().with_topic("a").with_limit(10));
//!
//! let ids: Vec<i64> = top.iter().map(|r| r.id).collect();
//! assert_eq!(ids, vec![2, 1]);
//! ```

pub mod ranker;
pub mod scoring;

pub use ranker::{RankReport, Ranker, rank};
pub use scoring::{IMPORTANCE_WEIGHT, TieBreak, score};
