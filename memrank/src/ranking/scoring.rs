//! Composite score and tie-break configuration
//!
//! Importance dominates: one unit of importance outweighs 100,000 units of
//! timestamp spread. Within an importance tier the timestamp orders records
//! by recency. The weighting is fixed; hosts wanting a different trade-off
//! pre-transform importance or timestamp before ranking.

use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Multiplier applied to importance before the timestamp is added
pub const IMPORTANCE_WEIGHT: i64 = 100_000;

/// Composite score of a record: `importance * 100000 + timestamp`.
///
/// Computed in `i128`: the product exceeds the `i32` range and adding a full
/// `i64` timestamp can exceed the `i64` range, but the sum always fits in
/// 128 bits, so distinct inputs never collapse onto one score.
pub fn score(record: &Record) -> i128 {
    i128::from(record.importance) * i128::from(IMPORTANCE_WEIGHT) + i128::from(record.timestamp)
}

/// How records with equal scores are ordered relative to each other
///
/// Both variants give a total order, so repeated calls over the same input
/// always produce the same output sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Equal scores keep their relative input order (stable sort)
    #[default]
    InputOrder,

    /// Equal scores are ordered by ascending `id`, then by input order
    IdAscending,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputOrder => write!(f, "input_order"),
            Self::IdAscending => write!(f, "id_ascending"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "input" | "input_order" | "stable" => Ok(Self::InputOrder),
            "id" | "id_ascending" => Ok(Self::IdAscending),
            _ => Err(format!("Invalid tie-break: {}", s)),
        }
    }
}
