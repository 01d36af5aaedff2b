//! Host boundary marshalling
//!
//! Hosts hand the ranker dynamically-typed values (represented here as
//! `serde_json::Value`). This module validates them into [`Record`]s and a
//! [`Query`], runs the [`Ranker`], and converts the result back.
//!
//! The call shape is `search(records, query)`: two positional arguments, the
//! first an array of record objects, the second a query object. The result is
//! an array of record objects with the fields `id`, `ts`, `importance`,
//! `topic` and `content`.
//!
//! ```
//! use memrank::marshal::search;
//! use serde_json::json;
//!
//! let records = json!([
//!     {"id": 1, "ts": 10, "importance": 5, "topic": "a", "content": "x"},
//!     {"id": 2, "ts": 20, "importance": 5, "topic": "a", "content": "y"},
//!     {"id": 3, "ts": 5, "importance": 9, "topic": "b", "content": "z"},
//! ]);
//! let out = search(&[records, json!({"limit": 2})])?;
//!
//! assert_eq!(out[0]["id"], 3);
//! assert_eq!(out[1]["id"], 2);
//! # Ok::<(), memrank::MemrankError>(())
//! ```

mod decode;

pub use decode::{MalformedRecord, query_from_value, record_from_value};

use crate::config::RankingConfig;
use crate::models::{Query, Record};
use crate::ranking::{RankReport, Ranker, TieBreak};
use crate::{MemrankError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// What to do with record entries that cannot be decoded
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Drop the entry and carry on
    #[default]
    Skip,

    /// Fail the whole call on the first malformed entry
    Strict,
}

impl fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "strict" => Ok(Self::Strict),
            _ => Err(format!("Invalid malformed-record policy: {}", s)),
        }
    }
}

/// Records decoded from a host array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Well-formed records, in input order
    pub records: Vec<Record>,

    /// Number of malformed entries that were dropped
    pub skipped: usize,
}

/// Outcome of ranking host values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    /// Ranked records, best first
    pub records: Vec<Record>,

    /// Filter/selection counts over the decoded records
    pub report: RankReport,

    /// Number of malformed entries that were dropped
    pub skipped: usize,
}

/// Decode an array of record entries under the given policy.
pub fn records_from_value(value: &Value, policy: MalformedPolicy) -> Result<Decoded> {
    let entries = value.as_array().ok_or_else(|| {
        MemrankError::InvalidArgument(format!(
            "records must be an array, got {}",
            decode::type_name(value)
        ))
    })?;

    let mut decoded = Decoded {
        records: Vec::with_capacity(entries.len()),
        skipped: 0,
    };

    for (index, entry) in entries.iter().enumerate() {
        match record_from_value(entry) {
            Ok(record) => decoded.records.push(record),
            Err(err) => match policy {
                MalformedPolicy::Strict => {
                    return Err(MemrankError::MalformedRecord {
                        index,
                        reason: err.reason,
                    });
                }
                MalformedPolicy::Skip => {
                    tracing::trace!(index, reason = %err, "Skipping malformed record");
                    decoded.skipped += 1;
                }
            },
        }
    }

    if decoded.skipped > 0 {
        tracing::debug!(
            skipped = decoded.skipped,
            total = entries.len(),
            "Dropped malformed records"
        );
    }

    Ok(decoded)
}

/// Convert ranked records back into host values.
pub fn records_to_value(records: &[Record]) -> Value {
    Value::Array(
        records
            .iter()
            .map(|record| {
                serde_json::json!({
                    "id": record.id,
                    "ts": record.timestamp,
                    "importance": record.importance,
                    "topic": record.topic,
                    "content": record.content,
                })
            })
            .collect(),
    )
}

/// Validating front-end for the ranker
///
/// Carries the malformed-record policy and the tie-break. The default
/// marshaller skips malformed records and keeps ties in input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marshaller {
    policy: MalformedPolicy,
    ranker: Ranker,
}

impl Marshaller {
    /// Create a marshaller with explicit settings
    pub fn new(policy: MalformedPolicy, tie_break: TieBreak) -> Self {
        Self {
            policy,
            ranker: Ranker::new(tie_break),
        }
    }

    /// Create a marshaller from the ranking section of the configuration
    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(config.malformed_records, config.tie_break)
    }

    /// The malformed-record policy in use
    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// The underlying ranker
    pub fn ranker(&self) -> Ranker {
        self.ranker
    }

    /// Decode an array of record entries under this marshaller's policy
    pub fn decode_records(&self, value: &Value) -> Result<Decoded> {
        records_from_value(value, self.policy)
    }

    /// Validate both arguments and rank, keeping the typed result.
    ///
    /// The query is validated before any record so that a bad query fails
    /// the call regardless of the records' contents.
    pub fn rank_values(&self, records: &Value, query: &Value) -> Result<Ranked> {
        if !records.is_array() {
            return Err(MemrankError::InvalidArgument(format!(
                "records must be an array, got {}",
                decode::type_name(records)
            )));
        }
        let query: Query = query_from_value(query)?;
        let decoded = self.decode_records(records)?;
        let (ranked, report) = self.ranker.rank_with_report(&decoded.records, &query);

        Ok(Ranked {
            records: ranked,
            report,
            skipped: decoded.skipped,
        })
    }

    /// Positional host call: `search(records, query)`.
    ///
    /// Fails with [`MemrankError::InvalidArgument`] when fewer than two
    /// arguments are given, the first is not an array, or the second is not
    /// an object. Extra arguments are ignored.
    pub fn search(&self, args: &[Value]) -> Result<Value> {
        let [records, query, ..] = args else {
            return Err(MemrankError::InvalidArgument(format!(
                "expected 2 arguments, got {}",
                args.len()
            )));
        };
        let ranked = self.rank_values(records, query)?;
        Ok(records_to_value(&ranked.records))
    }
}

/// `search(records, query)` with the default marshaller.
pub fn search(args: &[Value]) -> Result<Value> {
    Marshaller::default().search(args)
}
