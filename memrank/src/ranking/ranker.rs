//! The ranker: filter, score, order and select
//!
//! Candidates are sorted by a total order (score descending, then the
//! configured tie-break, then input position), so the result never depends
//! on the sort algorithm's stability. When the limit is smaller than the
//! number of matches only the top `limit` candidates are fully sorted.

use super::scoring::{TieBreak, score};
use crate::models::{Query, Record};
use std::cmp::Ordering;

/// Counts describing one ranking call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankReport {
    /// Records handed to the ranker
    pub considered: usize,

    /// Records that passed the filter
    pub matched: usize,

    /// Records returned
    pub returned: usize,
}

/// Stateless top-K ranker
///
/// The only setting is the tie-break; a `Ranker` holds no other state and
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ranker {
    tie_break: TieBreak,
}

/// A record that passed the filter, with its score and input position
struct Candidate<'a> {
    score: i128,
    position: usize,
    record: &'a Record,
}

impl Ranker {
    /// Create a ranker with the given tie-break
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// The tie-break in use
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Rank `records` against `query`, returning at most `query.limit` clones
    pub fn rank(&self, records: &[Record], query: &Query) -> Vec<Record> {
        self.rank_with_report(records, query).0
    }

    /// Rank and also report how many records were considered, matched and returned
    pub fn rank_with_report(&self, records: &[Record], query: &Query) -> (Vec<Record>, RankReport) {
        let limit = query.effective_limit();

        let mut candidates: Vec<Candidate<'_>> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| query.matches(record))
            .map(|(position, record)| Candidate {
                score: score(record),
                position,
                record,
            })
            .collect();
        let matched = candidates.len();

        let take = limit.min(matched);
        if take == 0 {
            candidates.clear();
        } else if take < matched {
            // Partition so the top `take` candidates come first, then sort only those
            candidates.select_nth_unstable_by(take - 1, |a, b| self.compare(a, b));
            candidates.truncate(take);
        }
        candidates.sort_unstable_by(|a, b| self.compare(a, b));

        let ranked: Vec<Record> = candidates.into_iter().map(|c| c.record.clone()).collect();

        let report = RankReport {
            considered: records.len(),
            matched,
            returned: ranked.len(),
        };
        tracing::debug!(
            considered = report.considered,
            matched = report.matched,
            returned = report.returned,
            limit = query.limit,
            tie_break = %self.tie_break,
            "Ranked records"
        );

        (ranked, report)
    }

    /// Total order over candidates: best first
    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        let by_score = b.score.cmp(&a.score);
        let by_tie_break = match self.tie_break {
            TieBreak::InputOrder => Ordering::Equal,
            TieBreak::IdAscending => a.record.id.cmp(&b.record.id),
        };
        by_score
            .then(by_tie_break)
            .then(a.position.cmp(&b.position))
    }
}

/// Rank with the default tie-break (input order)
pub fn rank(records: &[Record], query: &Query) -> Vec<Record> {
    Ranker::default().rank(records, query)
}
