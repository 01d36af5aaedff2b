//! Property tests for the ranker
//!
//! These tests check the ranking contract over randomly generated inputs:
//! - Every returned record passes the filter
//! - Scores never increase along the output
//! - Output size is bounded by the limit and by the number of matches
//! - Every returned record is an unmodified input record, used at most once
//! - Equal inputs always give identical outputs, ties included

use memrank::models::{Query, Record};
use memrank::ranking::{Ranker, TieBreak, score};
use proptest::prelude::*;
use std::collections::HashMap;

const TOPICS: &[&str] = &["", "a", "b", "work", "home"];

fn arb_record() -> impl Strategy<Value = Record> {
    (
        -50i64..50,
        prop_oneof![-1_000_000i64..1_000_000, any::<i64>()],
        prop_oneof![-5i32..10, any::<i32>()],
        prop::sample::select(TOPICS),
        "[a-z ]{0,12}",
    )
        .prop_map(|(id, ts, importance, topic, content)| {
            Record::new(id, ts, importance, topic, content)
        })
}

fn arb_query() -> impl Strategy<Value = Query> {
    (
        prop::option::of(prop::sample::select(TOPICS)),
        -6i32..11,
        -3i64..40,
    )
        .prop_map(|(topic, importance_min, limit)| Query {
            topic_filter: topic.map(str::to_string),
            importance_min,
            limit,
        })
}

fn arb_tie_break() -> impl Strategy<Value = TieBreak> {
    prop_oneof![Just(TieBreak::InputOrder), Just(TieBreak::IdAscending)]
}

fn passes(query: &Query, record: &Record) -> bool {
    let topic_ok = match query.topic_filter.as_deref() {
        None | Some("") => true,
        Some(topic) => record.topic == topic,
    };
    topic_ok && record.importance >= query.importance_min
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_passes_filter(
        records in prop::collection::vec(arb_record(), 0..60),
        query in arb_query(),
        tie_break in arb_tie_break(),
    ) {
        let ranked = Ranker::new(tie_break).rank(&records, &query);
        for record in &ranked {
            prop_assert!(passes(&query, record));
        }
    }

    #[test]
    fn prop_scores_are_non_increasing(
        records in prop::collection::vec(arb_record(), 0..60),
        query in arb_query(),
        tie_break in arb_tie_break(),
    ) {
        let ranked = Ranker::new(tie_break).rank(&records, &query);
        for pair in ranked.windows(2) {
            prop_assert!(score(&pair[0]) >= score(&pair[1]));
        }
    }

    #[test]
    fn prop_size_is_bounded(
        records in prop::collection::vec(arb_record(), 0..60),
        query in arb_query(),
    ) {
        let ranked = Ranker::default().rank(&records, &query);
        let matched = records.iter().filter(|r| passes(&query, r)).count();
        let limit = usize::try_from(query.limit.max(0)).unwrap();

        prop_assert!(ranked.len() <= limit);
        prop_assert!(ranked.len() <= matched);
        prop_assert_eq!(ranked.len(), limit.min(matched));
    }

    #[test]
    fn prop_no_fabrication(
        records in prop::collection::vec(arb_record(), 0..60),
        query in arb_query(),
        tie_break in arb_tie_break(),
    ) {
        let ranked = Ranker::new(tie_break).rank(&records, &query);

        let mut available: HashMap<&Record, usize> = HashMap::new();
        for record in &records {
            *available.entry(record).or_default() += 1;
        }
        for record in &ranked {
            let count = available.get_mut(record);
            prop_assert!(count.is_some(), "record not in input: {:?}", record);
            let count = count.unwrap();
            prop_assert!(*count > 0, "record returned more often than supplied: {:?}", record);
            *count -= 1;
        }
    }

    #[test]
    fn prop_deterministic(
        records in prop::collection::vec(arb_record(), 0..60),
        query in arb_query(),
        tie_break in arb_tie_break(),
    ) {
        let ranker = Ranker::new(tie_break);
        let first = ranker.rank(&records, &query);
        let second = ranker.rank(&records, &query);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_matches_full_stable_sort(
        records in prop::collection::vec(arb_record(), 0..60),
        query in arb_query(),
    ) {
        // Reference: filter, stable sort by score descending, truncate
        let mut expected: Vec<Record> = records.iter().filter(|r| passes(&query, r)).cloned().collect();
        expected.sort_by(|a, b| score(b).cmp(&score(a)));
        expected.truncate(usize::try_from(query.limit.max(0)).unwrap());

        prop_assert_eq!(Ranker::new(TieBreak::InputOrder).rank(&records, &query), expected);
    }

    #[test]
    fn prop_id_tie_break_orders_equal_scores(
        records in prop::collection::vec(arb_record(), 0..60),
        query in arb_query(),
    ) {
        let ranked = Ranker::new(TieBreak::IdAscending).rank(&records, &query);
        for pair in ranked.windows(2) {
            if score(&pair[0]) == score(&pair[1]) {
                prop_assert!(pair[0].id <= pair[1].id);
            }
        }
    }
}
