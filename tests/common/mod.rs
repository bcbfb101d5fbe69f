//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

/// The worked examples: (input text, expected output line).
pub const SCENARIOS: &[(&str, &str)] = &[
    ("5\n1 3 5 7 9\n5\n", "2"),
    ("5\n1 3 5 7 9\n4\n", "-1"),
    ("0\n\n10\n", "-1"),
    ("5\n2 4 4 4 7\n4\n", "1"),
    ("5\n1 3 5 7 9\n1\n", "0"),
    ("5\n1 3 5 7 9\n9\n", "4"),
];

/// Render a query in the canonical three-line input format.
pub fn query_text(sequence: &[i64], target: i64) -> String {
    let elements: Vec<String> = sequence.iter().map(i64::to_string).collect();
    format!("{}\n{}\n{}\n", sequence.len(), elements.join(" "), target)
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted sequences over a narrow value range, so duplicates and hits are common.
pub fn dense_sorted_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..64).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Sorted sequences over the full `i64` range.
pub fn wide_sorted_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..64).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// 80% dense, 20% wide.
pub fn sorted_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop_oneof![
        4 => dense_sorted_strategy(),
        1 => wide_sorted_strategy(),
    ]
}

/// A sorted sequence paired with a target drawn from it.
pub fn present_target_strategy() -> impl Strategy<Value = (Vec<i64>, i64)> {
    dense_sorted_strategy()
        .prop_filter("needs at least one element", |v| !v.is_empty())
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..len)
        })
        .prop_map(|(v, i)| {
            let target = v[i];
            (v, target)
        })
}
