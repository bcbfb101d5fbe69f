//! Property tests for lower bound and first-occurrence search.
//!
//! Verifies that:
//! 1. `lower_bound` partitions a sorted slice into `< target` and `>= target`
//! 2. `locate` reports the smallest matching index, or `NotFound`
//! 3. Both agree with linear-scan oracles
//! 4. Unsorted input never panics and never reports a wrong element

use super::common::{present_target_strategy, sorted_strategy};
use super::oracles::{oracle_first_index, oracle_lower_bound};
use locator::{locate, locate_sorted, lower_bound, Outcome, SortedSequence};
use proptest::prelude::*;

// ============================================================================
// LOWER BOUND PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the lower bound is in range and partitions the slice.
    #[test]
    fn prop_lower_bound_partitions(seq in sorted_strategy(), target in -25i64..25) {
        let lb = lower_bound(&seq, &target);

        prop_assert!(lb <= seq.len());
        prop_assert!(seq[..lb].iter().all(|x| *x < target));
        prop_assert!(seq[lb..].iter().all(|x| *x >= target));
    }

    /// Differential test: binary search matches linear scan.
    #[test]
    fn diff_lower_bound(seq in sorted_strategy(), target in any::<i64>()) {
        prop_assert_eq!(lower_bound(&seq, &target), oracle_lower_bound(&seq, &target));
    }

    /// Differential test: hand-written loop matches the standard library.
    #[test]
    fn diff_lower_bound_partition_point(seq in sorted_strategy(), target in -25i64..25) {
        prop_assert_eq!(
            lower_bound(&seq, &target),
            seq.partition_point(|x| *x < target)
        );
    }
}

// ============================================================================
// LOCATE PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: a present target is found at its first occurrence.
    #[test]
    fn prop_present_target_found_first((seq, target) in present_target_strategy()) {
        let outcome = locate(&seq, &target);
        let index = outcome.index();

        prop_assert!(index.is_some(), "target {} present but not found", target);
        let i = index.unwrap();
        prop_assert_eq!(seq[i], target);
        prop_assert!(seq[..i].iter().all(|x| *x != target), "index {} is not the first", i);
    }

    /// Property: an absent target yields the sentinel.
    #[test]
    fn prop_absent_target_not_found(seq in sorted_strategy(), target in -25i64..25) {
        let seq: Vec<i64> = seq.into_iter().filter(|x| *x != target).collect();
        prop_assert_eq!(locate(&seq, &target), Outcome::NotFound);
        prop_assert_eq!(locate(&seq, &target).sentinel(), -1);
    }

    /// Differential test: printed result matches linear scan.
    #[test]
    fn diff_locate_sentinel(seq in sorted_strategy(), target in -25i64..25) {
        prop_assert_eq!(locate(&seq, &target).sentinel(), oracle_first_index(&seq, &target));
    }

    /// Property: the empty sequence never contains anything.
    #[test]
    fn prop_empty_sequence_not_found(target in any::<i64>()) {
        let empty: Vec<i64> = Vec::new();
        prop_assert_eq!(locate(&empty, &target), Outcome::NotFound);
    }

    /// Property: first and last elements are found at the ends.
    #[test]
    fn prop_endpoints(seq in sorted_strategy()) {
        prop_assume!(!seq.is_empty());
        let first = seq[0];
        let last = seq[seq.len() - 1];

        prop_assert_eq!(locate(&seq, &first), Outcome::Found(0));
        if seq.iter().filter(|x| **x == last).count() == 1 {
            prop_assert_eq!(locate(&seq, &last), Outcome::Found(seq.len() - 1));
        }
    }

    /// Property: validated and unvalidated paths agree on sorted input.
    #[test]
    fn prop_locate_sorted_agrees(seq in sorted_strategy(), target in -25i64..25) {
        let sorted = SortedSequence::new(&seq).unwrap();
        prop_assert_eq!(locate_sorted(&sorted, &target), locate(&seq, &target));
    }
}

// ============================================================================
// UNSORTED INPUT
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: unsorted input never panics; a `Found` still holds the target.
    #[test]
    fn prop_unsorted_input_is_safe(
        seq in prop::collection::vec(-20i64..20, 0..64),
        target in -25i64..25
    ) {
        prop_assert!(lower_bound(&seq, &target) <= seq.len());
        if let Outcome::Found(i) = locate(&seq, &target) {
            prop_assert_eq!(seq[i], target);
        }
    }

    /// Property: SortedSequence accepts exactly the sorted vectors.
    #[test]
    fn prop_sorted_sequence_validation(seq in prop::collection::vec(-20i64..20, 0..32)) {
        let sorted = seq.windows(2).all(|w| w[0] <= w[1]);
        prop_assert_eq!(SortedSequence::new(&seq).is_ok(), sorted);
    }
}
