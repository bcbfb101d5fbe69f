// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search.
//!
//! Debug-mode assertions of the post-conditions `lower_bound` and `locate`
//! promise. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. State the definition of lower bound directly, with no binary search
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function     | Property                                             |
//! |-----------------------|------------------------------------------------------|
//! | `check_sorted`        | `seq[i - 1] <= seq[i]` for all `i`                   |
//! | `check_lower_bound`   | `seq[..lb] < target <= seq[lb..]`, `lb <= len`       |
//! | `check_outcome`       | `Found(i)` ⇒ `seq[i] == target`, no earlier match     |
//!
//! The partition checks in `check_lower_bound` only hold for sorted input.
//! Callers that search unverified data skip them; see
//! [`Locator`](crate::Locator).

use crate::types::Outcome;

/// Check that a sequence is sorted in non-decreasing order.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair that is out of order.
#[inline]
pub fn check_sorted<T: Ord>(seq: &[T]) {
    // INVARIANT: sorted input
    debug_assert!(
        crate::verify::is_sorted(seq),
        "Contract violation: Sorted - sequence descends at index {:?}",
        crate::verify::first_descent(seq)
    );
}

/// Check that `lb` is the lower bound of `target` in a sorted `seq`.
///
/// # Panics (debug builds only)
/// Panics if `lb > seq.len()`, if an element before `lb` is `>= target`,
/// or if an element at or after `lb` is `< target`.
#[inline]
pub fn check_lower_bound<T: Ord>(seq: &[T], target: &T, lb: usize) {
    // INVARIANT: lower bound is in [0, len]
    debug_assert!(
        lb <= seq.len(),
        "Contract violation: LowerBound.InRange - {} > len {}",
        lb,
        seq.len()
    );

    if cfg!(debug_assertions) && lb <= seq.len() {
        // INVARIANT: everything left of the bound is strictly less
        debug_assert!(
            seq[..lb].iter().all(|x| x < target),
            "Contract violation: LowerBound.LeftLess - element before {} is >= target",
            lb
        );
        // INVARIANT: everything from the bound on is not less
        debug_assert!(
            seq[lb..].iter().all(|x| x >= target),
            "Contract violation: LowerBound.RightGe - element at or after {} is < target",
            lb
        );
    }
}

/// Check that an outcome reports the first occurrence, or none at all.
///
/// Unlike [`check_lower_bound`] this holds for any input, sorted or not:
/// a `Found(i)` always points at an equal element.
///
/// # Panics (debug builds only)
/// Panics if `Found(i)` is out of range or `seq[i] != target`.
#[inline]
pub fn check_outcome<T: Ord>(seq: &[T], target: &T, outcome: Outcome) {
    if let Outcome::Found(index) = outcome {
        // INVARIANT: found index points at the target
        debug_assert!(
            seq.get(index) == Some(target),
            "Contract violation: Outcome.Found - index {} does not hold the target",
            index
        );
    }
}

/// Check that an outcome on sorted input is exactly the first occurrence.
///
/// # Panics (debug builds only)
/// Panics if the outcome disagrees with a linear scan.
#[inline]
pub fn check_first_occurrence<T: Ord>(seq: &[T], target: &T, outcome: Outcome) {
    if cfg!(debug_assertions) {
        let expected: Outcome = seq.iter().position(|x| x == target).into();
        // INVARIANT: first occurrence on sorted input
        debug_assert_eq!(
            outcome, expected,
            "Contract violation: Outcome.FirstOccurrence"
        );
    }
}
