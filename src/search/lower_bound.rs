// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lower-bound binary search.
//!
//! The classic halving loop over a half-open range `[lo, hi)`:
//!
//! ```text
//!   seq:   [ 2 | 4 | 4 | 4 | 7 ]     target = 4
//!            lo              hi      mid = 2, seq[2] = 4 >= 4 → hi = 2
//!            lo      hi              mid = 1, seq[1] = 4 >= 4 → hi = 1
//!            lo  hi                  mid = 0, seq[0] = 2 <  4 → lo = 1
//!                lohi                lo == hi = 1 → lower bound
//! ```
//!
//! The loop is the same one proved in `kani-proofs/`. `mid = lo + (hi - lo) / 2`
//! cannot overflow.

use crate::types::Outcome;
use crate::verify::{contracts, SortedSequence};

/// Index of the first element not less than `target`, in `[0, seq.len()]`.
///
/// On sorted input every element before the result is `< target` and every
/// element from the result on is `>= target`. On unsorted input the result is
/// still in range; it just doesn't mean anything.
///
/// O(log n) comparisons.
pub fn lower_bound<T: Ord>(seq: &[T], target: &T) -> usize {
    let mut lo = 0;
    let mut hi = seq.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        // mid < hi <= seq.len()
        if seq[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
        log::trace!("lower_bound: mid={} → [{}, {})", mid, lo, hi);
    }

    lo
}

/// First occurrence of `target` in a sorted `seq`.
///
/// Runs [`lower_bound`] and accepts the position only if it is in range and
/// holds an equal element. Among duplicates this is the smallest index.
///
/// ```
/// use locator::{locate, Outcome};
///
/// assert_eq!(locate(&[1, 3, 5, 7, 9], &5), Outcome::Found(2));
/// assert_eq!(locate(&[1, 3, 5, 7, 9], &4), Outcome::NotFound);
/// assert_eq!(locate(&[2, 4, 4, 4, 7], &4), Outcome::Found(1));
/// ```
pub fn locate<T: Ord>(seq: &[T], target: &T) -> Outcome {
    let outcome = outcome_at(seq, target, lower_bound(seq, target));
    contracts::check_outcome(seq, target, outcome);
    outcome
}

/// [`locate`] on a sequence already proven sorted.
///
/// Same result, plus the full lower-bound contracts in debug builds.
pub fn locate_sorted<T: Ord>(seq: &SortedSequence<'_, T>, target: &T) -> Outcome {
    let items = seq.as_slice();
    contracts::check_sorted(items);

    let lb = lower_bound(items, target);
    contracts::check_lower_bound(items, target, lb);

    let outcome = outcome_at(items, target, lb);
    contracts::check_outcome(items, target, outcome);
    contracts::check_first_occurrence(items, target, outcome);
    outcome
}

fn outcome_at<T: Ord>(seq: &[T], target: &T, lb: usize) -> Outcome {
    match seq.get(lb) {
        Some(found) if found == target => Outcome::Found(lb),
        _ => Outcome::NotFound,
    }
}
