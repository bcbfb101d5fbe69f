// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! Binary search is only meaningful on a sorted slice. [`SortedSequence`]
//! checks that once, at construction, and every search through it can rely on
//! the ordering from then on.
//!
//! | Type             | What's Guaranteed                         |
//! |------------------|-------------------------------------------|
//! | `SortedSequence` | `seq[i] <= seq[i + 1]` for every `i`      |
//!
//! # Example
//!
//! ```
//! use locator::verify::SortedSequence;
//!
//! let values = [1, 3, 3, 8];
//! let sorted = SortedSequence::new(&values).unwrap();
//! assert_eq!(sorted.lower_bound(&3), 1);
//!
//! assert!(SortedSequence::new(&[2, 1]).is_err());
//! ```

use std::fmt;

use thiserror::Error;

/// Error type for invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `seq[position - 1] > seq[position]`.
    #[error("element at index {position} ({current}) is less than its predecessor ({previous})")]
    Descending {
        position: usize,
        previous: String,
        current: String,
    },
}

/// A borrowed slice in non-decreasing order.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `seq[i] <= seq[j]`
#[derive(Debug, Clone, Copy)]
pub struct SortedSequence<'a, T> {
    items: &'a [T],
}

impl<'a, T: Ord + fmt::Debug> SortedSequence<'a, T> {
    /// Validate `items` and wrap it.
    ///
    /// Returns `Err` at the first adjacent pair that is out of order.
    pub fn new(items: &'a [T]) -> Result<Self, InvariantError> {
        if let Some(position) = first_descent(items) {
            return Err(InvariantError::Descending {
                position,
                previous: format!("{:?}", items[position - 1]),
                current: format!("{:?}", items[position]),
            });
        }
        Ok(Self { items })
    }
}

impl<'a, T: Ord> SortedSequence<'a, T> {
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// Index of the first element `>= target`, in `[0, len()]`.
    ///
    /// All entries before the returned index are `< target`; all entries at
    /// and after it are `>= target`. Exact here, because sortedness is
    /// guaranteed.
    pub fn lower_bound(&self, target: &T) -> usize {
        crate::search::lower_bound(self.items, target)
    }
}

/// Position `i` of the first pair with `items[i - 1] > items[i]`, if any.
pub fn first_descent<T: Ord>(items: &[T]) -> Option<usize> {
    items
        .windows(2)
        .position(|pair| pair[0] > pair[1])
        .map(|i| i + 1)
}

/// Whether `items` is in non-decreasing order.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    first_descent(items).is_none()
}
