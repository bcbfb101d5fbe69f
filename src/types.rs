// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: the parsed query and the search outcome.
//!
//! Everything the locator produces flows through [`Outcome`]. The printed form
//! is a single decimal: the zero-based index when found, `-1` otherwise.

use std::fmt;

/// Sentinel printed when the target is absent. Never a valid index.
pub const NOT_FOUND: i64 = -1;

/// A fully parsed query: the (assumed sorted) sequence and the value to find.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub sequence: Vec<i64>,
    pub target: i64,
}

impl Query {
    pub fn new(sequence: Vec<i64>, target: i64) -> Self {
        Self { sequence, target }
    }

    /// Number of elements declared and read.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Result of locating a target in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Zero-based index of the first occurrence.
    Found(usize),
    /// Target does not occur in the sequence.
    NotFound,
}

impl Outcome {
    /// The index, if found.
    pub fn index(self) -> Option<usize> {
        match self {
            Outcome::Found(index) => Some(index),
            Outcome::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    /// The integer the CLI prints: the index, or [`NOT_FOUND`].
    ///
    /// Slices never exceed `isize::MAX` elements, so the cast is lossless.
    pub fn sentinel(self) -> i64 {
        match self {
            Outcome::Found(index) => index as i64,
            Outcome::NotFound => NOT_FOUND,
        }
    }
}

impl From<Option<usize>> for Outcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Outcome::NotFound, Outcome::Found)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sentinel())
    }
}
