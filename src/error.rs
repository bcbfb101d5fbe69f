// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two layers. [`InputParseError`] says exactly which token of the
//! `N, elements..., target` grammar was missing or malformed. [`Error`] is what
//! [`Locator::run`](crate::Locator::run) returns: a parse failure, an I/O
//! failure while reading, or a violated sortedness invariant under `--strict`.

use std::fmt;

use thiserror::Error;

use crate::verify::InvariantError;

/// Which item of the input grammar a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    /// The leading element count `N`.
    Count,
    /// Sequence element at this zero-based index.
    Element(usize),
    /// The trailing target value.
    Target,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Count => write!(f, "element count"),
            Item::Element(index) => write!(f, "sequence element at index {}", index),
            Item::Target => write!(f, "target"),
        }
    }
}

/// Input does not match the `N, N integers, target` grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Input ended before this item was read.
    #[error("unexpected end of input: missing {item}")]
    MissingToken { item: Item },

    /// Token is not a decimal integer that fits in an `i64`.
    #[error("invalid {item} at token {position}: '{token}' is not an integer")]
    InvalidInteger {
        item: Item,
        /// 1-based position of the token in the input.
        position: usize,
        token: String,
    },

    /// The element count was negative.
    #[error("element count must be non-negative, got {count}")]
    NegativeCount { count: i64 },
}

/// Anything that can stop the locator from producing an answer.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] InputParseError),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input sequence is not sorted: {0}")]
    Unsorted(#[from] InvariantError),
}

pub type Result<T> = std::result::Result<T, Error>;
