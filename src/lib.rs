// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lower-bound binary search over a sorted integer sequence.
//!
//! Reads `N`, then `N` integers, then a target. Prints the zero-based index of
//! the target's first occurrence, or `-1` when it is absent.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  input.rs   │────▶│  locator.rs  │────▶│ search/         │
//! │ (parse_query│     │  (Locator,   │     │ (lower_bound,   │
//! │  read_query)│     │   run)       │     │  locate)        │
//! └─────────────┘     └──────────────┘     └─────────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                        │
//! │  (SortedSequence, InvariantError, contracts)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use locator::{Locator, Outcome};
//!
//! let mut out = Vec::new();
//! let outcome = Locator::default()
//!     .run("5\n1 3 5 7 9\n5\n".as_bytes(), &mut out)
//!     .unwrap();
//!
//! assert_eq!(outcome, Outcome::Found(2));
//! assert_eq!(out, b"2\n");
//! ```

pub mod error;
pub mod input;
mod locator;
pub mod search;
mod types;
pub mod verify;

pub use error::{Error, InputParseError, Item, Result};
pub use input::{parse_query, read_query};
pub use locator::{Locator, LocatorOptions};
pub use search::{locate, locate_sorted, lower_bound};
pub use types::{Outcome, Query, NOT_FOUND};
pub use verify::{InvariantError, SortedSequence};
