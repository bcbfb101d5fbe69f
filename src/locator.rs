// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The end-to-end pipeline: read, parse, search, print.
//!
//! ```text
//! ┌────────┐   ┌─────────────┐   ┌──────────────────┐   ┌────────┐   ┌─────────┐
//! │ reader │──▶│ read_query  │──▶│ SortedSequence   │──▶│ locate │──▶│ writer  │
//! │        │   │ (input.rs)  │   │ (--strict only)  │   │        │   │ "2\n"   │
//! └────────┘   └─────────────┘   └──────────────────┘   └────────┘   └─────────┘
//! ```
//!
//! Generic over `Read`/`Write` so the binary passes stdin/stdout and tests pass
//! byte slices.

use std::io::{Read, Write};

use crate::error::Result;
use crate::input::read_query;
use crate::search::{locate, locate_sorted};
use crate::types::{Outcome, Query};
use crate::verify::SortedSequence;

/// Knobs for a single run. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocatorOptions {
    /// Reject unsorted sequences instead of searching them.
    pub strict: bool,
}

/// Reads one query and writes one answer line.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    options: LocatorOptions,
}

impl Locator {
    pub fn new(options: LocatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> LocatorOptions {
        self.options
    }

    /// Answer an already parsed query.
    ///
    /// Fails only under `strict`, when the sequence is not sorted.
    pub fn answer(&self, query: &Query) -> Result<Outcome> {
        let outcome = if self.options.strict {
            let sorted = SortedSequence::new(query.sequence.as_slice())?;
            locate_sorted(&sorted, &query.target)
        } else {
            locate(query.sequence.as_slice(), &query.target)
        };
        Ok(outcome)
    }

    /// Read a query from `input`, write the answer line to `output`.
    ///
    /// Nothing is written when reading, parsing or validation fails.
    pub fn run<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<Outcome> {
        let query = read_query(input)?;
        log::info!(
            "searching {} element(s) for target {}",
            query.len(),
            query.target
        );

        let outcome = self.answer(&query)?;
        log::info!("result: {:?}", outcome);

        writeln!(output, "{}", outcome)?;
        output.flush()?;
        Ok(outcome)
    }
}
