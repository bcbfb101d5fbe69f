// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the input parser.
//!
//! Throws arbitrary text at the full pipeline. It must return `Ok` or a typed
//! error, never panic, and never print anything but one integer line.

#![no_main]

use libfuzzer_sys::fuzz_target;
use locator::{parse_query, Locator};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // INVARIANT 1: parse_query never panics
    let parsed = parse_query(text);

    // INVARIANT 2: run agrees with parse_query on success/failure
    let mut out = Vec::new();
    let run = Locator::default().run(text.as_bytes(), &mut out);
    assert_eq!(parsed.is_ok(), run.is_ok());

    if let (Ok(query), Ok(outcome)) = (parsed, run) {
        // INVARIANT 3: exactly one line holding the printed sentinel
        let line = String::from_utf8(out).expect("output is ASCII");
        assert_eq!(line, format!("{}\n", outcome.sentinel()));

        // INVARIANT 4: a found index holds the target
        if let Some(i) = outcome.index() {
            assert_eq!(query.sequence[i], query.target);
        }
    } else {
        assert!(out.is_empty(), "nothing is printed on error");
    }
});
