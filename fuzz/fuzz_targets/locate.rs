// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lower bound and first-occurrence search.
//!
//! The fuzzer supplies an arbitrary vector and target; the target sorts a copy
//! and checks the search against a linear scan.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use locator::{locate, lower_bound, Outcome};

#[derive(Arbitrary, Debug)]
struct Input {
    values: Vec<i64>,
    target: i64,
}

fuzz_target!(|input: Input| {
    let Input { mut values, target } = input;

    // INVARIANT 1: unsorted input never panics and stays in range
    assert!(lower_bound(&values, &target) <= values.len());
    if let Outcome::Found(i) = locate(&values, &target) {
        assert_eq!(values[i], target);
    }

    // INVARIANT 2: sorted input matches the linear scan exactly
    values.sort_unstable();
    let expected_lb = values.iter().position(|x| *x >= target).unwrap_or(values.len());
    assert_eq!(lower_bound(&values, &target), expected_lb);

    let expected: Outcome = values.iter().position(|x| *x == target).into();
    assert_eq!(locate(&values, &target), expected);
});
