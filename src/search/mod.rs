// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms.
//!
//! One strategy: lower bound, then an equality check at that position.

mod lower_bound;

pub use lower_bound::*;
