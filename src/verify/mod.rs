// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrapper** (`SortedSequence`) that checks ordering once at
//!    construction. `--strict` runs input through it before searching.
//!
//! 2. **Runtime contracts** that panic in debug builds when a search result
//!    breaks the definition of lower bound. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
