// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the locator search loop.
//!
//! This standalone crate extracts the lower-bound loop and proves it
//! correct for every slice up to `MAX_LEN` elements using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no out-of-bounds index, no overflow in `mid`
//! 2. **Bounds**: result is in `[0, len]`
//! 3. **Partition**: on sorted input, `seq[..lb] < target <= seq[lb..]`
//! 4. **First occurrence**: `locate` returns the smallest matching index

/// Largest slice the proofs enumerate. Loop unwinding grows with this.
pub const MAX_LEN: usize = 8;

// ============================================================================
// SEARCH (copied from src/search/lower_bound.rs)
// ============================================================================

/// Index of the first element not less than `target`.
pub fn lower_bound(seq: &[i64], target: i64) -> usize {
    let mut lo = 0;
    let mut hi = seq.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if seq[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// First occurrence of `target`, or `-1`.
pub fn locate(seq: &[i64], target: i64) -> i64 {
    let lb = lower_bound(seq, target);
    if lb < seq.len() && seq[lb] == target {
        lb as i64
    } else {
        -1
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic slice of length `<= MAX_LEN`.
    fn any_slice(buf: &mut [i64; MAX_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for slot in buf.iter_mut() {
            *slot = kani::any();
        }
        len
    }

    /// Verify lower_bound never panics and stays in range, sorted or not.
    #[kani::proof]
    #[kani::unwind(9)] // MAX_LEN + 1 for the buffer loops
    fn verify_lower_bound_no_panic() {
        let mut buf = [0i64; MAX_LEN];
        let len = any_slice(&mut buf);
        let target: i64 = kani::any();

        let lb = lower_bound(&buf[..len], target);

        kani::assert(lb <= len, "lower_bound must be in [0, len]");
    }

    /// Verify the partition property on sorted input.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_lower_bound_partitions() {
        let mut buf = [0i64; MAX_LEN];
        let len = any_slice(&mut buf);
        let seq = &buf[..len];
        for i in 1..len {
            kani::assume(seq[i - 1] <= seq[i]);
        }
        let target: i64 = kani::any();

        let lb = lower_bound(seq, target);

        for i in 0..len {
            if i < lb {
                kani::assert(seq[i] < target, "elements before lb must be < target");
            } else {
                kani::assert(seq[i] >= target, "elements from lb must be >= target");
            }
        }
    }

    /// Verify locate returns the first occurrence on sorted input.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_locate_first_occurrence() {
        let mut buf = [0i64; MAX_LEN];
        let len = any_slice(&mut buf);
        let seq = &buf[..len];
        for i in 1..len {
            kani::assume(seq[i - 1] <= seq[i]);
        }
        let target: i64 = kani::any();

        let result = locate(seq, target);

        if result >= 0 {
            let i = result as usize;
            kani::assert(i < len, "found index must be in range");
            kani::assert(seq[i] == target, "found index must hold the target");
            kani::assert(
                i == 0 || seq[i - 1] != target,
                "found index must be the first occurrence",
            );
        } else {
            kani::assert(result == -1, "absence must be reported as -1");
            for i in 0..len {
                kani::assert(seq[i] != target, "-1 only when the target is absent");
            }
        }
    }

    /// Verify the empty slice always reports absence.
    #[kani::proof]
    fn verify_empty_not_found() {
        let target: i64 = kani::any();
        kani::assert(locate(&[], target) == -1, "empty slice must yield -1");
    }
}
