//! Sorting utilities for median computation.
//!
//! ## Purpose
//!
//! This module provides a non-mutating sorted-copy helper. The median is
//! defined over a sorted view of the data, but callers must never observe
//! their input being reordered, so sorting always happens on a copy.
//!
//! ## Design notes
//!
//! * Integers have a total order, so `sort_unstable` is sufficient;
//!   stability is irrelevant for scalar values.
//! * The caller's slice is never modified.
//!
//! ## Visibility
//!
//! Internal to the engine; not re-exported through the prelude.

use num_traits::PrimInt;

/// Return an independently owned, ascending-sorted copy of `data`.
pub fn sorted_copy<T: PrimInt>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    sorted
}
