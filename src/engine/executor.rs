//! Descriptive statistics computations.
//!
//! ## Purpose
//!
//! This module implements the three statistical measures — arithmetic mean,
//! median, and mode — together with [`summarize`], which combines them into
//! a single [`Summary`], and [`report`], which packages a dataset with its
//! summary for textual rendering.
//!
//! ## Design notes
//!
//! * Every function is a pure function of its input slice; inputs are never
//!   mutated (the median sorts an internal copy).
//! * Empty input is a defined edge case, not an error: `mean` and `median`
//!   return `0.0` and `mode` returns no values with frequency 0.
//! * Generic over `PrimInt` so every primitive integer type is supported;
//!   results are `f64`.
//! * The mean accumulates in `f64`, exact for values of magnitude <= 2^53.
//! * Mode counting uses a `BTreeMap`, so tied modes come out ascending
//!   without a separate sort.
//!
//! ## Key concepts
//!
//! ### Multiple modes
//!
//! A dataset may have several values sharing the maximum frequency. All of
//! them are returned, sorted ascending — a valid, expected outcome rather
//! than an error.
//!
//! ### Consistency of `summarize`
//!
//! [`summarize`] computes all measures against the same slice, so a
//! [`Summary`] is always internally consistent. [`report`] performs no
//! computation of its own; it delegates to [`summarize`].
//!
//! ## Invariants
//!
//! * `mean(data) == sum(data) / data.len()` for non-empty `data`.
//! * `median` is invariant under permutation of its input.
//! * Every value in `mode(data).values` has exactly the returned frequency,
//!   and no value with lower multiplicity appears.
//!
//! ## Non-goals
//!
//! * No streaming or incremental variants.
//! * No measures beyond mean, median, and mode.
//!
//! ## Visibility
//!
//! These free functions are the "explicitly supplied data" half of the
//! public API; [`StatisticsEngine`](crate::api::StatisticsEngine) methods
//! delegate to them for owned data.

use std::collections::BTreeMap;

use num_traits::PrimInt;

use crate::engine::output::{Mode, Report, Summary};
use crate::primitives::sorting::sorted_copy;

// ============================================================================
// Core Measures
// ============================================================================

/// Compute the arithmetic mean of `data`.
///
/// Returns `0.0` for an empty slice; never divides by zero.
pub fn mean<T: PrimInt>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let sum: f64 = data.iter().map(|v| v.to_f64().unwrap_or(f64::NAN)).sum();
    sum / data.len() as f64
}

/// Compute the median of `data` without mutating it.
///
/// Returns `0.0` for an empty slice. For an odd count the middle element of
/// the sorted copy is returned; for an even count, the average of the two
/// central elements.
pub fn median<T: PrimInt>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let sorted = sorted_copy(data);
    let n = sorted.len();
    let mid = n / 2;

    if n % 2 == 0 {
        // Even length: average of the two central elements
        let lower = sorted[mid - 1].to_f64().unwrap_or(f64::NAN);
        let upper = sorted[mid].to_f64().unwrap_or(f64::NAN);
        (lower + upper) / 2.0
    } else {
        // Odd length: middle element
        sorted[mid].to_f64().unwrap_or(f64::NAN)
    }
}

/// Compute the mode(s) of `data`.
///
/// Returns every value attaining the maximum frequency, sorted ascending,
/// together with that frequency. An empty slice yields no values with
/// frequency 0.
pub fn mode<T: PrimInt>(data: &[T]) -> Mode<T> {
    if data.is_empty() {
        return Mode {
            values: Vec::new(),
            frequency: 0,
        };
    }

    // Count multiplicities; BTreeMap keeps keys ascending
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for &value in data {
        *counts.entry(value).or_insert(0) += 1;
    }

    let frequency = counts.values().copied().max().unwrap_or(0);
    let values = counts
        .iter()
        .filter(|&(_, &count)| count == frequency)
        .map(|(&value, _)| value)
        .collect();

    Mode { values, frequency }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Compute all statistics for `data` in one call.
///
/// All measures are computed against the same slice, so the returned
/// [`Summary`] is internally consistent.
pub fn summarize<T: PrimInt>(data: &[T]) -> Summary<T> {
    Summary {
        mean: mean(data),
        median: median(data),
        mode: mode(data),
        sample_size: data.len(),
    }
}

/// Build a renderable [`Report`] for `data`.
///
/// Pure formatting layered on [`summarize`]; the report holds an
/// independent copy of the dataset for the `Array:` line.
pub fn report<T: PrimInt>(data: &[T]) -> Report<T> {
    Report {
        data: data.to_vec(),
        summary: summarize(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_single_mode_dataset() {
        // 1+2+3+4+5+5+5 = 25, n = 7
        let data = vec![1, 2, 3, 4, 5, 5, 5];
        assert!((mean(&data) - 25.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean::<i64>(&[]), 0.0);
    }

    #[test]
    fn mean_of_singleton() {
        assert_eq!(mean(&[42]), 42.0);
    }

    #[test]
    fn mean_handles_negative_values() {
        assert_eq!(mean(&[-3, -1, 1, 3]), 0.0);
        assert_eq!(mean(&[-5, -5]), -5.0);
    }

    #[test]
    fn median_odd_count_is_middle_element() {
        let data = vec![1, 2, 3, 4, 5, 5, 5];
        assert_eq!(median(&data), 4.0);
    }

    #[test]
    fn median_even_count_averages_central_pair() {
        assert_eq!(median(&[1, 2, 3, 4]), 2.5);
        assert_eq!(median(&[1, 1, 2, 2, 3, 3]), 2.0);
    }

    #[test]
    fn median_is_permutation_invariant() {
        let data = vec![9, 1, 7, 3, 5];
        let shuffled = vec![5, 9, 3, 1, 7];
        assert_eq!(median(&data), median(&shuffled));
        assert_eq!(median(&data), 5.0);
    }

    #[test]
    fn median_does_not_mutate_input() {
        let data = vec![3, 1, 2];
        let _ = median(&data);
        assert_eq!(data, vec![3, 1, 2]);
    }

    #[test]
    fn median_of_empty_is_zero() {
        assert_eq!(median::<i64>(&[]), 0.0);
    }

    #[test]
    fn mode_single() {
        let result = mode(&[1, 2, 3, 4, 5, 5, 5]);
        assert_eq!(result.values, vec![5]);
        assert_eq!(result.frequency, 3);
        assert!(!result.is_multimodal());
    }

    #[test]
    fn mode_ties_return_all_values_ascending() {
        let result = mode(&[3, 1, 2, 3, 2, 1]);
        assert_eq!(result.values, vec![1, 2, 3]);
        assert_eq!(result.frequency, 2);
        assert!(result.is_multimodal());
    }

    #[test]
    fn mode_excludes_lower_multiplicities() {
        // 4 appears three times; 1 and 2 appear once, 3 twice
        let result = mode(&[4, 1, 4, 3, 2, 3, 4]);
        assert_eq!(result.values, vec![4]);
        assert_eq!(result.frequency, 3);
    }

    #[test]
    fn mode_of_empty_is_empty_with_zero_frequency() {
        let result = mode::<i64>(&[]);
        assert!(result.values.is_empty());
        assert_eq!(result.frequency, 0);
    }

    #[test]
    fn summarize_combines_consistent_measures() {
        let data = vec![1, 1, 2, 2, 3, 3];
        let summary = summarize(&data);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.mode.values, vec![1, 2, 3]);
        assert_eq!(summary.mode.frequency, 2);
        assert_eq!(summary.sample_size, 6);
    }

    #[test]
    fn summarize_empty_holds_defaults() {
        let summary = summarize::<i64>(&[]);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
        assert!(summary.mode.values.is_empty());
        assert_eq!(summary.mode.frequency, 0);
        assert_eq!(summary.sample_size, 0);
        assert!(summary.is_empty());
    }

    #[test]
    fn report_copies_data_and_matches_summarize() {
        let data = vec![42];
        let rep = report(&data);
        assert_eq!(rep.data, data);
        assert_eq!(rep.summary, summarize(&data));
    }
}
