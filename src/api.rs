//! High-level API for descriptive statistics.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point:
//! [`StatisticsEngine`], a stateful wrapper that owns a dataset and computes
//! mean, median, and mode on demand.
//!
//! ## Design notes
//!
//! * **Owned data**: The engine exclusively owns its dataset. `set_data`
//!   copies in, `data` copies out, so caller-held sequences and engine
//!   state never alias.
//! * **Delegation**: Every measure delegates to the free functions in
//!   [`executor`](crate::engine::executor); computing over explicitly
//!   supplied data is just calling those functions directly.
//! * **Infallible queries**: Once a dataset is owned, every computation
//!   succeeds; empty datasets degrade to defined defaults.
//!
//! ## Key concepts
//!
//! ### Owned vs. supplied data
//!
//! The engine methods are the "no-argument" overloads operating on the
//! owned dataset. The free functions (`mean`, `median`, `mode`,
//! `summarize`, `report`) are the "supplied data" overloads. Both halves
//! share one implementation.
//!
//! ### Copy-in / copy-out
//!
//! `set_data` stores an independent copy of the input, and `data` returns
//! an independent copy of the stored dataset. Mutating either side after
//! the call never affects the other.
//!
//! ## Visibility
//!
//! This is the primary public API. Types re-exported here are considered
//! stable.

use std::result;

use num_traits::PrimInt;

use crate::engine::executor;
use crate::engine::output::{Mode, Report, Summary};
use crate::input::DatasetInput;
use crate::primitives::errors::StatsError;

/// Result type alias for statistics operations.
pub type Result<T> = result::Result<T, StatsError>;

// ============================================================================
// Statistics Engine
// ============================================================================

/// Stateful descriptive-statistics engine owning an integer dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsEngine<T = i64> {
    /// Owned dataset, in insertion order.
    data: Vec<T>,
}

impl<T: PrimInt> Default for StatisticsEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> StatisticsEngine<T> {
    /// Create an engine with an empty dataset.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an engine owning a copy of the supplied dataset.
    pub fn with_data<D>(data: &D) -> Result<Self>
    where
        D: DatasetInput<T> + ?Sized,
    {
        let mut engine = Self::new();
        engine.set_data(data)?;
        Ok(engine)
    }

    // ========================================================================
    // Dataset Management
    // ========================================================================

    /// Replace the owned dataset with an independent copy of `data`.
    ///
    /// If the input fails conversion, the previously owned dataset is left
    /// untouched.
    pub fn set_data<D>(&mut self, data: &D) -> Result<()>
    where
        D: DatasetInput<T> + ?Sized,
    {
        let slice = data.as_dataset_slice()?;
        self.data = slice.to_vec();
        Ok(())
    }

    /// Return an independent copy of the owned dataset.
    ///
    /// Mutating the returned vector never affects engine state.
    pub fn data(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Number of elements in the owned dataset.
    pub fn sample_size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the owned dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // ========================================================================
    // Measures over Owned Data
    // ========================================================================

    /// Arithmetic mean of the owned dataset (`0.0` when empty).
    pub fn mean(&self) -> f64 {
        executor::mean(&self.data)
    }

    /// Median of the owned dataset (`0.0` when empty).
    pub fn median(&self) -> f64 {
        executor::median(&self.data)
    }

    /// Mode(s) of the owned dataset.
    pub fn mode(&self) -> Mode<T> {
        executor::mode(&self.data)
    }

    /// All statistics of the owned dataset, computed consistently.
    pub fn summarize(&self) -> Summary<T> {
        executor::summarize(&self.data)
    }

    /// Renderable report for the owned dataset.
    pub fn report(&self) -> Report<T> {
        executor::report(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn new_engine_is_empty_with_default_statistics() {
        let engine: StatisticsEngine<i64> = StatisticsEngine::new();
        assert!(engine.is_empty());
        assert_eq!(engine.sample_size(), 0);
        assert_eq!(engine.mean(), 0.0);
        assert_eq!(engine.median(), 0.0);
        assert!(engine.mode().is_empty());
    }

    #[test]
    fn set_data_then_data_round_trips() {
        let mut engine = StatisticsEngine::new();
        let data = vec![10, 20, 30, 20, 10];
        engine.set_data(&data).unwrap();
        assert_eq!(engine.data(), data);
    }

    #[test]
    fn data_returns_independent_copies() {
        let mut engine = StatisticsEngine::new();
        engine.set_data(&vec![1, 2, 3]).unwrap();

        let mut first = engine.data();
        first.push(99);
        first[0] = -1;

        // Engine state is unaffected by mutation of the returned copy
        let second = engine.data();
        assert_eq!(second, vec![1, 2, 3]);
        assert_eq!(engine.data(), second);
    }

    #[test]
    fn set_data_copies_in() {
        let mut engine = StatisticsEngine::new();
        let mut data = vec![5, 6, 7];
        engine.set_data(&data).unwrap();

        // Caller-side mutation after set_data is invisible to the engine
        data[0] = 100;
        assert_eq!(engine.data(), vec![5, 6, 7]);
    }

    #[test]
    fn set_data_replaces_previous_dataset() {
        let mut engine = StatisticsEngine::new();
        engine.set_data(&vec![1, 2, 3]).unwrap();
        engine.set_data(&vec![42]).unwrap();
        assert_eq!(engine.data(), vec![42]);
        assert_eq!(engine.mean(), 42.0);
    }

    #[test]
    fn failed_set_data_leaves_state_untouched() {
        let mut engine = StatisticsEngine::new();
        engine.set_data(&vec![1_i64, 2, 3]).unwrap();

        let grid = Array2::from_shape_vec((2, 2), vec![9_i64, 8, 7, 6]).unwrap();
        let err = engine.set_data(&grid.column(0)).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
        assert_eq!(engine.data(), vec![1, 2, 3]);
    }

    #[test]
    fn methods_match_free_functions() {
        let data = vec![1, 2, 3, 4, 5, 5, 5];
        let engine = StatisticsEngine::with_data(&data).unwrap();

        assert_eq!(engine.mean(), executor::mean(&data));
        assert_eq!(engine.median(), executor::median(&data));
        assert_eq!(engine.mode(), executor::mode(&data));
        assert_eq!(engine.summarize(), executor::summarize(&data));
    }

    #[test]
    fn summarize_matches_sample_size() {
        let engine = StatisticsEngine::with_data(&vec![1, 2, 3, 4]).unwrap();
        let summary = engine.summarize();
        assert_eq!(summary.sample_size, engine.sample_size());
        assert_eq!(summary.median, 2.5);
    }
}
