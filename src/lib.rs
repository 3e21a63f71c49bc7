//! # Descriptive Statistics — mean, median, and mode for Rust
//!
//! A small, deterministic descriptive-statistics engine for integer
//! datasets. It computes the arithmetic mean, the median, and the mode(s)
//! of a finite collection of integers, and renders a stable human-readable
//! report.
//!
//! ## What does it compute?
//!
//! * **Mean**: the arithmetic average of the dataset.
//! * **Median**: the middle value of the sorted dataset, or the average of
//!   the two middle values for an even count.
//! * **Mode**: the most frequent value(s). Ties are expected and valid —
//!   every value sharing the maximum frequency is returned, ascending.
//!
//! Inputs are integers (any `PrimInt` type); mean and median are `f64`.
//! Empty datasets are a defined edge case, never an error: mean and median
//! are `0.0` and the mode is empty with frequency `0`.
//!
//! ## Quick Start
//!
//! ### Supplied data
//!
//! ```rust
//! use descriptive_stats::prelude::*;
//!
//! let data = vec![1, 2, 3, 4, 5, 5, 5];
//!
//! assert!((mean(&data) - 25.0 / 7.0).abs() < 1e-12);
//! assert_eq!(median(&data), 4.0);
//! assert_eq!(mode(&data).values, vec![5]);
//!
//! println!("{}", report(&data));
//! ```
//!
//! ```text
//! Array: [1, 2, 3, 4, 5, 5, 5]
//! Mean: 3.57
//! Median: 4.00
//! Mode: 5 (frequency: 3)
//! ```
//!
//! ### Owned data
//!
//! ```rust
//! use descriptive_stats::prelude::*;
//!
//! let mut engine = StatisticsEngine::new();
//! engine.set_data(&vec![10, 20, 30, 20, 10])?;
//!
//! let summary = engine.summarize();
//! assert_eq!(summary.mean, 18.0);
//! assert_eq!(summary.mode.values, vec![10, 20]);
//! assert_eq!(summary.sample_size, 5);
//!
//! // The engine owns an independent copy; mutating a returned dataset
//! // never touches engine state.
//! let mut copy = engine.data();
//! copy.clear();
//! assert_eq!(engine.sample_size(), 5);
//! # Result::<()>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Statistics computations are infallible. Only dataset conversion can
//! fail: `set_data` and `with_data` accept slices, vectors, and 1-D
//! `ndarray` arrays via [`DatasetInput`], and a non-contiguous ndarray
//! view is rejected with [`StatsError::InvalidInput`] before any engine
//! state is touched.
//!
//! ```rust
//! use descriptive_stats::prelude::*;
//! use ndarray::array;
//!
//! let engine = StatisticsEngine::with_data(&array![3_i64, 1, 2])?;
//! assert_eq!(engine.median(), 2.0);
//! # Result::<()>::Ok(())
//! ```

// Layer 1: Primitives - error types and basic utilities.
mod primitives;

// Layer 2: Engine - statistics computations and result types.
mod engine;

// Layer 3: Input - dataset conversion trait.
mod input;

// High-level stateful API.
mod api;

// Standard descriptive-statistics prelude.
pub mod prelude {
    pub use crate::api::{Result, StatisticsEngine};
    pub use crate::engine::executor::{mean, median, mode, report, summarize};
    pub use crate::engine::output::{Mode, Report, Summary};
    pub use crate::input::DatasetInput;
    pub use crate::primitives::errors::StatsError;
}

pub use crate::api::{Result, StatisticsEngine};
pub use crate::engine::executor::{mean, median, mode, report, summarize};
pub use crate::engine::output::{Mode, Report, Summary};
pub use crate::input::DatasetInput;
pub use crate::primitives::errors::StatsError;
