//! Output types and result structures for statistics operations.
//!
//! ## Purpose
//!
//! This module defines the structured results produced by the engine:
//! [`Mode`] for the mode values and their shared frequency, [`Summary`] for
//! the full set of measures, and [`Report`] for the deterministic textual
//! rendering.
//!
//! ## Design notes
//!
//! * Results are plain data with public fields, plus convenience queries.
//! * [`Report`] implements `Display`; rendering is the only place where
//!   floating-point values are rounded (to two decimal places).
//! * A report owns an independent copy of the analyzed dataset, so it stays
//!   valid after the engine's dataset is replaced.
//!
//! ## Report format
//!
//! Every line is newline-terminated. The first line renders the dataset:
//!
//! ```text
//! Array: [1, 2, 3, 4, 5, 5, 5]
//! Mean: 3.57
//! Median: 4.00
//! Mode: 5 (frequency: 3)
//! ```
//!
//! With tied modes the mode line lists all values:
//!
//! ```text
//! Mode: [1, 2, 3] (frequency: 2 each)
//! ```
//!
//! An empty dataset renders a fixed message instead of the measures:
//!
//! ```text
//! Array: []
//! Cannot calculate statistics for empty array.
//! ```
//!
//! ## Invariants
//!
//! * `Summary::sample_size == 0` if and only if `mean` and `median` are
//!   `0.0` and the mode is empty with frequency 0.
//! * `Mode::values` is sorted ascending and free of duplicates.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores and renders
//!   results produced by the executor.
//!
//! ## Visibility
//!
//! All three types are part of the public API and are re-exported through
//! the prelude.

use std::fmt;

// ============================================================================
// Mode
// ============================================================================

/// The most frequently occurring value(s) in a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode<T> {
    /// All values attaining the maximum frequency, sorted ascending.
    pub values: Vec<T>,

    /// The maximum frequency itself (0 for an empty dataset).
    pub frequency: usize,
}

impl<T> Mode<T> {
    /// Number of distinct mode values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the dataset was empty (no mode values).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if several values share the maximum frequency.
    pub fn is_multimodal(&self) -> bool {
        self.values.len() > 1
    }
}

impl<T: Copy> Mode<T> {
    /// The unique mode value, if there is exactly one.
    pub fn single(&self) -> Option<T> {
        match self.values.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// All descriptive statistics for a dataset, computed against one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<T> {
    /// Arithmetic mean (0.0 for an empty dataset).
    pub mean: f64,

    /// Median (0.0 for an empty dataset).
    pub median: f64,

    /// Mode value(s) and their shared frequency.
    pub mode: Mode<T>,

    /// Number of elements in the analyzed dataset.
    pub sample_size: usize,
}

impl<T> Summary<T> {
    /// Returns `true` if the summary describes an empty dataset.
    pub fn is_empty(&self) -> bool {
        self.sample_size == 0
    }
}

// ============================================================================
// Report
// ============================================================================

/// A dataset together with its summary, renderable via `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<T> {
    /// Independent copy of the analyzed dataset, in input order.
    pub data: Vec<T>,

    /// Statistics computed over `data`.
    pub summary: Summary<T>,
}

impl<T: fmt::Display> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array: ")?;
        write_values(f, &self.data)?;
        writeln!(f)?;

        if self.summary.is_empty() {
            return writeln!(f, "Cannot calculate statistics for empty array.");
        }

        writeln!(f, "Mean: {:.2}", self.summary.mean)?;
        writeln!(f, "Median: {:.2}", self.summary.median)?;

        let mode = &self.summary.mode;
        match mode.values.as_slice() {
            [single] => writeln!(f, "Mode: {} (frequency: {})", single, mode.frequency),
            values => {
                write!(f, "Mode: ")?;
                write_values(f, values)?;
                writeln!(f, " (frequency: {} each)", mode.frequency)
            }
        }
    }
}

/// Render a slice as `[v1, v2, ...]`.
fn write_values<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    write!(f, "]")
}
