//! Error types for dataset preparation.
//!
//! ## Purpose
//!
//! This module defines [`StatsError`], the single error type surfaced by the
//! crate. Statistics computations themselves never fail: empty datasets
//! degrade to well-defined default results. The only fallible operation is
//! converting caller-supplied input into a contiguous slice of integers.
//!
//! ## Design notes
//!
//! * Errors carry a human-readable description of the offending input.
//! * Conversion errors are raised before any engine state is mutated, so a
//!   failed `set_data` leaves the previously owned dataset intact.
//!
//! ## Visibility
//!
//! [`StatsError`] is part of the public API and is the error type of the
//! crate-wide `Result` alias.

use std::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur while preparing input for the statistics engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Input could not be converted into a contiguous slice of integers.
    InvalidInput(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for StatsError {}
