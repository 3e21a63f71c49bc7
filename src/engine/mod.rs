//! Layer 2: Engine
//!
//! Core computation logic for descriptive statistics.
//!
//! This layer implements the three statistical measures and packages their
//! results. All functions here are pure: they take a borrowed slice and
//! never mutate it.
//!
//! # Module Organization
//!
//! - **executor**: The mean/median/mode computations and summary assembly
//! - **output**: Structured results (Mode, Summary, Report)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Input
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives (errors, sorting)
//! ```

/// Descriptive statistics computations.
///
/// Provides:
/// - `mean`, `median`, `mode` over integer slices
/// - `summarize` combining all three with the sample size
/// - `report` building a renderable [`Report`](output::Report)
pub mod executor;

/// Output types for statistics operations.
///
/// Provides:
/// - [`Mode`](output::Mode): mode values and their shared frequency
/// - [`Summary`](output::Summary): all measures plus sample size
/// - [`Report`](output::Report): `Display`-renderable textual report
pub mod output;
