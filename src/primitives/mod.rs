//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the shared error type and low-level utilities used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (StatsError)
//! - **sorting**: Low-level sorting helpers
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Input
//!   ↓
//! Layer 2: Engine (executor, output)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - The crate-wide [`StatsError`](errors::StatsError) enum
pub mod errors;

/// Sorting utilities.
///
/// Provides:
/// - Non-mutating sorted-copy helpers for median computation
pub mod sorting;
