//! Shared value types, math helpers, and the crate error taxonomy.

/// Crate error and result types.
pub mod error;
/// Principal-axis rotation and direction helpers.
pub mod math;
