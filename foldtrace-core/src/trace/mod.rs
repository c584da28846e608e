//! Ray generation and sphere tracing.

/// Look-at camera basis and per-pixel ray fan-out.
pub mod camera;
/// The bounded sphere-tracing loop.
pub mod march;
