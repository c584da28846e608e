//! The signed-distance field defining the fractal surface.

/// Fold-based SDF evaluation.
pub mod sdf;
