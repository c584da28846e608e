//! Frame assembly: pixels, scanlines, shading, and the render entry point.

/// Pixel and frame buffer value types.
pub mod frame;
/// The row-parallel renderer.
pub mod scanline;
/// Normal estimation and intensity shading.
pub mod shade;
