//! Encoding boundary: serialize rendered frames to standard raster formats.
//!
//! Encode and IO failures propagate to the caller and are never retried.

/// PNG serialization of [`crate::FrameRgba`] frames.
pub mod png;
