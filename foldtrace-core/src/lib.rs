//! Foldtrace is a sphere-tracing renderer for fold-based fractal distance fields.
//!
//! A [`SceneConfig`] describes a signed-distance field (an iterated abs-fold with
//! fixed rotations, carved into a box/sphere CSG shape), a camera, and a light.
//! Rendering turns that description into opaque grayscale RGBA8 pixels
//! ([`FrameRgba`]), one independent scanline at a time.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: `SceneConfig -> DistanceField + CameraBasis` (validate the
//!    scene, hoist the fold rotations, build the look-at basis)
//! 2. **Trace**: per pixel, fan a ray out via [`CameraBasis::ray_direction`],
//!    advance it with [`march`], and shade hits with [`shade`]
//! 3. **Assemble**: one [`RowResult`] per scanline, placed into the frame by
//!    row index so scheduling order never shows in the output
//! 4. **Encode** (optional): serialize the frame to PNG via [`encode_png`] /
//!    [`write_png`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same scene and dimensions produce
//!   byte-identical frames, sequential or parallel.
//! - **Best-effort pixels**: numeric surprises inside a scanline fall back to
//!   background pixels; only request-level problems surface as errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod field;
mod foundation;
mod render;
mod scene;
mod trace;

pub use encode::png::{encode_png, write_png};
pub use field::sdf::DistanceField;
pub use foundation::error::{FoldtraceError, FoldtraceResult};
pub use foundation::math::{Axis, rotate_about, rotation_matrix};
pub use render::frame::{FrameRgba, PixelRgba, RowResult};
pub use render::scanline::{RenderThreading, render};
pub use render::shade::{shade, surface_normal};
pub use scene::config::SceneConfig;
pub use trace::camera::CameraBasis;
pub use trace::march::{MarchResult, march};

pub use glam::{DVec2, DVec3};
