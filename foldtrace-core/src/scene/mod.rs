//! Scene description: every constant that defines the rendered image.

/// The serde-backed scene configuration model.
pub mod config;
