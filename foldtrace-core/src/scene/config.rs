use std::path::Path;

use anyhow::Context as _;
use glam::DVec3;

use crate::foundation::error::{FoldtraceError, FoldtraceResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete scene description.
///
/// A scene is a pure data model holding every constant of the rendered image:
/// the fold parameters shaping the fractal distance field, the CSG shape it is
/// carved into, the camera, the light, and the sphere-tracer policy. Scenes can
/// be built programmatically or serialized/deserialized via Serde (JSON), so a
/// render is reproducible from its configuration alone.
///
/// [`SceneConfig::default`] is the canonical scene: a self-similar fold carved
/// from a box/sphere CSG shape, viewed from `normalize(-1,-1.5,-2) * 5`.
pub struct SceneConfig {
    /// Number of abs-fold iterations applied to each sample point.
    pub fold_iterations: u32,
    /// Offset subtracted after each componentwise abs fold.
    pub fold_offset: DVec3,
    /// Rotation about the X axis after each fold, in radians.
    pub fold_rotation_x: f64,
    /// Rotation about the Z axis after each fold, in radians.
    pub fold_rotation_z: f64,
    /// Half-extent of the box primitive the folded field is combined with.
    pub box_half_extent: DVec3,
    /// Radius of the sphere carved out of the box primitive.
    pub sphere_radius: f64,
    /// Camera eye position.
    pub camera_eye: DVec3,
    /// Point the camera looks at.
    pub camera_target: DVec3,
    /// World-up reference for the look-at basis. Must not be parallel to the
    /// camera forward direction.
    pub world_up: DVec3,
    /// Zoom factor applied to normalized pixel coordinates.
    pub uv_zoom: f64,
    /// Light direction (normalized at use; any non-zero vector is accepted).
    pub light_direction: DVec3,
    /// Diffuse coefficient applied to `dot(normal, light)`.
    pub diffuse: f64,
    /// Ambient intensity added to every hit.
    pub ambient: f64,
    /// Sphere-tracer step budget per ray.
    pub max_steps: u32,
    /// Fraction of the field distance advanced per step. Must be in `(0, 1]`
    /// to guard against overshoot on a slightly non-Lipschitz-1 field.
    pub step_scale: f64,
    /// Field distance below which a step counts as a surface hit.
    pub hit_threshold: f64,
    /// Central-difference epsilon for normal estimation.
    pub normal_epsilon: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fold_iterations: 9,
            fold_offset: DVec3::new(0.1, 0.2, 0.3),
            fold_rotation_x: 1.1,
            fold_rotation_z: 0.7,
            box_half_extent: DVec3::splat(0.7),
            sphere_radius: 0.8,
            camera_eye: DVec3::new(-1.0, -1.5, -2.0).normalize() * 5.0,
            camera_target: DVec3::ZERO,
            world_up: DVec3::Y,
            uv_zoom: 2.0,
            light_direction: DVec3::new(0.6, 0.4, -0.9),
            diffuse: 0.6,
            ambient: 0.4,
            max_steps: 70,
            step_scale: 0.9,
            hit_threshold: 0.01,
            normal_epsilon: 0.005,
        }
    }
}

impl SceneConfig {
    /// Check structural invariants of the scene.
    ///
    /// [`crate::render`] validates up front, so invalid scenes fail the whole
    /// request instead of producing silent garbage pixels.
    pub fn validate(&self) -> FoldtraceResult<()> {
        if !self.fold_offset.is_finite() {
            return Err(FoldtraceError::validation("fold_offset must be finite"));
        }
        if !self.fold_rotation_x.is_finite() || !self.fold_rotation_z.is_finite() {
            return Err(FoldtraceError::validation("fold rotations must be finite"));
        }
        if !self.box_half_extent.is_finite()
            || self.box_half_extent.min_element() <= 0.0
        {
            return Err(FoldtraceError::validation(
                "box_half_extent components must be finite and > 0",
            ));
        }
        if !self.sphere_radius.is_finite() || self.sphere_radius <= 0.0 {
            return Err(FoldtraceError::validation(
                "sphere_radius must be finite and > 0",
            ));
        }
        if !self.camera_eye.is_finite() || !self.camera_target.is_finite() {
            return Err(FoldtraceError::validation("camera points must be finite"));
        }
        if self.camera_eye == self.camera_target {
            return Err(FoldtraceError::validation(
                "camera_eye and camera_target must differ",
            ));
        }
        if !self.world_up.is_finite() || self.world_up == DVec3::ZERO {
            return Err(FoldtraceError::validation(
                "world_up must be finite and non-zero",
            ));
        }
        if !self.uv_zoom.is_finite() || self.uv_zoom <= 0.0 {
            return Err(FoldtraceError::validation("uv_zoom must be finite and > 0"));
        }
        if !self.light_direction.is_finite() || self.light_direction == DVec3::ZERO {
            return Err(FoldtraceError::validation(
                "light_direction must be finite and non-zero",
            ));
        }
        if !self.diffuse.is_finite() || !self.ambient.is_finite() {
            return Err(FoldtraceError::validation(
                "diffuse and ambient must be finite",
            ));
        }
        if self.max_steps == 0 {
            return Err(FoldtraceError::validation("max_steps must be >= 1"));
        }
        if !self.step_scale.is_finite() || self.step_scale <= 0.0 || self.step_scale > 1.0 {
            return Err(FoldtraceError::validation(
                "step_scale must be in (0, 1]",
            ));
        }
        if !self.hit_threshold.is_finite() || self.hit_threshold <= 0.0 {
            return Err(FoldtraceError::validation(
                "hit_threshold must be finite and > 0",
            ));
        }
        if !self.normal_epsilon.is_finite() || self.normal_epsilon <= 0.0 {
            return Err(FoldtraceError::validation(
                "normal_epsilon must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Load and validate a scene from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> FoldtraceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene file '{}'", path.display()))?;
        let scene: Self = serde_json::from_str(&text).map_err(|e| {
            FoldtraceError::validation(format!("parse scene file '{}': {e}", path.display()))
        })?;
        scene.validate()?;
        Ok(scene)
    }
}
