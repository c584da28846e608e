use glam::{DVec2, DVec3};

use crate::foundation::error::{FoldtraceError, FoldtraceResult};
use crate::scene::config::SceneConfig;

/// An orthonormal look-at basis for camera ray generation.
///
/// The basis depends only on the eye, target, and world-up reference, so it is
/// built once per render and shared by every pixel. Construction is fallible:
/// a forward direction parallel to the world-up reference has no well-defined
/// right vector, and that failure surfaces as [`FoldtraceError::Camera`]
/// instead of an undefined vector leaking into the ray fan-out.
#[derive(Clone, Copy, Debug)]
pub struct CameraBasis {
    forward: DVec3,
    right: DVec3,
    up: DVec3,
}

impl CameraBasis {
    /// Build the basis looking from `eye` toward `target`.
    ///
    /// Callers that hit the parallel-to-up failure choose their own fallback
    /// by supplying a different `world_up`; no fallback axis is silently
    /// installed here.
    pub fn try_new(eye: DVec3, target: DVec3, world_up: DVec3) -> FoldtraceResult<Self> {
        let forward = (target - eye)
            .try_normalize()
            .ok_or_else(|| FoldtraceError::camera("camera eye and target coincide"))?;
        let up_ref = world_up
            .try_normalize()
            .ok_or_else(|| FoldtraceError::camera("world-up reference must be non-zero"))?;
        let right = forward.cross(up_ref).try_normalize().ok_or_else(|| {
            FoldtraceError::camera(
                "camera forward is parallel to world-up; supply a different world_up",
            )
        })?;
        // Unit by construction: forward and right are orthogonal unit vectors.
        let up = forward.cross(right);
        Ok(Self { forward, right, up })
    }

    /// Build the basis for a scene's camera.
    pub fn from_scene(scene: &SceneConfig) -> FoldtraceResult<Self> {
        Self::try_new(scene.camera_eye, scene.camera_target, scene.world_up)
    }

    /// The unit view direction for a normalized pixel offset.
    ///
    /// `uv` perturbs the forward direction across the image plane; the result
    /// always has a unit forward component, so normalization cannot degenerate.
    pub fn ray_direction(&self, uv: DVec2) -> DVec3 {
        (self.forward + self.right * uv.x + self.up * uv.y).normalize()
    }

    /// The unit forward direction.
    pub fn forward(&self) -> DVec3 {
        self.forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn basis_is_orthonormal() {
        let scene = SceneConfig::default();
        let basis = CameraBasis::from_scene(&scene).unwrap();
        for v in [basis.forward, basis.right, basis.up] {
            assert!((v.length() - 1.0).abs() < TOL);
        }
        assert!(basis.forward.dot(basis.right).abs() < TOL);
        assert!(basis.forward.dot(basis.up).abs() < TOL);
        assert!(basis.right.dot(basis.up).abs() < TOL);
    }

    #[test]
    fn centered_uv_looks_straight_ahead() {
        let basis = CameraBasis::try_new(DVec3::new(0.0, 0.0, -5.0), DVec3::ZERO, DVec3::Y)
            .unwrap();
        assert!((basis.ray_direction(DVec2::ZERO) - basis.forward()).length() < TOL);
    }

    #[test]
    fn forward_parallel_to_world_up_is_an_explicit_error() {
        let err = CameraBasis::try_new(DVec3::new(0.0, -5.0, 0.0), DVec3::ZERO, DVec3::Y)
            .unwrap_err();
        assert!(matches!(err, FoldtraceError::Camera(_)));
    }

    #[test]
    fn coincident_eye_and_target_is_an_explicit_error() {
        let err = CameraBasis::try_new(DVec3::ONE, DVec3::ONE, DVec3::Y).unwrap_err();
        assert!(matches!(err, FoldtraceError::Camera(_)));
    }
}
