use glam::DVec3;

use crate::field::sdf::DistanceField;
use crate::scene::config::SceneConfig;

/// Outcome of sphere tracing one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchResult {
    /// Distance traveled along the ray when tracing stopped.
    pub distance: f64,
    /// Whether the last evaluated field distance was below the hit threshold.
    pub hit: bool,
}

/// Sphere-trace a ray through `field` under the scene's tracer policy.
///
/// The ray advances by `field distance * step_scale` per step, stopping as a
/// hit when the field drops below `hit_threshold` and as a miss when the step
/// budget is exhausted. A non-finite field value terminates the march as a
/// miss rather than propagating garbage into shading; negative distances are a
/// defined inside-the-surface outcome and count as hits.
///
/// `direction` must be unit length (guaranteed by
/// [`CameraBasis::ray_direction`](crate::CameraBasis::ray_direction)).
pub fn march(
    origin: DVec3,
    direction: DVec3,
    field: &DistanceField,
    scene: &SceneConfig,
) -> MarchResult {
    let mut traveled = 0.0;
    for _ in 0..scene.max_steps {
        let distance = field.distance(origin + direction * traveled);
        if !distance.is_finite() {
            return MarchResult {
                distance: traveled,
                hit: false,
            };
        }
        if distance < scene.hit_threshold {
            return MarchResult {
                distance: traveled,
                hit: true,
            };
        }
        traveled += distance * scene.step_scale;
    }
    MarchResult {
        distance: traveled,
        hit: false,
    }
}
