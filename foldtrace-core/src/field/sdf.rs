use glam::{DMat3, DVec3};

use crate::foundation::math::{Axis, rotation_matrix};
use crate::scene::config::SceneConfig;

/// A prepared signed-distance field.
///
/// Preparation hoists the per-fold rotation matrices out of the evaluation
/// loop; a field is built once per render and shared read-only by every
/// scanline worker. Evaluation is a pure function: repeated evaluation at the
/// same point yields bit-identical results.
#[derive(Clone, Debug)]
pub struct DistanceField {
    iterations: u32,
    offset: DVec3,
    rot_x: DMat3,
    rot_z: DMat3,
    box_half_extent: DVec3,
    sphere_radius: f64,
}

impl DistanceField {
    /// Prepare the field described by `scene`.
    pub fn new(scene: &SceneConfig) -> Self {
        Self {
            iterations: scene.fold_iterations,
            offset: scene.fold_offset,
            rot_x: rotation_matrix(scene.fold_rotation_x, Axis::X),
            rot_z: rotation_matrix(scene.fold_rotation_z, Axis::Z),
            box_half_extent: scene.box_half_extent,
            sphere_radius: scene.sphere_radius,
        }
    }

    /// Signed distance from `p` to the fractal surface.
    ///
    /// Each iteration folds the point into the non-negative octant, shifts it
    /// by the fold offset, and rotates it about X then Z. The folded point is
    /// then measured against a box with a sphere carved out of it; combining
    /// the two signed distances with `max` is the standard SDF Boolean for
    /// that subtraction.
    pub fn distance(&self, p: DVec3) -> f64 {
        let mut p = p;
        for _ in 0..self.iterations {
            p = p.abs() - self.offset;
            p = self.rot_x * p;
            p = self.rot_z * p;
        }

        let q = p.abs() - self.box_half_extent;
        let box_distance = q.x.max(q.y).max(q.z);
        let sphere_cut = -(p.length() - self.sphere_radius);
        box_distance.max(sphere_cut)
    }
}
