use glam::DVec3;

use crate::field::sdf::DistanceField;
use crate::scene::config::SceneConfig;

/// Estimate the surface normal at `p` by central finite differences.
///
/// Returns `None` when the sampled gradient is zero or non-finite (possible on
/// pathological fold parameters); callers treat that as a background pixel
/// rather than shading with garbage.
pub fn surface_normal(p: DVec3, field: &DistanceField, epsilon: f64) -> Option<DVec3> {
    let ex = DVec3::new(epsilon, 0.0, 0.0);
    let ey = DVec3::new(0.0, epsilon, 0.0);
    let ez = DVec3::new(0.0, 0.0, epsilon);
    let gradient = DVec3::new(
        field.distance(p + ex) - field.distance(p - ex),
        field.distance(p + ey) - field.distance(p - ey),
        field.distance(p + ez) - field.distance(p - ez),
    );
    if !gradient.is_finite() {
        return None;
    }
    gradient.try_normalize()
}

/// Shading intensity at a surface hit point.
///
/// A simple ambient+diffuse approximation: the normal's alignment with the
/// scene light scaled by the diffuse coefficient, plus the ambient floor. Not
/// physically normalized, and deliberately unclamped; negative intensities are
/// clamped later at the pixel-output stage
/// ([`PixelRgba::from_intensity`](crate::PixelRgba::from_intensity)).
pub fn shade(p: DVec3, field: &DistanceField, scene: &SceneConfig) -> f64 {
    match surface_normal(p, field, scene.normal_epsilon) {
        Some(normal) => {
            normal.dot(scene.light_direction.normalize()) * scene.diffuse + scene.ambient
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unfolded_scene() -> SceneConfig {
        let mut scene = SceneConfig::default();
        scene.fold_iterations = 0;
        scene
    }

    #[test]
    fn normal_on_a_box_face_points_along_the_axis() {
        let scene = unfolded_scene();
        let field = DistanceField::new(&scene);
        // On the +x face of the box, outside the carved sphere.
        let p = DVec3::new(0.7, 0.6, 0.6);
        let normal = surface_normal(p, &field, scene.normal_epsilon).unwrap();
        assert!((normal - DVec3::X).length() < 1e-9);
    }

    #[test]
    fn intensity_is_diffuse_plus_ambient_for_an_aligned_normal() {
        let mut scene = unfolded_scene();
        scene.light_direction = DVec3::X;
        let field = DistanceField::new(&scene);
        let p = DVec3::new(0.7, 0.6, 0.6);

        let intensity = shade(p, &field, &scene);
        assert!((intensity - (scene.diffuse + scene.ambient)).abs() < 1e-9);
    }

    #[test]
    fn opposed_normal_goes_negative_and_is_not_clamped_here() {
        let mut scene = unfolded_scene();
        scene.light_direction = -DVec3::X;
        let field = DistanceField::new(&scene);
        let p = DVec3::new(0.7, 0.6, 0.6);

        let intensity = shade(p, &field, &scene);
        assert!((intensity - (scene.ambient - scene.diffuse)).abs() < 1e-9);
        assert!(intensity < scene.ambient);
    }
}
