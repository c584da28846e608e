use glam::{DMat3, DVec3};

/// A principal axis in scene space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// The `(1, 0, 0)` axis.
    X,
    /// The `(0, 1, 0)` axis.
    Y,
    /// The `(0, 0, 1)` axis.
    Z,
}

/// The matrix rotating about a principal axis by `angle` radians (right-handed).
pub fn rotation_matrix(angle: f64, axis: Axis) -> DMat3 {
    match axis {
        Axis::X => DMat3::from_rotation_x(angle),
        Axis::Y => DMat3::from_rotation_y(angle),
        Axis::Z => DMat3::from_rotation_z(angle),
    }
}

/// Rotate `v` about a principal axis by `angle` radians (right-handed).
pub fn rotate_about(v: DVec3, angle: f64, axis: Axis) -> DVec3 {
    rotation_matrix(angle, axis) * v
}
