//! Rigid group rotation.
//!
//! Rotates a set of member positions about their common centroid: yaw about
//! the vertical axis composed with pitch about the horizontal axis, yaw
//! applied first. A rigid transform, so pairwise member distances are
//! preserved. The resulting positions are continuous — they are not snapped
//! back to the grid; a rotated group floats at sub-grid offsets until a
//! later drag release snaps it again.

use nalgebra::{Rotation3, Vector3};

use cubeforge_core::{centroid, PointerDelta, Vec3};

/// Scale applied to pointer-drag displacement to obtain rotation angles, in
/// radians per normalized device unit.
pub const ROTATE_SENSITIVITY: f64 = 2.0;

/// Converts a 2D gesture delta to (yaw, pitch) angles.
pub fn gesture_angles(delta: PointerDelta) -> (f64, f64) {
    (delta.x * ROTATE_SENSITIVITY, delta.y * ROTATE_SENSITIVITY)
}

fn to_na(v: Vec3) -> Vector3<f64> {
    Vector3::new(v.x, v.y, v.z)
}

fn from_na(v: Vector3<f64>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// The incremental rotation for one gesture step.
pub fn incremental_rotation(yaw: f64, pitch: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), yaw)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), pitch)
}

/// Rotates member positions rigidly about their centroid.
///
/// Returns the new positions in member order. The input is the group's
/// current member positions; the caller writes the results back and commits.
pub fn rotate_rigid(positions: &[Vec3], yaw: f64, pitch: f64) -> Vec<Vec3> {
    let center = centroid(positions);
    let rotation = incremental_rotation(yaw, pitch);

    positions
        .iter()
        .map(|p| {
            let relative = to_na(*p - center);
            center + from_na(rotation * relative)
        })
        .collect()
}
