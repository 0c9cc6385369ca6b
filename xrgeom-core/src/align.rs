//! Rotations that bring a plane normal onto a canonical axis

use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};

/// Below this, `n · axis + 1` is treated as zero (the vectors are opposite)
const OPPOSITE_EPSILON: f32 = 1e-6;

/// Shortest-arc rotation taking unit vector `n` onto unit vector `axis`.
///
/// Opposite vectors have no unique shortest arc; a half turn about an
/// axis perpendicular to `n` is used instead.
pub fn rotation_to_axis(n: &Unit<Vector3<f32>>, axis: &Unit<Vector3<f32>>) -> UnitQuaternion<f32> {
    let (n, axis) = (n.into_inner(), axis.into_inner());
    let r = n.dot(&axis) + 1.0;

    let q = if r < OPPOSITE_EPSILON {
        if n.x.abs() > n.z.abs() {
            Quaternion::new(0.0, -n.y, n.x, 0.0)
        } else {
            Quaternion::new(0.0, 0.0, -n.z, n.y)
        }
    } else {
        let c = n.cross(&axis);
        Quaternion::new(r, c.x, c.y, c.z)
    };

    UnitQuaternion::new_normalize(q)
}

/// Rotate `v` by the rotation that maps normal `n` onto `axis`
pub fn align_normal_to_axis(
    v: &Vector3<f32>,
    n: &Unit<Vector3<f32>>,
    axis: &Unit<Vector3<f32>>,
) -> Vector3<f32> {
    rotation_to_axis(n, axis) * v
}
