//! Helper functions

use crate::kinematic_traits::{Joints, Transform};
use nalgebra::{Isometry3, Matrix3, Rotation3, Translation3, UnitQuaternion, Vector3};

/// Checks if all elements in the array are finite
pub fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Round to the given number of decimal places, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Copies a joint slice of unknown length into Joints, None if the length is not 6.
pub fn joints_from_slice(angles: &[f64]) -> Option<Joints> {
    angles.try_into().ok()
}

/// Rotation block of the homogeneous transform.
pub fn rotation_block(t: &Transform) -> Matrix3<f64> {
    t.fixed_view::<3, 3>(0, 0).into_owned()
}

/// Translation column of the homogeneous transform.
pub fn translation(t: &Transform) -> Vector3<f64> {
    Vector3::new(t[(0, 3)], t[(1, 3)], t[(2, 3)])
}

/// Converts the homogeneous transform into ```nalgebra::Isometry3<f64>```.
/// The rotation block is assumed orthonormal.
pub fn to_isometry(t: &Transform) -> Isometry3<f64> {
    let rotation = Rotation3::from_matrix_unchecked(rotation_block(t));
    Isometry3::from_parts(
        Translation3::from(translation(t)),
        UnitQuaternion::from_rotation_matrix(&rotation),
    )
}

/// Print joint values in degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint_idx in 0..6 {
        row_str.push_str(&format!("{:5.2} ", joints[joint_idx]));
    }
    println!("[{}]", row_str.trim_end());
}

pub fn dump_pose(t: &Transform) {
    let translation = translation(t);
    let rotation = to_isometry(t).rotation;

    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  quat: {:.5},{:.5},{:.5},{:.5}",
        translation.x, translation.y, translation.z, rotation.i, rotation.j, rotation.k, rotation.w
    );
}
