//! Roll, pitch and yaw from rotation matrices

use nalgebra::Matrix3;

use crate::kinematic_traits::Orientation;

/// Below this value of sqrt(R00² + R10²) pitch is treated as ±90° (gimbal lock).
pub const SINGULARITY_THRESHOLD: f64 = 1e-6;

/// True if the rotation is at the gimbal lock, where roll and yaw are not separable.
#[inline]
pub fn is_singular(r: &Matrix3<f64>) -> bool {
    pitch_cosine(r) < SINGULARITY_THRESHOLD
}

#[inline]
fn pitch_cosine(r: &Matrix3<f64>) -> f64 {
    (r[(0, 0)] * r[(0, 0)] + r[(1, 0)] * r[(1, 0)]).sqrt()
}

/// Roll, pitch and yaw in degrees, XYZ convention. In the singular case the whole
/// rotation about the collapsed axis is reported as roll and yaw is 0.
pub fn euler_from_matrix(r: &Matrix3<f64>) -> Orientation {
    let sy = pitch_cosine(r);
    let pitch = f64::atan2(-r[(2, 0)], sy);

    let (roll, yaw) = if sy < SINGULARITY_THRESHOLD {
        (f64::atan2(-r[(1, 2)], r[(1, 1)]), 0.0)
    } else {
        (f64::atan2(r[(2, 1)], r[(2, 2)]), f64::atan2(r[(1, 0)], r[(0, 0)]))
    };

    Orientation::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Rotation3;

    const SMALL: f64 = 1e-9;

    fn rpy(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
        Rotation3::from_euler_angles(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
            .into_inner()
    }

    fn assert_orientation(o: Orientation, roll: f64, pitch: f64, yaw: f64) {
        assert!((o.roll - roll).abs() < SMALL, "roll {} != {}", o.roll, roll);
        assert!((o.pitch - pitch).abs() < SMALL, "pitch {} != {}", o.pitch, pitch);
        assert!((o.yaw - yaw).abs() < SMALL, "yaw {} != {}", o.yaw, yaw);
    }

    #[test]
    fn test_identity() {
        let o = euler_from_matrix(&Matrix3::identity());
        assert_orientation(o, 0.0, 0.0, 0.0);
        assert!(!is_singular(&Matrix3::identity()));
    }

    #[test]
    fn test_regular_angles_recovered() {
        for &(r, p, y) in &[(10.0, 20.0, 30.0), (-120.0, 45.0, 170.0), (5.0, -89.0, -60.0)] {
            let o = euler_from_matrix(&rpy(r, p, y));
            assert_orientation(o, r, p, y);
        }
    }

    #[test]
    fn test_gimbal_lock_positive_pitch() {
        let m = rpy(0.0, 90.0, 0.0);
        assert!(is_singular(&m));
        let o = euler_from_matrix(&m);
        assert_orientation(o, 0.0, 90.0, 0.0);
    }

    #[test]
    fn test_gimbal_lock_folds_yaw_into_roll() {
        // At pitch -90 only roll - yaw is observable. Yaw is reported as zero.
        let m = rpy(30.0, -90.0, 10.0);
        assert!(is_singular(&m));
        let o = euler_from_matrix(&m);
        assert_eq!(o.yaw, 0.0);
        assert!((o.pitch + 90.0).abs() < SMALL);
        let rebuilt = rpy(o.roll, o.pitch, o.yaw);
        assert!((rebuilt - m).abs().max() < 1e-6);
    }

    #[test]
    fn test_threshold_boundary() {
        // sy just above the threshold takes the regular branch
        let s = 2.0 * SINGULARITY_THRESHOLD;
        let c = (1.0 - s * s).sqrt();
        let m = Matrix3::new(
            s, 0.0, c,
            0.0, 1.0, 0.0,
            -c, 0.0, s,
        );
        assert!(!is_singular(&m));
        let o = euler_from_matrix(&m);
        assert!(o.pitch < 90.0 && o.pitch > 89.99);
    }
}
