//! Homogeneous transform of a single Denavit-Hartenberg joint

use crate::kinematic_traits::Transform;
use crate::parameters::DhParameter;

/// Transform of one DH link. `alpha` and `theta` are in degrees; `theta` is the full DH theta
/// (commanded joint angle plus the joint offset). Total over all real inputs.
///
/// ```text
/// | cosθ  -sinθ·cosα   sinθ·sinα   a·cosθ |
/// | sinθ   cosθ·cosα  -cosθ·sinα   a·sinθ |
/// | 0      sinα        cosα        d      |
/// | 0      0           0           1      |
/// ```
pub fn dh_transform(a: f64, alpha: f64, d: f64, theta: f64) -> Transform {
    let (st, ct) = theta.to_radians().sin_cos();
    let (sa, ca) = alpha.to_radians().sin_cos();

    Transform::new(
        ct, -st * ca, st * sa, a * ct,
        st, ct * ca, -ct * sa, a * st,
        0.0, sa, ca, d,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Transform of the joint for the commanded joint angle (degrees).
pub fn joint_transform(p: &DhParameter, joint_angle: f64) -> Transform {
    dh_transform(p.a, p.alpha, p.d, joint_angle + p.theta_offset)
}
