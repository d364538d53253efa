extern crate nalgebra as na;

use na::{Matrix4, Vector3};

/// Joint angles of the six joints, in degrees.
pub type Joints = [f64; 6];

/// All joints at zero (home position).
pub const JOINTS_AT_ZERO: Joints = [0.0; 6];

/// Number of joints in the arm.
pub const JOINT_COUNT: usize = 6;

/// Number of DH parameters per joint: a, alpha, d, theta offset.
pub const DH_ARITY: usize = 4;

/// 4x4 homogeneous transform. The bottom row is always [0, 0, 0, 1].
/// ```
/// extern crate nalgebra as na;
/// use na::Matrix4;
///
/// type Transform = Matrix4<f64>;
///
/// let home: Transform = Transform::identity();
/// assert_eq!(home[(3, 3)], 1.0);
/// ```
pub type Transform = Matrix4<f64>;

/// Roll, pitch and yaw in degrees (XYZ convention).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Orientation {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Orientation { roll, pitch, yaw }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }
}

/// Position and orientation of a single joint frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointPose {
    pub position: Vector3<f64>,
    pub orientation: Orientation,
}

impl JointPose {
    /// Flattened as (x, y, z, roll, pitch, yaw), the row layout used by datasets.
    pub fn as_row(&self) -> [f64; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.orientation.roll,
            self.orientation.pitch,
            self.orientation.yaw,
        ]
    }
}

/// Poses of the base (index 0) and of every joint after its transform is applied (1..=6),
/// together with the final transform of the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainPoses {
    pub poses: [JointPose; JOINT_COUNT + 1],
    pub transform: Transform,
}

impl ChainPoses {
    /// End effector pose (pose after the last joint).
    pub fn end_effector(&self) -> &JointPose {
        &self.poses[JOINT_COUNT]
    }

    /// Positions of the six joints, base excluded.
    pub fn joint_positions(&self) -> [[f64; 3]; JOINT_COUNT] {
        std::array::from_fn(|i| {
            let p = &self.poses[i + 1].position;
            [p.x, p.y, p.z]
        })
    }
}

pub trait Kinematics {
    /// Final transform of the chain for the given joint angles (degrees).
    fn forward(&self, qs: &Joints) -> Transform;

    /// Base pose plus the pose reached after every joint, for the given joint angles (degrees).
    fn forward_with_joint_poses(&self, qs: &Joints) -> ChainPoses;
}
