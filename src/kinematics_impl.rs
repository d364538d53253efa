use tracing::warn;

use crate::dh_transform::joint_transform;
use crate::euler::euler_from_matrix;
use crate::kinematic_traits::{ChainPoses, JointPose, Joints, Kinematics, Transform, JOINT_COUNT};
use crate::parameter_error::ParameterError;
use crate::parameters::DhTable;
use crate::utils::{joints_from_slice, rotation_block, translation};

/// Forward kinematics of a serial arm described by a DH table.
#[derive(Debug, Clone, Copy)]
pub struct DhKinematics {
    table: DhTable,
}

impl DhKinematics {
    /// Creates a new `DhKinematics` instance with the given DH table.
    pub fn new(table: DhTable) -> Self {
        DhKinematics { table }
    }

    pub fn table(&self) -> &DhTable {
        &self.table
    }
}

impl Kinematics for DhKinematics {
    fn forward(&self, qs: &Joints) -> Transform {
        chain_poses(&self.table, qs).transform
    }

    fn forward_with_joint_poses(&self, qs: &Joints) -> ChainPoses {
        chain_poses(&self.table, qs)
    }
}

/// The single scalar kernel shared by the single pose and the batch paths.
/// Transforms compose in joint order, each expressed in the frame of the preceding joint:
/// T = T1 · T2 · ... · T6. Index 0 of the result is the untransformed base.
pub(crate) fn chain_poses(table: &DhTable, qs: &Joints) -> ChainPoses {
    let mut poses = [JointPose::default(); JOINT_COUNT + 1];
    let mut t = Transform::identity();

    for (i, p) in table.joints().iter().enumerate() {
        t = t * joint_transform(p, qs[i]);
        poses[i + 1] = JointPose {
            position: translation(&t),
            orientation: euler_from_matrix(&rotation_block(&t)),
        };
    }

    ChainPoses { poses, transform: t }
}

/// End effector pose and positions of all joints, as returned to the service layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseReport {
    pub position: [f64; 3],
    pub orientation: [f64; 3],
    /// Positions after each of the six joints, base excluded.
    pub joint_positions: [[f64; 3]; JOINT_COUNT],
}

impl From<&ChainPoses> for PoseReport {
    fn from(chain: &ChainPoses) -> Self {
        let ee = chain.end_effector();
        PoseReport {
            position: [ee.position.x, ee.position.y, ee.position.z],
            orientation: ee.orientation.as_array(),
            joint_positions: chain.joint_positions(),
        }
    }
}

/// Stateless forward kinematics for a single joint configuration (degrees).
/// Fails with `InvalidInput` if `angles` does not hold exactly one value per joint.
pub fn compute_pose(table: &DhTable, angles: &[f64]) -> Result<PoseReport, ParameterError> {
    let qs = joints_from_slice(angles).ok_or_else(|| {
        warn!("Rejected joint vector of length {}", angles.len());
        ParameterError::InvalidInput { expected: JOINT_COUNT, found: angles.len() }
    })?;
    Ok(PoseReport::from(&chain_poses(table, &qs)))
}
