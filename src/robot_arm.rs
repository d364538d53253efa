//! Stateful single arm model used by the service layer.
//!
//! [`RobotArm`] keeps the DH table, the last commanded joint angles and the pose derived from
//! them. The cached pose is always consistent with (table, angles): replacing the table
//! recomputes it at once. [`SharedRobotArm`] wraps the model for use from several threads,
//! serializing writers and letting readers proceed concurrently.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::kinematic_traits::{ChainPoses, Joints, Orientation, Transform, JOINTS_AT_ZERO, JOINT_COUNT};
use crate::kinematics_impl::chain_poses;
use crate::parameter_error::ParameterError;
use crate::parameters::DhTable;
use crate::utils::{joints_from_slice, round_to};

/// Decimal places used when presenting DH parameters.
pub const DH_PRESENTATION_PLACES: i32 = 4;

/// Pose of the end effector: position in table length units, orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndEffectorPose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EndEffectorPose {
    /// Rounded for display: 4 decimal places for lengths and 2 for angles.
    pub fn rounded(&self) -> Self {
        EndEffectorPose {
            x: round_to(self.x, 4),
            y: round_to(self.y, 4),
            z: round_to(self.z, 4),
            roll: round_to(self.roll, 2),
            pitch: round_to(self.pitch, 2),
            yaw: round_to(self.yaw, 2),
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::new(self.roll, self.pitch, self.yaw)
    }
}

impl From<&ChainPoses> for EndEffectorPose {
    fn from(chain: &ChainPoses) -> Self {
        let ee = chain.end_effector();
        EndEffectorPose {
            x: ee.position.x,
            y: ee.position.y,
            z: ee.position.z,
            roll: ee.orientation.roll,
            pitch: ee.orientation.pitch,
            yaw: ee.orientation.yaw,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RobotArm {
    table: DhTable,
    joint_angles: Joints,
    chain: ChainPoses,
}

impl RobotArm {
    /// Creates the arm at the home position (all joint angles zero).
    pub fn new(table: DhTable) -> Self {
        RobotArm {
            table,
            joint_angles: JOINTS_AT_ZERO,
            chain: chain_poses(&table, &JOINTS_AT_ZERO),
        }
    }

    /// Creates the arm from loosely shaped rows [a, alpha, d, theta_offset].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ParameterError> {
        Ok(Self::new(DhTable::from_rows(rows)?))
    }

    /// Replaces the whole DH table and recomputes the pose for the current joint angles.
    pub fn set_dh_table(&mut self, table: DhTable) {
        info!("Replacing DH table");
        self.table = table;
        self.chain = chain_poses(&self.table, &self.joint_angles);
    }

    /// Validates and replaces the DH table. On error the arm is left unchanged.
    pub fn set_dh_params<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> Result<(), ParameterError> {
        let table = DhTable::from_rows(rows)?;
        self.set_dh_table(table);
        Ok(())
    }

    /// DH table rounded to 4 decimal places for presentation.
    pub fn get_dh_params(&self) -> DhTable {
        self.table.rounded(DH_PRESENTATION_PLACES)
    }

    /// DH table exactly as configured.
    pub fn dh_table(&self) -> &DhTable {
        &self.table
    }

    /// Moves the arm to the given joint angles (degrees) and returns the end effector pose.
    /// On error nothing is recomputed and the cached pose is kept.
    pub fn set_pose(&mut self, angles: &[f64]) -> Result<EndEffectorPose, ParameterError> {
        let qs = joints_from_slice(angles).ok_or_else(|| {
            warn!("Rejected joint vector of length {}", angles.len());
            ParameterError::InvalidInput { expected: JOINT_COUNT, found: angles.len() }
        })?;
        Ok(self.set_joints(&qs))
    }

    /// Same as [`RobotArm::set_pose`] for a correctly sized joint array.
    pub fn set_joints(&mut self, qs: &Joints) -> EndEffectorPose {
        debug!("Setting joints {:?}", qs);
        self.joint_angles = *qs;
        self.chain = chain_poses(&self.table, qs);
        self.get_pose()
    }

    /// Last computed end effector pose.
    pub fn get_pose(&self) -> EndEffectorPose {
        EndEffectorPose::from(&self.chain)
    }

    /// Positions of the six joints, base excluded.
    pub fn get_joint_positions(&self) -> [[f64; 3]; JOINT_COUNT] {
        self.chain.joint_positions()
    }

    /// All cached joint poses including the base at index 0.
    pub fn joint_poses(&self) -> &ChainPoses {
        &self.chain
    }

    pub fn joint_angles(&self) -> &Joints {
        &self.joint_angles
    }

    /// Final transform of the chain.
    pub fn transform(&self) -> &Transform {
        &self.chain.transform
    }
}

/// [`RobotArm`] shared between threads. Writers (`set_pose`, `set_dh_params`) are serialized;
/// readers see either the state before or after a write, never a partial update.
#[derive(Debug, Clone)]
pub struct SharedRobotArm {
    inner: Arc<RwLock<RobotArm>>,
}

impl SharedRobotArm {
    pub fn new(arm: RobotArm) -> Self {
        SharedRobotArm { inner: Arc::new(RwLock::new(arm)) }
    }

    // A panicking writer cannot leave a partial update behind: all fields are
    // assigned only after the chain has been computed.
    fn read(&self) -> RwLockReadGuard<'_, RobotArm> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, RobotArm> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_pose(&self, angles: &[f64]) -> Result<EndEffectorPose, ParameterError> {
        self.write().set_pose(angles)
    }

    pub fn set_dh_params<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<(), ParameterError> {
        // Validate outside the lock
        let table = DhTable::from_rows(rows)?;
        self.write().set_dh_table(table);
        Ok(())
    }

    pub fn get_pose(&self) -> EndEffectorPose {
        self.read().get_pose()
    }

    pub fn get_joint_positions(&self) -> [[f64; 3]; JOINT_COUNT] {
        self.read().get_joint_positions()
    }

    pub fn get_dh_params(&self) -> DhTable {
        self.read().get_dh_params()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> RobotArm {
        self.read().clone()
    }
}
