//! Forward kinematics over a batch of joint configurations.
//!
//! Every row is evaluated by the same scalar kernel as [`crate::kinematics_impl::compute_pose`],
//! so `compute_batch(table, qs)[b]` is bit-identical to the single pose result for `qs[b]`.
//! Rows are independent: the result of a row does not depend on the batch size or on its
//! position in the batch, so batches may be split freely. With the `parallel` feature rows
//! are distributed over the rayon thread pool; the DH table is shared read-only.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::kinematic_traits::{ChainPoses, Joints, Transform, JOINT_COUNT};
use crate::kinematics_impl::chain_poses;
use crate::parameter_error::ParameterError;
use crate::parameters::DhTable;
use crate::utils::joints_from_slice;

/// Rows per sample in the batch output: the base plus one per joint.
pub const POSES_PER_SAMPLE: usize = JOINT_COUNT + 1;

/// Result of a batch evaluation, one [`ChainPoses`] per input row in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutput {
    samples: Vec<ChainPoses>,
}

impl BatchOutput {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[ChainPoses] {
        &self.samples
    }

    pub fn sample(&self, b: usize) -> Option<&ChainPoses> {
        self.samples.get(b)
    }

    /// Positions [B][7][3], base included at index 0.
    pub fn positions(&self) -> Vec<[[f64; 3]; POSES_PER_SAMPLE]> {
        self.samples
            .iter()
            .map(|s| s.poses.map(|p| [p.position.x, p.position.y, p.position.z]))
            .collect()
    }

    /// Orientations (roll, pitch, yaw in degrees) [B][7][3], base included at index 0.
    pub fn orientations(&self) -> Vec<[[f64; 3]; POSES_PER_SAMPLE]> {
        self.samples
            .iter()
            .map(|s| s.poses.map(|p| p.orientation.as_array()))
            .collect()
    }

    /// Rows (x, y, z, roll, pitch, yaw) [B][7][6], base included at index 0.
    pub fn rows(&self) -> Vec<[[f64; 6]; POSES_PER_SAMPLE]> {
        self.samples.iter().map(|s| s.poses.map(|p| p.as_row())).collect()
    }

    /// Final transforms [B].
    pub fn transforms(&self) -> Vec<Transform> {
        self.samples.iter().map(|s| s.transform).collect()
    }
}

/// Evaluates forward kinematics for every joint configuration (degrees) in `batch`.
pub fn compute_batch(table: &DhTable, batch: &[Joints]) -> BatchOutput {
    debug!("Computing forward kinematics for a batch of {} samples", batch.len());

    #[cfg(feature = "parallel")]
    let samples = batch.par_iter().map(|qs| chain_poses(table, qs)).collect();

    #[cfg(not(feature = "parallel"))]
    let samples = batch.iter().map(|qs| chain_poses(table, qs)).collect();

    BatchOutput { samples }
}

/// Same as [`compute_batch`] for rows of unchecked length. Fails with `InvalidInput` on the
/// first row that does not hold exactly one angle per joint; nothing is computed then.
pub fn try_compute_batch<R: AsRef<[f64]>>(table: &DhTable, rows: &[R]) -> Result<BatchOutput, ParameterError> {
    let batch = rows
        .iter()
        .enumerate()
        .map(|(b, row)| {
            let row = row.as_ref();
            joints_from_slice(row).ok_or_else(|| {
                warn!("Rejected batch row {} of length {}", b, row.len());
                ParameterError::InvalidInput { expected: JOINT_COUNT, found: row.len() }
            })
        })
        .collect::<Result<Vec<Joints>, _>>()?;
    Ok(compute_batch(table, &batch))
}
