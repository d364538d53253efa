//! Raw training data for learned forward kinematics models.
//!
//! Joint configurations are drawn uniformly from a symmetric range and evaluated with the
//! batch path. Only raw arrays are produced here; normalization and storage belong to the
//! consumer.

use rand::Rng;
use tracing::{info, warn};

use crate::batch::{compute_batch, POSES_PER_SAMPLE};
use crate::kinematic_traits::{Joints, JOINTS_AT_ZERO};
use crate::kinematics_impl::chain_poses;
use crate::parameter_error::ParameterError;
use crate::parameters::DhTable;

/// Row of (x, y, z, roll, pitch, yaw).
pub type PoseRow = [f64; 6];

/// Default sampling range of joint angles, ± degrees.
pub const DEFAULT_ANGLE_RANGE: f64 = 75.0;

/// Largest accepted sampling range. The sampler scales the interval width slightly above
/// `2 * angle_range`, which must stay finite.
pub const MAX_ANGLE_RANGE: f64 = f64::MAX / 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Sampled joint angles, degrees.
    pub inputs: Vec<Joints>,
    /// End effector row of every sample.
    pub outputs: Vec<PoseRow>,
    /// Base and joint rows of every sample, base at index 0.
    pub metadata: Vec<[PoseRow; POSES_PER_SAMPLE]>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Expresses outputs and every metadata row relative to the home row.
    pub fn subtract_home(&mut self, home: &PoseRow) {
        fn sub(row: &mut PoseRow, home: &PoseRow) {
            row.iter_mut().zip(home.iter()).for_each(|(v, h)| *v -= h);
        }
        self.outputs.iter_mut().for_each(|row| sub(row, home));
        self.metadata
            .iter_mut()
            .flat_map(|sample| sample.iter_mut())
            .for_each(|row| sub(row, home));
    }
}

/// End effector row at the home position (all joint angles zero).
pub fn home_position(table: &DhTable) -> PoseRow {
    chain_poses(table, &JOINTS_AT_ZERO).end_effector().as_row()
}

#[derive(Debug, Clone, Copy)]
pub struct DatasetGenerator {
    table: DhTable,
    angle_range: f64,
}

impl DatasetGenerator {
    /// Samples every joint angle uniformly in [-angle_range, angle_range] degrees.
    /// A negative range is taken by its absolute value. Fails with `InvalidConfiguration`
    /// if the range is NaN or exceeds [`MAX_ANGLE_RANGE`].
    pub fn new(table: DhTable, angle_range: f64) -> Result<Self, ParameterError> {
        let angle_range = angle_range.abs();
        if angle_range.is_nan() || angle_range > MAX_ANGLE_RANGE {
            warn!("Rejected joint angle range {}", angle_range);
            return Err(ParameterError::InvalidConfiguration(format!(
                "joint angle range must be a number not above {:e}, got {}",
                MAX_ANGLE_RANGE, angle_range
            )));
        }
        Ok(DatasetGenerator { table, angle_range })
    }

    pub fn angle_range(&self) -> f64 {
        self.angle_range
    }

    /// Draws `num_samples` joint configurations.
    pub fn sample_joints<R: Rng>(&self, rng: &mut R, num_samples: usize) -> Vec<Joints> {
        let r = self.angle_range;
        (0..num_samples)
            .map(|_| std::array::from_fn(|_| if r > 0.0 { rng.gen_range(-r..=r) } else { 0.0 }))
            .collect()
    }

    /// Evaluates already sampled joint configurations.
    pub fn evaluate(&self, inputs: Vec<Joints>) -> Dataset {
        let out = compute_batch(&self.table, &inputs);
        let metadata = out.rows();
        let outputs = metadata.iter().map(|rows| rows[POSES_PER_SAMPLE - 1]).collect();
        Dataset { inputs, outputs, metadata }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R, num_samples: usize) -> Dataset {
        info!(
            "Generating {} samples with joint angles within ±{} degrees",
            num_samples, self.angle_range
        );
        self.evaluate(self.sample_joints(rng, num_samples))
    }
}
