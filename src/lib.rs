//! Rust implementation of forward kinematics for six joint serial manipulators described
//! with Denavit-Hartenberg (DH) parameters.
//!
//! The crate computes the pose of every joint frame and of the end effector (position and
//! roll/pitch/yaw orientation) for a joint configuration, and does the same over large batches
//! of configurations for dataset generation. The batch path evaluates every row with the same
//! kernel as the single pose path, so both produce identical numbers.
//!
//! # Features
//!
//! - Fixed size DH table (6 joints × [a, alpha, d, theta offset]), validated once when built.
//! - Positions and orientations of all joints, not only of the end effector.
//! - Gimbal lock (pitch = ±90°) is detected per sample and handled the same way everywhere.
//! - Stateful arm model with cached pose for the service layer, optionally shared between threads.
//! - Batches are evaluated in parallel with rayon (feature `parallel`).
//! - Random joint configurations and raw training arrays for learned kinematic models.
//! - DH tables can be read from YAML (feature `allow_filesystem`).
//!
//! # Conventions
//!
//! Angles are in degrees at every public boundary; radians are only used inside the transform
//! of a single joint. Lengths are in the units of the DH table. The transform of joint i is
//!
//! ```text
//! T_i = Rot_z(q_i + theta_offset_i) · Trans_z(d_i) · Trans_x(a_i) · Rot_x(alpha_i)
//! ```
//!
//! and the chain composes as T = T_1 · T_2 · ... · T_6.
//!
//! ```
//! use dh_kinematics::parameters::DhTable;
//! use dh_kinematics::kinematics_impl::compute_pose;
//!
//! let report = compute_pose(&DhTable::reference_arm(), &[0.0; 6]).unwrap();
//! assert!((report.position[0] - 60.0).abs() < 1e-9);
//! ```

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod dh_transform;
pub mod euler;
pub mod kinematics_impl;

pub mod batch;

pub mod robot_arm;

pub mod dataset;

#[cfg(test)]
mod tests;
