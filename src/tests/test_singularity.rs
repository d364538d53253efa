//! Gimbal lock handling must pick the same Euler branch in the single pose and batch paths.

use crate::batch::compute_batch;
use crate::euler::is_singular;
use crate::kinematics_impl::compute_pose;
use crate::parameters::{DhParameter, DhTable};
use crate::utils::rotation_block;

const SMALL: f64 = 1e-6;

/// Joint 1 yaws the arm, joint 2 pitches it (about -y, so pitch = -q2), the rest is inert.
fn yaw_pitch_table() -> DhTable {
    let mut joints = [DhParameter::default(); 6];
    joints[0] = DhParameter::new(0.0, 90.0, 0.0, 0.0);
    joints[1] = DhParameter::new(0.0, -90.0, 0.0, 0.0);
    DhTable::new(joints)
}

// (q2, singular, roll, pitch, yaw) with q1 = 30
const CASES: [(f64, bool, f64, f64, f64); 6] = [
    (-90.0, true, -30.0, 90.0, 0.0),
    (-89.999_99, true, -30.0, 89.999_99, 0.0),
    (-89.999, false, 0.0, 89.999, 30.0),
    (90.0, true, 30.0, -90.0, 0.0),
    (89.999_99, true, 30.0, -89.999_99, 0.0),
    (89.999, false, 0.0, -89.999, 30.0),
];

#[test]
fn test_scalar_branch_selection() {
    let table = yaw_pitch_table();
    for &(q2, singular, roll, pitch, yaw) in CASES.iter() {
        let report = compute_pose(&table, &[30.0, q2, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let [r, p, y] = report.orientation;
        assert!((r - roll).abs() < SMALL, "q2 = {}: roll {} != {}", q2, r, roll);
        assert!((p - pitch).abs() < SMALL, "q2 = {}: pitch {} != {}", q2, p, pitch);
        assert!((y - yaw).abs() < SMALL, "q2 = {}: yaw {} != {}", q2, y, yaw);
        if singular {
            assert_eq!(y, 0.0);
        }
    }
}

#[test]
fn test_batch_branch_selection_per_row() {
    // Singular and regular rows interleaved in one batch
    let table = yaw_pitch_table();
    let batch: Vec<[f64; 6]> = CASES.iter().map(|c| [30.0, c.0, 0.0, 0.0, 0.0, 0.0]).collect();
    let out = compute_batch(&table, &batch);

    for (b, &(q2, singular, ..)) in CASES.iter().enumerate() {
        let sample = out.sample(b).unwrap();
        assert_eq!(is_singular(&rotation_block(&sample.transform)), singular, "q2 = {}", q2);

        let scalar = compute_pose(&table, &batch[b]).unwrap();
        assert_eq!(sample.end_effector().orientation.as_array(), scalar.orientation);
    }
}

#[test]
fn test_singular_row_unaffected_by_neighbours() {
    let table = yaw_pitch_table();
    let singular_row = [30.0, -90.0, 0.0, 0.0, 0.0, 0.0];
    let alone = compute_batch(&table, &[singular_row]);
    let mixed = compute_batch(&table, &[[30.0, -45.0, 0.0, 0.0, 0.0, 0.0], singular_row, [0.0; 6]]);
    assert_eq!(alone.sample(0), mixed.sample(1));
}
