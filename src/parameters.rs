//! Defines the DH parameter data structures

use tracing::warn;

use crate::kinematic_traits::{DH_ARITY, JOINT_COUNT};
use crate::parameter_error::ParameterError;
use crate::utils::round_to;

/// Denavit-Hartenberg parameters of a single joint. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DhParameter {
    /// Link length along the common normal.
    pub a: f64,

    /// Link twist about the common normal, degrees.
    pub alpha: f64,

    /// Link offset along the previous z axis.
    pub d: f64,

    /// Added to the commanded joint angle to get the DH theta, degrees.
    pub theta_offset: f64,
}

impl DhParameter {
    pub const fn new(a: f64, alpha: f64, d: f64, theta_offset: f64) -> Self {
        DhParameter { a, alpha, d, theta_offset }
    }

    /// Values in table row order [a, alpha, d, theta_offset].
    pub fn as_row(&self) -> [f64; DH_ARITY] {
        [self.a, self.alpha, self.d, self.theta_offset]
    }
}

/// DH parameters of all six joints. The table is only ever replaced as a whole.
/// See [parameters_robots.rs](parameters_robots.rs) for predefined tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DhTable {
    joints: [DhParameter; JOINT_COUNT],
}

impl DhTable {
    pub const fn new(joints: [DhParameter; JOINT_COUNT]) -> Self {
        DhTable { joints }
    }

    /// Builds the table from loosely shaped rows [a, alpha, d, theta_offset],
    /// as received from configuration or the service layer.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, ParameterError> {
        check_shape(rows).inspect_err(|e| warn!("Rejected DH table: {}", e))?;
        Ok(DhTable {
            joints: std::array::from_fn(|i| {
                let r = rows[i].as_ref();
                DhParameter::new(r[0], r[1], r[2], r[3])
            }),
        })
    }

    pub fn joints(&self) -> &[DhParameter; JOINT_COUNT] {
        &self.joints
    }

    pub fn rows(&self) -> [[f64; DH_ARITY]; JOINT_COUNT] {
        self.joints.map(|j| j.as_row())
    }

    /// Copy of this table with every value rounded to the given number of decimal places.
    pub fn rounded(&self, places: i32) -> Self {
        DhTable {
            joints: self.joints.map(|j| DhParameter {
                a: round_to(j.a, places),
                alpha: round_to(j.alpha, places),
                d: round_to(j.d, places),
                theta_offset: round_to(j.theta_offset, places),
            }),
        }
    }

    /// Convert to string yaml representation, readable by `DhTable::from_yaml_file`.
    pub fn to_yaml(&self) -> String {
        let rows = self
            .joints
            .iter()
            .map(|j| format!("  - [{}, {}, {}, {}]\n", j.a, j.alpha, j.d, j.theta_offset))
            .collect::<String>();
        format!("dh_parameters:\n{}", rows)
    }
}

impl std::ops::Index<usize> for DhTable {
    type Output = DhParameter;

    fn index(&self, index: usize) -> &DhParameter {
        &self.joints[index]
    }
}

fn check_shape<R: AsRef<[f64]>>(rows: &[R]) -> Result<(), ParameterError> {
    if rows.len() != JOINT_COUNT {
        return Err(ParameterError::InvalidConfiguration(format!(
            "expected {} joints, found {}", JOINT_COUNT, rows.len()
        )));
    }
    for (i, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        if len != DH_ARITY {
            return Err(ParameterError::InvalidConfiguration(format!(
                "joint {} has {} parameters, expected {}", i, len, DH_ARITY
            )));
        }
    }
    Ok(())
}

/// True if the table has exactly 6 rows of exactly 4 parameters.
pub fn validate_dh_table<R: AsRef<[f64]>>(rows: &[R]) -> bool {
    check_shape(rows).is_ok()
}

/// True if exactly one angle per joint is given.
pub fn validate_angles(angles: &[f64]) -> bool {
    angles.len() == JOINT_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize, arity: usize) -> Vec<Vec<f64>> {
        vec![vec![1.0; arity]; n]
    }

    #[test]
    fn test_validate_dh_table_joint_count() {
        assert!(validate_dh_table(&rows(6, 4)));
        assert!(!validate_dh_table(&rows(5, 4)));
        assert!(!validate_dh_table(&rows(7, 4)));
        assert!(!validate_dh_table::<Vec<f64>>(&[]));
    }

    #[test]
    fn test_validate_dh_table_arity() {
        let mut short = rows(6, 4);
        short[2] = vec![0.0; 3];
        assert!(!validate_dh_table(&short));

        let mut long = rows(6, 4);
        long[5] = vec![0.0; 5];
        assert!(!validate_dh_table(&long));
    }

    #[test]
    fn test_validate_angles() {
        assert!(validate_angles(&[0.0; 6]));
        assert!(!validate_angles(&[0.0; 5]));
        assert!(!validate_angles(&[0.0; 7]));
    }

    #[test]
    fn test_from_rows_keeps_order() {
        let table = DhTable::from_rows(&[
            [0.0, -90.0, 10.0, 0.0],
            [50.0, 0.0, 0.0, -90.0],
            [0.0, -90.0, 5.0, 0.0],
            [0.0, 90.0, 50.0, 0.0],
            [0.0, -90.0, 0.0, 0.0],
            [0.0, 0.0, 10.0, 180.0],
        ]).expect("valid table");

        assert_eq!(table[1], DhParameter::new(50.0, 0.0, 0.0, -90.0));
        assert_eq!(table[5].theta_offset, 180.0);
        assert_eq!(table, DhTable::reference_arm());
    }

    #[test]
    fn test_from_rows_rejects() {
        match DhTable::from_rows(&rows(5, 4)) {
            Err(ParameterError::InvalidConfiguration(msg)) => assert!(msg.contains("5")),
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
        let mut bad = rows(6, 4);
        bad[0].pop();
        assert!(matches!(DhTable::from_rows(&bad), Err(ParameterError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rounded() {
        let table = DhTable::new([DhParameter::new(1.234_56, -90.000_04, 0.1 + 0.2, 33.333_36); 6]);
        let r = table.rounded(4);
        assert_eq!(r[3].a, 1.2346);
        assert_eq!(r[3].alpha, -90.0);
        assert_eq!(r[3].d, 0.3);
        assert_eq!(r[3].theta_offset, 33.3334);
    }

    #[test]
    fn test_to_yaml() {
        let yaml = DhTable::reference_arm().to_yaml();
        assert!(yaml.starts_with("dh_parameters:\n"));
        assert!(yaml.contains("  - [50, 0, 0, -90]\n"));
        assert_eq!(yaml.lines().count(), 7);
    }
}
