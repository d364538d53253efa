use std::path::Path;

use anyhow::{Context, Result};

use crate::parameter_error::ParameterError;
use crate::parameters::DhTable;
use crate::robot_arm::RobotArm;

const DATA: &str = "src/tests/data";

fn load(name: &str) -> Result<DhTable> {
    let path = Path::new(DATA).join(name);
    DhTable::from_yaml_file(&path)
        .with_context(|| format!("Failed to load DH table from {}", path.display()))
}

#[test]
fn test_table_from_yaml() -> Result<()> {
    let loaded = load("reference_arm.yaml")?;
    assert_eq!(loaded, DhTable::reference_arm());
    Ok(())
}

#[test]
fn test_table_from_yaml_reals() -> Result<()> {
    let loaded = load("long_flange_reals.yaml")?;
    assert_eq!(loaded, DhTable::reference_arm_long_flange());

    let arm = RobotArm::new(loaded);
    assert!((arm.get_pose().x - 90.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_yaml_wrong_joint_count() {
    let err = load("five_joints.yaml").unwrap_err();
    let cause = err.downcast_ref::<ParameterError>().expect("ParameterError cause");
    assert!(matches!(cause, ParameterError::InvalidConfiguration(_)));
}

#[test]
fn test_yaml_wrong_arity() {
    let err = DhTable::from_yaml_file(Path::new(DATA).join("short_row.yaml")).unwrap_err();
    match err {
        ParameterError::InvalidConfiguration(msg) => assert!(msg.contains("joint 1")),
        other => panic!("Expected InvalidConfiguration, got {}", other),
    }
}

#[test]
fn test_yaml_missing_file() {
    let err = DhTable::from_yaml_file(Path::new(DATA).join("no_such_robot.yaml")).unwrap_err();
    assert!(matches!(err, ParameterError::IoError(_)));
}

#[test]
fn test_yaml_malformed_content() {
    assert!(matches!(DhTable::from_yaml_str("robot: x\n"), Err(ParameterError::ParseError(_))));
    assert!(matches!(
        DhTable::from_yaml_str("dh_parameters:\n  - [0, a, 0, 0]\n"),
        Err(ParameterError::ParseError(_))
    ));
    assert!(matches!(
        DhTable::from_yaml_str("dh_parameters: [[0, .nan, 0, 0]]\n"),
        Err(ParameterError::InvalidConfiguration(_))
    ));
    assert!(matches!(DhTable::from_yaml_str(""), Err(ParameterError::ParseError(_))));
}

#[test]
fn test_yaml_roundtrip_of_to_yaml() -> Result<()> {
    let table = DhTable::reference_arm_long_flange();
    let parsed = DhTable::from_yaml_str(&table.to_yaml())?;
    assert_eq!(parsed, table);
    Ok(())
}
