//! Hardcoded DH tables

use crate::parameters::{DhParameter, DhTable};

#[allow(dead_code)]
impl DhTable {
    /// All parameters zero: every joint frame coincides with the base.
    pub fn zero() -> Self {
        DhTable::new([DhParameter::default(); 6])
    }

    /// Small desktop 6 axis arm used for dataset generation. Lengths in mm, angles in degrees.
    /// Joint 2 is offset by -90 and joint 6 by 180 so that the home position points the tool
    /// forward along x.
    pub fn reference_arm() -> Self {
        DhTable::new([
            DhParameter::new(0.0, -90.0, 10.0, 0.0),
            DhParameter::new(50.0, 0.0, 0.0, -90.0),
            DhParameter::new(0.0, -90.0, 5.0, 0.0),
            DhParameter::new(0.0, 90.0, 50.0, 0.0),
            DhParameter::new(0.0, -90.0, 0.0, 0.0),
            DhParameter::new(0.0, 0.0, 10.0, 180.0),
        ])
    }

    /// Same arm with a longer tool flange on joint 6 (d = 40 mm).
    pub fn reference_arm_long_flange() -> Self {
        let mut joints = *Self::reference_arm().joints();
        joints[5].d = 40.0;
        DhTable::new(joints)
    }
}
