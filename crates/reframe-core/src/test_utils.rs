//! Helpers shared by the workspace test suites.
//!
//! This module is public so integration tests in the other crates can use
//! it, but it is not intended for production use.

use crate::math::{Iso3, Real};
use nalgebra::{Rotation3, Translation3};

/// Build a pose from Euler angles (roll, pitch, yaw) and a translation.
pub fn make_pose(angles: (Real, Real, Real), t: (Real, Real, Real)) -> Iso3 {
    let rot = Rotation3::from_euler_angles(angles.0, angles.1, angles.2);
    let tr = Translation3::new(t.0, t.1, t.2);
    Iso3::from_parts(tr, rot.into())
}

/// Compare two poses: translation distance and rotation angle in radians.
pub fn pose_error(a: &Iso3, b: &Iso3) -> (Real, Real) {
    let dt = (a.translation.vector - b.translation.vector).norm();
    let ang = a.rotation.angle_to(&b.rotation);
    (dt, ang)
}
