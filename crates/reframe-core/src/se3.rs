//! SE(3) conversions at the interchange boundary.
//!
//! Pose tables store quaternions in `(x, y, z, w)` order while nalgebra
//! constructs them from `(w, x, y, z)`; the reorder lives in this module
//! and nowhere else. Flattened 3x4 row-major matrices are the other
//! interchange form, shared by the KITTI dialect and the extrinsic
//! configuration.

use crate::math::{Iso3, Mat3, Quat, Real, UnitQuat, Vec3};
use nalgebra::{Rotation3, Translation3};

/// Build a pose from a translation and an interchange-order quaternion
/// `[qx, qy, qz, qw]`.
///
/// The quaternion is renormalized, so values read from text are safe to
/// pass directly.
pub fn pose_from_quat_xyzw(translation: Vec3, quat: [Real; 4]) -> Iso3 {
    let q = Quat::new(quat[3], quat[0], quat[1], quat[2]);
    let rot = UnitQuat::from_quaternion(q);
    Iso3::from_parts(Translation3::from(translation), rot)
}

/// Interchange-order quaternion `[qx, qy, qz, qw]` of a pose.
pub fn quat_xyzw_from_pose(pose: &Iso3) -> [Real; 4] {
    let q = pose.rotation.into_inner();
    [q.coords[0], q.coords[1], q.coords[2], q.coords[3]]
}

/// Build a pose from a row-major flattened 3x4 matrix
/// `[r11 r12 r13 tx r21 r22 r23 ty r31 r32 r33 tz]`.
pub fn pose_from_row_major_3x4(values: &[Real; 12]) -> Iso3 {
    let r = Mat3::new(
        values[0], values[1], values[2], values[4], values[5], values[6], values[8], values[9],
        values[10],
    );
    let t = Vec3::new(values[3], values[7], values[11]);
    let rot = Rotation3::from_matrix_unchecked(r);
    Iso3::from_parts(
        Translation3::from(t),
        UnitQuat::from_rotation_matrix(&rot),
    )
}

/// Row-major flattened 3x4 matrix of a pose.
pub fn row_major_3x4_from_pose(pose: &Iso3) -> [Real; 12] {
    let rot = pose.rotation.to_rotation_matrix();
    let m = rot.matrix();
    let t = pose.translation.vector;
    [
        m[(0, 0)],
        m[(0, 1)],
        m[(0, 2)],
        t.x,
        m[(1, 0)],
        m[(1, 1)],
        m[(1, 2)],
        t.y,
        m[(2, 0)],
        m[(2, 1)],
        m[(2, 2)],
        t.z,
    ]
}

/// Relative motion from `p` to `q`: the transform an observer riding on
/// `p` would measure `q` to have undergone.
pub fn between(p: &Iso3, q: &Iso3) -> Iso3 {
    p.inverse() * q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_pose, pose_error};

    // (1, 2, 3, 4) / sqrt(30): every component distinct, so any
    // transposition in the (x, y, z, w) reorder shows up.
    const Q_XYZW: [Real; 4] = [
        0.182_574_185_835_055_37,
        0.365_148_371_670_110_74,
        0.547_722_557_505_166_1,
        0.730_296_743_340_221_5,
    ];

    #[test]
    fn quat_xyzw_maps_components_into_place() {
        let pose = pose_from_quat_xyzw(Vec3::zeros(), Q_XYZW);
        let q = pose.rotation;
        assert!((q.i - Q_XYZW[0]).abs() < 1e-12, "x landed on {}", q.i);
        assert!((q.j - Q_XYZW[1]).abs() < 1e-12, "y landed on {}", q.j);
        assert!((q.k - Q_XYZW[2]).abs() < 1e-12, "z landed on {}", q.k);
        assert!((q.w - Q_XYZW[3]).abs() < 1e-12, "w landed on {}", q.w);

        let back = quat_xyzw_from_pose(&pose);
        for (a, b) in back.iter().zip(Q_XYZW.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn quat_xyzw_renormalizes_text_scale() {
        let scaled = [Q_XYZW[0] * 2.0, Q_XYZW[1] * 2.0, Q_XYZW[2] * 2.0, Q_XYZW[3] * 2.0];
        let a = pose_from_quat_xyzw(Vec3::zeros(), Q_XYZW);
        let b = pose_from_quat_xyzw(Vec3::zeros(), scaled);
        let (_, ang) = pose_error(&a, &b);
        assert!(ang < 1e-12, "rotation angle after renormalization: {ang}");
    }

    #[test]
    fn row_major_3x4_round_trip() {
        let pose = make_pose((0.3, -0.2, 0.9), (1.5, -0.25, 4.0));
        let flat = row_major_3x4_from_pose(&pose);
        let back = pose_from_row_major_3x4(&flat);
        let (dt, ang) = pose_error(&pose, &back);
        assert!(dt < 1e-12 && ang < 1e-9, "dt = {dt}, ang = {ang}");
    }

    #[test]
    fn compose_with_inverse_is_identity() {
        let pose = make_pose((0.7, 0.1, -0.4), (-2.0, 0.5, 1.25));
        let (dt, ang) = pose_error(&(pose * pose.inverse()), &Iso3::identity());
        assert!(dt < 1e-9 && ang < 1e-9, "dt = {dt}, ang = {ang}");
        let (dt, ang) = pose_error(&(pose.inverse() * pose), &Iso3::identity());
        assert!(dt < 1e-9 && ang < 1e-9, "dt = {dt}, ang = {ang}");
    }

    #[test]
    fn between_recovers_target_pose() {
        let p = make_pose((0.1, 0.2, -0.3), (0.0, 1.0, 2.0));
        let q = make_pose((-0.4, 0.05, 0.6), (3.0, -1.0, 0.5));
        let rel = between(&p, &q);
        let (dt, ang) = pose_error(&(p * rel), &q);
        assert!(dt < 1e-9 && ang < 1e-9, "dt = {dt}, ang = {ang}");
    }
}
