//! The fixed rigid offset between the tracked sensor frame and the frame
//! the trajectory should be re-expressed in.
//!
//! Extrinsics arrive from configuration as 12 row-major reals (a 3x4
//! matrix, rotation columns interleaved with the translation column, same
//! layout as a KITTI row body). The rotation part is kept as a raw matrix
//! so its orthonormality can be checked before it is ever used as a
//! rotation.

use crate::math::{Iso3, Mat3, Real, UnitQuat, Vec3};
use nalgebra::{Rotation3, Translation3};

/// Rigid source-to-target sensor offset, constant for a whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrinsicTransform {
    pub rotation: Mat3,
    pub translation: Vec3,
}

impl ExtrinsicTransform {
    /// Build from a row-major flattened 3x4 matrix
    /// `[r11 r12 r13 tx r21 r22 r23 ty r31 r32 r33 tz]`.
    pub fn from_row_major(values: &[Real; 12]) -> Self {
        let rotation = Mat3::new(
            values[0], values[1], values[2], values[4], values[5], values[6], values[8],
            values[9], values[10],
        );
        let translation = Vec3::new(values[3], values[7], values[11]);
        Self {
            rotation,
            translation,
        }
    }

    pub fn identity() -> Self {
        Self {
            rotation: Mat3::identity(),
            translation: Vec3::zeros(),
        }
    }

    /// Build from an isometry. The rotation part is exact by construction,
    /// so the defect check passes up to floating-point noise.
    pub fn from_isometry(pose: &Iso3) -> Self {
        Self {
            rotation: *pose.rotation.to_rotation_matrix().matrix(),
            translation: pose.translation.vector,
        }
    }

    /// How far the rotation part is from a proper rotation: the largest
    /// entry of `|R^T R - I|`, or `|det R - 1|`, whichever is worse.
    ///
    /// Zero for an exact member of SO(3); a reflection scores 2 through
    /// the determinant term even though its Gram matrix is clean.
    pub fn rotation_defect(&self) -> Real {
        let gram = self.rotation.transpose() * self.rotation;
        let gram_defect = (gram - Mat3::identity()).abs().max();
        let det_defect = (self.rotation.determinant() - 1.0).abs();
        gram_defect.max(det_defect)
    }

    /// Interpret the raw parts as an isometry.
    ///
    /// Callers gate on [`rotation_defect`](Self::rotation_defect) first; a
    /// skewed matrix passed through here would be silently projected onto
    /// the nearest rotation by the quaternion conversion.
    pub fn to_isometry(&self) -> Iso3 {
        let rot = Rotation3::from_matrix_unchecked(self.rotation);
        Iso3::from_parts(
            Translation3::from(self.translation),
            UnitQuat::from_rotation_matrix(&rot),
        )
    }
}

impl Default for ExtrinsicTransform {
    fn default() -> Self {
        Self::identity()
    }
}
