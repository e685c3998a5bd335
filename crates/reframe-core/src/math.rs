use nalgebra::{Isometry3, Matrix3, Quaternion, UnitQuaternion, Vector3};

pub type Real = f64;

pub type Vec3 = Vector3<Real>;
pub type Mat3 = Matrix3<Real>;
pub type Quat = Quaternion<Real>;
pub type UnitQuat = UnitQuaternion<Real>;
pub type Iso3 = Isometry3<Real>;
