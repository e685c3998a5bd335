//! Core pose and trajectory primitives for `reframe-rs`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec3`, `Iso3`, ...),
//! - SE(3) boundary conversions between the on-disk interchange
//!   representations (quaternion in `x, y, z, w` order, flattened 3x4
//!   matrices) and [`Iso3`],
//! - trajectory containers ([`TimestampedPose`], [`Trajectory`]),
//! - the fixed sensor-to-sensor [`ExtrinsicTransform`].

/// Fixed rigid offset between two sensor frames.
pub mod extrinsic;
/// Linear algebra type aliases.
pub mod math;
/// SE(3) conversions and relative-motion helpers.
pub mod se3;
/// Timestamped pose sequences.
pub mod trajectory;

pub mod test_utils;

pub use extrinsic::*;
pub use math::*;
pub use se3::*;
pub use trajectory::*;
