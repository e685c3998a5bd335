//! Rigid re-origin of an estimated trajectory.
//!
//! Given absolute poses tracked for one sensor and the fixed extrinsic
//! offset to a second sensor on the same body, [`reorigin`] produces the
//! absolute poses the second sensor would have reported, by re-chaining
//! the measured relative motions through the extrinsic (the hand-eye
//! conjugation `t2s * rel * s2t`).
//!
//! The output keeps the input's length and timestamp sequence, and the
//! relative motion between consecutive output poses, conjugated back
//! through the extrinsic, equals the corresponding input relative motion.
//! A single forward pass; the input is never mutated.

use log::debug;
use reframe_core::{between, ExtrinsicTransform, Real, TimestampedPose, Trajectory};
use thiserror::Error;

/// Largest accepted orthonormality defect for the extrinsic rotation.
///
/// Extrinsics entered as text carry nine-ish significant digits, so
/// legitimate inputs score far below this while scaled or reflected
/// matrices score far above.
pub const ORTHONORMALITY_TOLERANCE: Real = 1e-6;

#[derive(Debug, Error)]
pub enum ReoriginError {
    #[error("input trajectory is empty; there is no anchor pose to re-origin from")]
    EmptyTrajectory,
    #[error(
        "extrinsic rotation is not orthonormal (defect {defect:.3e}, tolerance {tolerance:.3e})"
    )]
    MalformedTransform { defect: Real, tolerance: Real },
}

/// Re-express `trajectory` as if the target sensor had been tracked from
/// the start.
///
/// The first output pose is `P0 * target_to_source`: it anchors the
/// target-frame convention while keeping the input's spatial starting
/// point. It is deliberately not re-zeroed to identity; downstream
/// consumers rely on this anchoring. Every subsequent pose re-applies the
/// relative motion measured between consecutive *input* poses:
///
/// ```text
/// out[i] = out[i-1] * t2s * between(P[i-1], P[i]) * s2t
/// ```
pub fn reorigin(
    trajectory: &Trajectory,
    source_to_target: &ExtrinsicTransform,
) -> Result<Trajectory, ReoriginError> {
    let defect = source_to_target.rotation_defect();
    if defect > ORTHONORMALITY_TOLERANCE {
        return Err(ReoriginError::MalformedTransform {
            defect,
            tolerance: ORTHONORMALITY_TOLERANCE,
        });
    }

    let (first, rest) = trajectory
        .split_first()
        .ok_or(ReoriginError::EmptyTrajectory)?;

    let s2t = source_to_target.to_isometry();
    let t2s = s2t.inverse();

    let mut output = Trajectory::with_capacity(trajectory.len());
    let mut prev_input = first.pose;
    let mut prev_output = first.pose * t2s;
    output.push(TimestampedPose::new(first.stamp.clone(), prev_output));

    for current in rest {
        let rel = between(&prev_input, &current.pose);
        let next = prev_output * t2s * rel * s2t;
        output.push(TimestampedPose::new(current.stamp.clone(), next));
        prev_input = current.pose;
        prev_output = next;
    }

    debug!(
        "re-origined {} poses (extrinsic defect {:.3e})",
        output.len(),
        defect
    );
    Ok(output)
}
