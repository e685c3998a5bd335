//! Timestamped pose sequences.

use crate::math::Iso3;

/// A pose tagged with the timestamp token it was read with.
///
/// The stamp is opaque: pose tables carry timestamps as nanosecond
/// integers or scientific notation, and evaluation tools match
/// trajectories on the exact token. It is never parsed as a number here
/// and is echoed byte-for-byte on output.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampedPose {
    pub stamp: String,
    pub pose: Iso3,
}

impl TimestampedPose {
    pub fn new(stamp: impl Into<String>, pose: Iso3) -> Self {
        Self {
            stamp: stamp.into(),
            pose,
        }
    }
}

/// An ordered pose sequence, in acquisition order.
pub type Trajectory = Vec<TimestampedPose>;

/// Keep every `stride`-th pose, starting with the first.
///
/// Used for sparse exports of long trajectories; `stride` of 1 keeps
/// everything.
pub fn decimate(trajectory: &Trajectory, stride: usize) -> Trajectory {
    let stride = stride.max(1);
    trajectory
        .iter()
        .step_by(stride)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamped(stamps: &[&str]) -> Trajectory {
        stamps
            .iter()
            .map(|s| TimestampedPose::new(*s, Iso3::identity()))
            .collect()
    }

    #[test]
    fn decimate_keeps_every_nth_from_the_first() {
        let traj = stamped(&["0", "1", "2", "3", "4", "5", "6"]);
        let sparse = decimate(&traj, 3);
        let stamps: Vec<&str> = sparse.iter().map(|p| p.stamp.as_str()).collect();
        assert_eq!(stamps, ["0", "3", "6"]);
    }

    #[test]
    fn decimate_stride_one_is_identity() {
        let traj = stamped(&["10", "20"]);
        assert_eq!(decimate(&traj, 1), traj);
        assert_eq!(decimate(&traj, 0), traj);
    }
}
