//! KITTI-dialect pose tables: a timestamp followed by a flattened 3x4
//! transform, row-major: `timestamp r11 r12 r13 tx r21 r22 r23 ty r31 r32
//! r33 tz`.

use crate::{parse_reals, FormatError};
use log::debug;
use reframe_core::{
    pose_from_row_major_3x4, row_major_3x4_from_pose, Real, TimestampedPose, Trajectory,
};

/// Fields per KITTI row.
pub const KITTI_FIELDS: usize = 13;

/// Parse one KITTI row. `line_no` is 1-based and only used for errors.
pub fn parse_kitti_line(line: &str, line_no: usize) -> Result<TimestampedPose, FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != KITTI_FIELDS {
        return Err(FormatError::FieldCount {
            line: line_no,
            expected: KITTI_FIELDS,
            found: tokens.len(),
        });
    }

    let values = parse_reals(&tokens[1..], line_no)?;
    let mut flat = [0.0 as Real; 12];
    flat.copy_from_slice(&values);
    Ok(TimestampedPose::new(
        tokens[0],
        pose_from_row_major_3x4(&flat),
    ))
}

/// Parse a whole KITTI table. Blank lines are skipped.
pub fn parse_kitti(text: &str) -> Result<Trajectory, FormatError> {
    let mut trajectory = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        trajectory.push(parse_kitti_line(line, idx + 1)?);
    }
    debug!("parsed {} KITTI poses", trajectory.len());
    Ok(trajectory)
}

/// Serialize one pose as a KITTI row with `precision` decimal digits per
/// numeric field. The timestamp token is written back verbatim.
pub fn format_kitti_line(pose: &TimestampedPose, precision: usize) -> String {
    let flat = row_major_3x4_from_pose(&pose.pose);
    let mut out = pose.stamp.clone();
    for value in flat {
        out.push(' ');
        out.push_str(&format!("{value:.precision$}"));
    }
    out
}

/// Serialize a trajectory as a KITTI table, one row per pose.
pub fn format_kitti(trajectory: &Trajectory, precision: usize) -> String {
    let mut out = String::new();
    for pose in trajectory {
        out.push_str(&format_kitti_line(pose, precision));
        out.push('\n');
    }
    out
}
