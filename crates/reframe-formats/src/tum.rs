//! TUM-dialect pose tables: `timestamp tx ty tz qx qy qz qw`.

use crate::{parse_reals, FormatError};
use log::debug;
use reframe_core::{pose_from_quat_xyzw, quat_xyzw_from_pose, TimestampedPose, Trajectory, Vec3};

/// Fields per TUM row.
pub const TUM_FIELDS: usize = 8;

/// Parse one TUM row. `line_no` is 1-based and only used for errors.
pub fn parse_tum_line(line: &str, line_no: usize) -> Result<TimestampedPose, FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != TUM_FIELDS {
        return Err(FormatError::FieldCount {
            line: line_no,
            expected: TUM_FIELDS,
            found: tokens.len(),
        });
    }

    let values = parse_reals(&tokens[1..], line_no)?;
    let translation = Vec3::new(values[0], values[1], values[2]);
    let quat = [values[3], values[4], values[5], values[6]];
    Ok(TimestampedPose::new(
        tokens[0],
        pose_from_quat_xyzw(translation, quat),
    ))
}

/// Parse a whole TUM table. Blank lines are skipped.
pub fn parse_tum(text: &str) -> Result<Trajectory, FormatError> {
    let mut trajectory = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        trajectory.push(parse_tum_line(line, idx + 1)?);
    }
    debug!("parsed {} TUM poses", trajectory.len());
    Ok(trajectory)
}

/// Serialize one pose as a TUM row with `precision` decimal digits per
/// numeric field. The timestamp token is written back verbatim.
pub fn format_tum_line(pose: &TimestampedPose, precision: usize) -> String {
    let t = pose.pose.translation.vector;
    let q = quat_xyzw_from_pose(&pose.pose);
    format!(
        "{} {:.p$} {:.p$} {:.p$} {:.p$} {:.p$} {:.p$} {:.p$}",
        pose.stamp,
        t.x,
        t.y,
        t.z,
        q[0],
        q[1],
        q[2],
        q[3],
        p = precision
    )
}

/// Serialize a trajectory as a TUM table, one row per pose.
pub fn format_tum(trajectory: &Trajectory, precision: usize) -> String {
    let mut out = String::new();
    for pose in trajectory {
        out.push_str(&format_tum_line(pose, precision));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reframe_core::test_utils::pose_error;
    use reframe_core::Iso3;

    #[test]
    fn parses_a_row_and_keeps_the_stamp_verbatim() {
        let pose = parse_tum_line("1.403636580838555527e+09 4.688 -1.786 0.783 0.0 0.0 0.0 1.0", 1)
            .unwrap();
        assert_eq!(pose.stamp, "1.403636580838555527e+09");
        assert_eq!(pose.pose.translation.vector, Vec3::new(4.688, -1.786, 0.783));
        let (_, ang) = pose_error(&pose.pose, &Iso3::identity());
        assert!(ang < 1e-12);
    }

    #[test]
    fn field_count_error_carries_the_line_number() {
        let err = parse_tum("0 1.0 2.0 3.0 0.0 0.0 0.0 1.0\n7 0.0 0.0\n").unwrap_err();
        match err {
            FormatError::FieldCount { line, expected, found } => {
                assert_eq!((line, expected, found), (2, TUM_FIELDS, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let err = parse_tum_line("0 1.0 2.0 nope 0.0 0.0 0.0 1.0", 5).unwrap_err();
        match err {
            FormatError::NonNumericField { line, token } => {
                assert_eq!(line, 5);
                assert_eq!(token, "nope");
            }
            other => panic!("unexpected error: {other}"),
        }
        // "nan" does parse as a real; only genuinely non-numeric tokens fail
        assert!(parse_tum_line("0 1.0 2.0 3.0 0.0 0.0 0.0 one", 1).is_err());
    }

    #[test]
    fn blank_lines_are_skipped_but_numbering_is_physical() {
        let traj = parse_tum("\n0 0 0 0 0 0 0 1\n\n1 1 0 0 0 0 0 1\n").unwrap();
        assert_eq!(traj.len(), 2);

        let err = parse_tum("\n\nbroken row\n").unwrap_err();
        match err {
            FormatError::FieldCount { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn writer_precision_is_configurable() {
        let pose = TimestampedPose::new("42", Iso3::translation(1.0, -2.5, 0.0));
        let nine = format_tum_line(&pose, 9);
        assert_eq!(nine, "42 1.000000000 -2.500000000 0.000000000 0.000000000 0.000000000 0.000000000 1.000000000");
        let six = format_tum_line(&pose, 6);
        assert_eq!(six, "42 1.000000 -2.500000 0.000000 0.000000 0.000000 0.000000 1.000000");
    }
}
