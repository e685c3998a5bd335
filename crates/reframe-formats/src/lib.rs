//! Pose-table dialects for `reframe-rs`.
//!
//! Two whitespace-delimited text layouts are supported, one pose per line:
//! - TUM: `timestamp tx ty tz qx qy qz qw`
//! - KITTI: `timestamp r11 r12 r13 tx r21 r22 r23 ty r31 r32 r33 tz`
//!
//! Parsing and serialization are stateless, line-by-line transforms. The
//! timestamp column is an opaque token: it is carried as the exact string
//! it was read with and echoed byte-for-byte on output, so nanosecond
//! integers and scientific notation survive a round-trip untouched. A
//! single malformed row fails the whole table; consumers downstream assume
//! a complete, ordered trajectory.

use reframe_core::Real;
use thiserror::Error;

/// KITTI-dialect rows.
pub mod kitti;
/// TUM-dialect rows.
pub mod tum;

pub use kitti::*;
pub use tum::*;

/// Decimal digits written per numeric field for re-origined pose tables.
pub const DEFAULT_POSE_PRECISION: usize = 9;
/// Decimal digits written per numeric field by the dialect converters.
pub const DEFAULT_CONVERT_PRECISION: usize = 6;

/// A row that does not parse into the expected field count or types.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("line {line}: expected {expected} whitespace-separated fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {token:?} is not a real number")]
    NonNumericField { line: usize, token: String },
}

fn parse_reals(tokens: &[&str], line: usize) -> Result<Vec<Real>, FormatError> {
    tokens
        .iter()
        .map(|tok| {
            tok.parse::<Real>().map_err(|_| FormatError::NonNumericField {
                line,
                token: (*tok).to_string(),
            })
        })
        .collect()
}
