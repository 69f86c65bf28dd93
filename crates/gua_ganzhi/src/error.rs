//! Error types for sexagenary calculations.

use gua_time::TimeError;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from pillar construction and the sexagenary clock.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GanzhiError {
    /// Calendar or clock input rejected.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Stem and branch indices differ in parity; not one of the 60 pairs.
    #[error("{stem}-{branch} is not a sexagenary pair")]
    ParityMismatch { stem: Stem, branch: Branch },
    /// Sexagenary index outside 0..60.
    #[error("sexagenary index {0} outside 0..60")]
    IndexOutOfRange(u8),
}
