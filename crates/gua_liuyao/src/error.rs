//! Error types for chart computation.
//!
//! Bad input and table inconsistency are kept apart: the first is the
//! caller's to fix, the second means the rule tables are incomplete.
//! A degraded (approximate) calendar is not an error; see
//! [`crate::chart::Chart::approximate`].

use gua_ganzhi::GanzhiError;
use gua_time::TimeError;

/// Input rejected before any resolver runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    /// Not exactly six line values.
    #[error("expected 6 line values, got {0}")]
    LineCount(usize),
    /// A binary line value other than 0 or 1.
    #[error("line {position} has value {value}; expected 0 or 1")]
    LineValue { position: u8, value: u8 },
    /// A cast value other than 6, 7, 8 or 9.
    #[error("line {position} has cast value {value}; expected 6, 7, 8 or 9")]
    CastValue { position: u8, value: u8 },
    /// A moving-line position outside 1..=6.
    #[error("moving line position {0} outside 1..=6")]
    MovingPosition(u8),
    /// More than six moving-line positions.
    #[error("{0} moving lines given; at most 6")]
    TooManyMoving(usize),
    /// Date, hour or coordinates out of range.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Sexagenary input out of range.
    #[error(transparent)]
    Calendar(#[from] GanzhiError),
}

/// The hexagram rule table failed to resolve a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TableError {
    /// Line bits (bit 0 = line 1) match none of the 64 palace hexagrams.
    #[error("line pattern {0:06b} matches no palace hexagram")]
    Unresolved(u8),
}

/// Errors from chart assembly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("internal table inconsistency: {0}")]
    Table(#[from] TableError),
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Input(InputError::Time(e))
    }
}

impl From<GanzhiError> for ChartError {
    fn from(e: GanzhiError) -> Self {
        match e {
            GanzhiError::Time(t) => Self::Input(InputError::Time(t)),
            other => Self::Input(InputError::Calendar(other)),
        }
    }
}
