//! Error types for calendar and solar-time computations.

/// Errors from calendar validation and solar-time correction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not name a day of the civil calendar.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Clock hour outside [0, 24) or not finite.
    #[error("hour {0} outside [0, 24)")]
    InvalidHour(f64),
    /// Latitude outside [-90, 90] degrees.
    #[error("latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] degrees.
    #[error("longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),
    /// Civil time-zone meridian outside [-180, 180] degrees.
    #[error("time-zone meridian {0} outside [-180, 180]")]
    InvalidMeridian(f64),
    /// Text could not be parsed as a date.
    #[error("parse error: {0}")]
    Parse(String),
}
