//! Calendar arithmetic and solar time for the sexagenary engine.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions across the Julian/Gregorian reform
//! - `CivilDate`, the validated date type used by downstream crates
//! - Apparent solar longitude, the 24 solar terms, and jie searches
//! - Equation of time and true-solar-time correction

pub mod date;
pub mod error;
pub mod julian;
pub mod solar;
pub mod solar_time;

pub use date::CivilDate;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    jd_to_centuries, julian_day_number,
};
pub use solar::{
    ALL_SOLAR_TERMS, AnalyticSun, SolarTerm, SolarTermSource, TermInstant,
    apparent_solar_longitude_deg, next_jie, prev_jie,
};
pub use solar_time::{
    ClockReading, SolarTimeCorrection, equation_of_time_minutes, nominal_meridian_deg,
    true_solar_time,
};
