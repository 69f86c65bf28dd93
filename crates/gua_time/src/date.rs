//! Civil calendar date.
//!
//! `CivilDate` is the validated date type used by every downstream crate.
//! Validation follows the calendar in force for the year (see
//! [`crate::julian`]), so 1500-02-29 is accepted and 1582-10-10 is not.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{
    calendar_to_jd, days_in_month, in_reform_gap, jd_to_calendar, julian_day_number,
};

/// A validated civil calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Create a date, rejecting days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let valid = (1..=12).contains(&month)
            && day >= 1
            && day <= days_in_month(year, month)
            && !in_reform_gap(year, month, day);
        if valid {
            Ok(Self { year, month, day })
        } else {
            Err(TimeError::InvalidDate { year, month, day })
        }
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jd_to_calendar(jdn as f64);
        Self {
            year,
            month,
            day: day.floor() as u32,
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }

    /// Julian Date at `hour` (fractional, local clock) on this date.
    pub fn jd_at(self, hour: f64) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + hour / 24.0)
    }

    /// The date `days` days later (negative for earlier).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (a leading `-` marks a year before 1 CE).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().rsplitn(3, '-');
        let (Some(d), Some(m), Some(y)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        };
        let year: i32 = y.parse().map_err(|e| TimeError::Parse(format!("year: {e}")))?;
        let month: u32 = m.parse().map_err(|e| TimeError::Parse(format!("month: {e}")))?;
        let day: u32 = d.parse().map_err(|e| TimeError::Parse(format!("day: {e}")))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonexistent_days() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 4, 31).is_err());
        assert!(CivilDate::new(2024, 1, 0).is_err());
        assert!(CivilDate::new(1582, 10, 10).is_err());
    }

    #[test]
    fn accepts_julian_leap_day() {
        assert!(CivilDate::new(1500, 2, 29).is_ok());
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(-365), CivilDate::new(2022, 12, 31).unwrap());
    }

    #[test]
    fn add_days_crosses_reform() {
        let d = CivilDate::new(1582, 10, 4).unwrap();
        assert_eq!(d.add_days(1), CivilDate::new(1582, 10, 15).unwrap());
    }

    #[test]
    fn jdn_of_j2000_day() {
        assert_eq!(CivilDate::new(2000, 1, 1).unwrap().jdn(), 2_451_545);
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2024-03-05".parse().unwrap();
        assert_eq!(d.to_string(), "2024-03-05");
        assert!("2024/03/05".parse::<CivilDate>().is_err());
        assert!("2024-02-30".parse::<CivilDate>().is_err());
    }

    #[test]
    fn parse_negative_year() {
        let d: CivilDate = "-0500-03-01".parse().unwrap();
        assert_eq!(d.year(), -500);
        assert_eq!(d.month(), 3);
    }
}
