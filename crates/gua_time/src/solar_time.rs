//! True (apparent) solar time from civil clock time.
//!
//! True solar time = clock time + equation of time + 4 min × (longitude −
//! civil meridian). The civil meridian defaults to the nearest multiple of
//! 15°, i.e. the centre of the nominal time zone containing the longitude.
//!
//! Equation of time source: Meeus, *Astronomical Algorithms*, 2nd ed.,
//! eq. 28.3 (Smart's series). Public formulas.

use serde::Serialize;

use crate::date::CivilDate;
use crate::error::TimeError;
use crate::julian::jd_to_centuries;

/// Minutes of time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Width of a nominal civil time zone in degrees.
const TIME_ZONE_WIDTH_DEG: f64 = 15.0;

/// Equation of time (apparent − mean solar time) in minutes.
///
/// Positive when the sundial is ahead of the clock (early November,
/// about +16.4 min); negative in mid-February (about −14.2 min).
pub fn equation_of_time_minutes(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let l0 = (280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t).to_radians();
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let epsilon = (23.439_291 - 0.013_004_2 * t).to_radians();
    let y = (epsilon / 2.0).tan().powi(2);

    let eot_rad = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    eot_rad.to_degrees() * MINUTES_PER_DEGREE
}

/// Centre meridian of the nominal 15° time zone containing `longitude_deg`.
pub fn nominal_meridian_deg(longitude_deg: f64) -> f64 {
    (longitude_deg / TIME_ZONE_WIDTH_DEG).round() * TIME_ZONE_WIDTH_DEG
}

/// A civil clock reading at a geographic location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClockReading {
    pub date: CivilDate,
    /// Local civil clock hour in [0, 24).
    pub hour: f64,
    /// East-positive longitude in degrees.
    pub longitude_deg: f64,
    /// North-positive latitude in degrees.
    pub latitude_deg: f64,
    /// Civil time-zone meridian; `None` selects the nominal 15° zone.
    pub meridian_deg: Option<f64>,
}

impl ClockReading {
    pub fn new(date: CivilDate, hour: f64, longitude_deg: f64, latitude_deg: f64) -> Self {
        Self {
            date,
            hour,
            longitude_deg,
            latitude_deg,
            meridian_deg: None,
        }
    }

    /// Use an explicit civil meridian (e.g. 120° for China Standard Time).
    pub fn with_meridian(mut self, meridian_deg: f64) -> Self {
        self.meridian_deg = Some(meridian_deg);
        self
    }

    /// Reject readings outside the valid ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !self.hour.is_finite() || !(0.0..24.0).contains(&self.hour) {
            return Err(TimeError::InvalidHour(self.hour));
        }
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(TimeError::InvalidLatitude(self.latitude_deg));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(TimeError::InvalidLongitude(self.longitude_deg));
        }
        if let Some(m) = self.meridian_deg {
            if !m.is_finite() || !(-180.0..=180.0).contains(&m) {
                return Err(TimeError::InvalidMeridian(m));
            }
        }
        Ok(())
    }

    /// Civil meridian in effect for this reading.
    pub fn effective_meridian_deg(&self) -> f64 {
        self.meridian_deg
            .unwrap_or_else(|| nominal_meridian_deg(self.longitude_deg))
    }

    /// UTC offset of the civil clock in hours.
    pub fn utc_offset_hours(&self) -> f64 {
        self.effective_meridian_deg() / TIME_ZONE_WIDTH_DEG
    }

    /// Julian Date (UT) of the clock instant.
    pub fn jd_ut(&self) -> f64 {
        self.date.jd_at(self.hour) - self.utc_offset_hours() / 24.0
    }
}

/// Result of a true-solar-time correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTimeCorrection {
    /// Clock hour as requested.
    pub requested_hour: f64,
    /// True solar hour in [0, 24).
    pub true_solar_hour: f64,
    /// Total correction in minutes (equation of time + longitude offset).
    pub correction_minutes: f64,
    /// Equation-of-time component in minutes.
    pub equation_of_time_minutes: f64,
    /// Longitude component in minutes.
    pub longitude_offset_minutes: f64,
    /// Civil meridian the longitude offset was measured from.
    pub meridian_deg: f64,
    /// Day rollover caused by the correction (-1, 0 or +1 unless the
    /// meridian is far from the longitude).
    pub day_offset: i8,
    /// Civil date on which the true solar hour falls.
    pub solar_date: CivilDate,
}

/// Correct a clock reading to true solar time.
pub fn true_solar_time(reading: &ClockReading) -> Result<SolarTimeCorrection, TimeError> {
    reading.validate()?;
    let meridian = reading.effective_meridian_deg();
    let eot = equation_of_time_minutes(reading.jd_ut());
    let lon_offset = MINUTES_PER_DEGREE * (reading.longitude_deg - meridian);
    let correction = eot + lon_offset;

    let adjusted = reading.hour + correction / 60.0;
    let days = (adjusted / 24.0).floor();
    let mut true_solar_hour = adjusted - days * 24.0;
    let mut day_offset = days as i8;
    // A tiny negative adjustment can round to exactly 24.0 after wrapping.
    if true_solar_hour >= 24.0 {
        true_solar_hour = 0.0;
        day_offset += 1;
    }

    Ok(SolarTimeCorrection {
        requested_hour: reading.hour,
        true_solar_hour,
        correction_minutes: correction,
        equation_of_time_minutes: eot,
        longitude_offset_minutes: lon_offset,
        meridian_deg: meridian,
        day_offset,
        solar_date: reading.date.add_days(day_offset as i64),
    })
}
