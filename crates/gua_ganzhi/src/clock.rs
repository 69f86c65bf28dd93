//! Sexagenary clock: calendar date and hour → year, month, day, hour pillars.
//!
//! - Day pillar: midnight boundary, index = (JDN + 49) mod 60.
//! - Hour pillar: two-hour branch window; stem by the "five rats" rule from
//!   the day stem. The Zi window opening at 23:00 already belongs to the
//!   next day's stem sequence.
//! - Month pillar: solar month opened by the last sectional term (jie);
//!   stem by the "five tigers" rule from the year stem.
//! - Year pillar: changes at Lichun (Sun at 315°), not on January 1st.
//!
//! Month and year need the Sun's longitude. When no [`SolarTermSource`] is
//! available, or the source cannot evaluate the instant, fixed Gregorian jie
//! dates are used instead and the result is flagged `approximate`.

use gua_time::{
    CivilDate, ClockReading, SolarTerm, SolarTermSource, SolarTimeCorrection, TermInstant,
    TimeError, next_jie, prev_jie, true_solar_time,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::branch::Branch;
use crate::error::GanzhiError;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Offset from Julian Day Number to the sexagenary day index.
const JDN_DAY_OFFSET: i64 = 49;

/// Year 4 CE was Jia-Zi.
const YEAR_EPOCH: i64 = 4;

/// Month offsets counted from the Yin month (Lichun = 0).
const ZI_MONTH: u8 = 10;

/// Approximate Gregorian day-of-month each month's jie falls on,
/// January (Xiaohan) through December (Daxue).
const APPROX_JIE_DAY: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Four pillars for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Month/year came from the fixed-date approximation.
    pub approximate: bool,
    /// Solar term in effect (only when the Sun's longitude was available).
    pub solar_term: Option<SolarTerm>,
    /// Jie that opened the current solar month.
    pub month_start: Option<TermInstant>,
    /// Jie that closes the current solar month.
    pub month_end: Option<TermInstant>,
    /// Julian Date (UT) the pillars were evaluated at.
    pub jd_ut: f64,
}

/// Four pillars of a clock reading, evaluated at true solar time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarPillars {
    pub solar_time: SolarTimeCorrection,
    pub pillars: FourPillars,
}

/// Day pillar of a civil date (midnight boundary).
pub fn day_pillar(date: CivilDate) -> Pillar {
    Pillar::from_cycle(date.jdn() + JDN_DAY_OFFSET)
}

/// Year pillar of a solar (Lichun-to-Lichun) year.
pub fn year_pillar(solar_year: i32) -> Pillar {
    Pillar::from_cycle(solar_year as i64 - YEAR_EPOCH)
}

/// Month pillar for `month_offset` months after Lichun (0 = Yin month).
pub fn month_pillar(year_stem: Stem, month_offset: u8) -> Pillar {
    let k = month_offset % 12;
    let stem = Stem::from_index(2 * year_stem.index() + 2 + k);
    let branch = Branch::from_index(2 + k);
    // Stem and branch indices are both ≡ k (mod 2).
    Pillar::pair(stem, branch)
}

/// Hour pillar for a branch window, given the stem of the day it belongs to.
pub fn hour_pillar(day_stem: Stem, branch: Branch) -> Pillar {
    let stem = Stem::from_index(2 * day_stem.index() + branch.index());
    Pillar::pair(stem, branch)
}

/// Month offset from Lichun for an apparent solar longitude.
pub fn month_offset_from_longitude(lon_deg: f64) -> u8 {
    (((lon_deg - 315.0).rem_euclid(360.0) / 30.0).floor() as u8).min(11)
}

/// Month offset from Lichun using fixed Gregorian jie dates.
pub fn approximate_month_offset(date: CivilDate) -> u8 {
    let m = date.month() as u8;
    // The jie falling in Gregorian month m opens month offset (m + 10) mod 12.
    let opened = (m + 10) % 12;
    if date.day() >= APPROX_JIE_DAY[(m - 1) as usize] {
        opened
    } else {
        (opened + 11) % 12
    }
}

/// Solar year: the Gregorian year, less one before Lichun.
fn solar_year(date: CivilDate, month_offset: u8) -> i32 {
    if date.month() <= 2 && month_offset >= ZI_MONTH {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Converts dates to pillars, optionally backed by a solar-longitude source.
#[derive(Clone, Copy)]
pub struct SexagenaryClock<'a> {
    source: Option<&'a dyn SolarTermSource>,
}

impl std::fmt::Debug for SexagenaryClock<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SexagenaryClock")
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

impl<'a> SexagenaryClock<'a> {
    /// Clock backed by a solar-longitude source.
    pub fn new(source: &'a dyn SolarTermSource) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Clock with no source; month and year are always approximate.
    pub fn approximate() -> Self {
        Self { source: None }
    }

    /// Four pillars at `hour` on `date`.
    ///
    /// `utc_offset_hours` converts the local (date, hour) to Universal Time
    /// for the solar-longitude lookup.
    pub fn pillars(
        &self,
        date: CivilDate,
        hour: f64,
        utc_offset_hours: f64,
    ) -> Result<FourPillars, GanzhiError> {
        if !hour.is_finite() || !(0.0..24.0).contains(&hour) {
            return Err(TimeError::InvalidHour(hour).into());
        }

        let day = day_pillar(date);
        let hour_day_stem = if hour >= 23.0 {
            day.offset(1).stem()
        } else {
            day.stem()
        };
        let hour_of_day = hour_pillar(hour_day_stem, Branch::from_hour(hour));

        let jd_ut = date.jd_at(hour) - utc_offset_hours / 24.0;
        let longitude = self
            .source
            .and_then(|s| s.apparent_solar_longitude_deg(jd_ut).map(|lon| (s, lon)));

        let (month_offset, solar_term, month_start, month_end) = match longitude {
            Some((source, lon)) => (
                month_offset_from_longitude(lon),
                Some(SolarTerm::from_longitude(lon)),
                prev_jie(source, jd_ut),
                next_jie(source, jd_ut),
            ),
            None => {
                warn!(%date, "solar longitude unavailable; using approximate jie dates");
                (approximate_month_offset(date), None, None, None)
            }
        };

        let year = year_pillar(solar_year(date, month_offset));
        let month = month_pillar(year.stem(), month_offset);
        debug!(%date, %year, %month, %day, hour = %hour_of_day, "pillars resolved");

        Ok(FourPillars {
            year,
            month,
            day,
            hour: hour_of_day,
            approximate: longitude.is_none(),
            solar_term,
            month_start,
            month_end,
            jd_ut,
        })
    }

    /// Correct `reading` to true solar time, then take the pillars there.
    ///
    /// Day, month and year follow the corrected date, so a correction that
    /// crosses midnight moves the day pillar with it.
    pub fn solar_pillars(&self, reading: &ClockReading) -> Result<SolarPillars, GanzhiError> {
        let solar_time = true_solar_time(reading)?;
        // Back to UT: undo the civil offset and the correction.
        let utc_offset = reading.utc_offset_hours() + solar_time.correction_minutes / 60.0;
        let pillars = self.pillars(solar_time.solar_date, solar_time.true_solar_hour, utc_offset)?;
        Ok(SolarPillars {
            solar_time,
            pillars,
        })
    }
}
