//! Julian Day ↔ calendar conversions.
//!
//! Dates on or after 1582-10-15 are Gregorian; earlier dates are Julian
//! (the historical reform boundary). The ten days 1582-10-05 ..= 1582-10-14
//! do not exist in this calendar.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 7. Public formulas.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First Julian Day Number of the Gregorian calendar (1582-10-15).
const GREGORIAN_START_JDN: i64 = 2_299_161;

/// Whether (year, month, day) falls on or after the Gregorian reform.
fn is_gregorian(year: i32, month: u32, day: u32) -> bool {
    (year, month, day) >= (1582, 10, 15)
}

/// Leap-year rule of the calendar in force for `year`.
///
/// Julian rule (every 4th year) before 1583, Gregorian rule afterwards.
/// 1582 itself is not a leap year under either rule.
pub fn is_leap_year(year: i32) -> bool {
    if year > 1582 {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year.rem_euclid(4) == 0
    }
}

/// Number of days in `month` of `year` (1-based month).
///
/// Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Whether (year, month, day) is the reform gap 1582-10-05 ..= 1582-10-14.
pub fn in_reform_gap(year: i32, month: u32, day: u32) -> bool {
    year == 1582 && month == 10 && (5..=14).contains(&day)
}

/// Convert a calendar date with fractional day to a Julian Date.
///
/// `day_frac` is the day of month plus the fraction of the day elapsed
/// since 0h (e.g. 1.5 = noon on the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let b = if is_gregorian(year, month, day_frac.floor() as u32) {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date to (year, month, fractional day).
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let a = if (z as i64) < GREGORIAN_START_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian Day Number (integer day count, noon-based) of a civil date.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    (calendar_to_jd(year, month, day as f64) + 0.5).floor() as i64
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_sputnik_example() {
        // Meeus example 7.a: 1957-10-04.81 = JD 2436116.31
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn julian_calendar_example() {
        // Meeus example 7.b: 333-01-27.5 (Julian) = JD 1842713.0
        assert!((calendar_to_jd(333, 1, 27.5) - 1_842_713.0).abs() < 1e-9);
    }

    #[test]
    fn reform_boundary_is_contiguous() {
        let last_julian = julian_day_number(1582, 10, 4);
        let first_gregorian = julian_day_number(1582, 10, 15);
        assert_eq!(first_gregorian - last_julian, 1);
        assert_eq!(first_gregorian, GREGORIAN_START_JDN);
    }

    #[test]
    fn roundtrip_calendar() {
        for &(y, m, d) in &[(2024, 2, 29.25), (1582, 10, 4.0), (1582, 10, 15.0), (-500, 3, 1.5)] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y2, m2), (y, m));
            assert!((d2 - d).abs() < 1e-6, "{y}-{m}-{d} → {d2}");
        }
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(1500)); // Julian
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 13), 0);
    }
}
