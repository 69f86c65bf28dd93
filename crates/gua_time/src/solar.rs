//! Apparent solar longitude and the 24 solar terms.
//!
//! The Sun's apparent geocentric ecliptic longitude is computed with the
//! low-precision analytic series (accuracy ~0.01°, i.e. solar-term instants
//! good to roughly a quarter of an hour). Universal Time is used in place of
//! Terrestrial Time; ΔT is below two minutes for the supported range after
//! 1700 and is ignored.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 25. Public formulas.

use serde::Serialize;

use crate::julian::{calendar_to_jd, jd_to_centuries};

/// Mean daily motion of the Sun in degrees.
const SUN_MEAN_MOTION_DEG_PER_DAY: f64 = 0.985_647_4;

/// Bisection tolerance for solar-term instants (days, ~0.1 s).
const TERM_TOLERANCE_DAYS: f64 = 1e-6;

/// Capability that yields the Sun's apparent ecliptic longitude.
///
/// Returns `None` when the instant is outside what the source can evaluate.
/// Implementations must be shareable across threads.
pub trait SolarTermSource: Send + Sync {
    fn apparent_solar_longitude_deg(&self, jd_ut: f64) -> Option<f64>;
}

/// Analytic solar theory valid for years -1000 ..= 3000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticSun {
    min_jd: f64,
    max_jd: f64,
}

impl AnalyticSun {
    /// Source restricted to `[min_jd, max_jd]`.
    pub fn with_range(min_jd: f64, max_jd: f64) -> Self {
        Self { min_jd, max_jd }
    }
}

impl Default for AnalyticSun {
    fn default() -> Self {
        Self {
            min_jd: calendar_to_jd(-1000, 1, 1.0),
            max_jd: calendar_to_jd(3000, 12, 31.0),
        }
    }
}

impl SolarTermSource for AnalyticSun {
    fn apparent_solar_longitude_deg(&self, jd_ut: f64) -> Option<f64> {
        if !jd_ut.is_finite() || jd_ut < self.min_jd || jd_ut > self.max_jd {
            return None;
        }
        Some(apparent_solar_longitude_deg(jd_ut))
    }
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees [0, 360).
pub fn apparent_solar_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = l0 + c - 0.005_69 - 0.004_78 * omega.sin();
    apparent.rem_euclid(360.0)
}

/// The 24 solar terms, starting from Lichun (Sun at 315°).
///
/// Even indices are the sectional terms (jie) that open a solar month;
/// odd indices are the mid-month terms (qi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 solar terms in order (index 0 = Lichun).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

const SOLAR_TERM_NAMES: [(&str, &str); 24] = [
    ("Lichun", "立春"),
    ("Yushui", "雨水"),
    ("Jingzhe", "惊蛰"),
    ("Chunfen", "春分"),
    ("Qingming", "清明"),
    ("Guyu", "谷雨"),
    ("Lixia", "立夏"),
    ("Xiaoman", "小满"),
    ("Mangzhong", "芒种"),
    ("Xiazhi", "夏至"),
    ("Xiaoshu", "小暑"),
    ("Dashu", "大暑"),
    ("Liqiu", "立秋"),
    ("Chushu", "处暑"),
    ("Bailu", "白露"),
    ("Qiufen", "秋分"),
    ("Hanlu", "寒露"),
    ("Shuangjiang", "霜降"),
    ("Lidong", "立冬"),
    ("Xiaoxue", "小雪"),
    ("Daxue", "大雪"),
    ("Dongzhi", "冬至"),
    ("Xiaohan", "小寒"),
    ("Dahan", "大寒"),
];

impl SolarTerm {
    /// 0-based index (Lichun=0 .. Dahan=23).
    pub fn index(self) -> u8 {
        ALL_SOLAR_TERMS
            .iter()
            .position(|t| *t == self)
            .unwrap_or_default() as u8
    }

    /// Term for a 0-based index, wrapping modulo 24.
    pub fn from_index(index: u8) -> Self {
        ALL_SOLAR_TERMS[(index % 24) as usize]
    }

    /// Pinyin name.
    pub fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize].0
    }

    /// Chinese name.
    pub fn chinese(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize].1
    }

    /// Apparent solar longitude at which this term begins.
    pub fn longitude_deg(self) -> f64 {
        (315.0 + 15.0 * self.index() as f64).rem_euclid(360.0)
    }

    /// Whether this is a sectional term that opens a solar month.
    pub fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Term containing a given apparent solar longitude.
    pub fn from_longitude(lon_deg: f64) -> Self {
        let offset = (lon_deg - 315.0).rem_euclid(360.0);
        Self::from_index(((offset / 15.0).floor() as u8).min(23))
    }
}

/// A solar-term instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermInstant {
    pub term: SolarTerm,
    /// Julian Date (UT) the Sun reaches the term's longitude.
    pub jd_ut: f64,
}

/// Signed angular difference `a - b` normalized to [-180, 180).
fn normalize_to_pm180(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Find when the Sun reaches `target_deg` inside `[lo, hi]` by bisection.
///
/// Requires the longitude difference to change sign across the bracket.
fn bisect_longitude(
    source: &dyn SolarTermSource,
    target_deg: f64,
    mut lo: f64,
    mut hi: f64,
) -> Option<f64> {
    let diff = |jd: f64| {
        source
            .apparent_solar_longitude_deg(jd)
            .map(|lon| normalize_to_pm180(lon - target_deg))
    };
    let mut f_lo = diff(lo)?;
    let f_hi = diff(hi)?;
    if f_lo > 0.0 || f_hi < 0.0 {
        return None;
    }
    while hi - lo > TERM_TOLERANCE_DAYS {
        let mid = 0.5 * (lo + hi);
        let f_mid = diff(mid)?;
        if (f_mid < 0.0) == (f_lo < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Some(0.5 * (lo + hi))
}

/// Instant of `term` nearest to `jd_guess` (within about ±15 days).
fn term_instant_near(
    source: &dyn SolarTermSource,
    term: SolarTerm,
    jd_guess: f64,
) -> Option<TermInstant> {
    let target = term.longitude_deg();
    let lon = source.apparent_solar_longitude_deg(jd_guess)?;
    let estimate = jd_guess - normalize_to_pm180(lon - target) / SUN_MEAN_MOTION_DEG_PER_DAY;
    let jd_ut = bisect_longitude(source, target, estimate - 3.0, estimate + 3.0)?;
    Some(TermInstant { term, jd_ut })
}

/// The sectional term (jie) that opened the solar month containing `jd_ut`.
pub fn prev_jie(source: &dyn SolarTermSource, jd_ut: f64) -> Option<TermInstant> {
    let lon = source.apparent_solar_longitude_deg(jd_ut)?;
    let month = ((lon - 315.0).rem_euclid(360.0) / 30.0).floor() as u8;
    let term = SolarTerm::from_index((month * 2).min(22));
    let elapsed = (lon - term.longitude_deg()).rem_euclid(360.0) / SUN_MEAN_MOTION_DEG_PER_DAY;
    term_instant_near(source, term, jd_ut - elapsed)
}

/// The sectional term (jie) that closes the solar month containing `jd_ut`.
pub fn next_jie(source: &dyn SolarTermSource, jd_ut: f64) -> Option<TermInstant> {
    let lon = source.apparent_solar_longitude_deg(jd_ut)?;
    let month = ((lon - 315.0).rem_euclid(360.0) / 30.0).floor() as u8;
    let term = SolarTerm::from_index(((month.min(11) + 1) % 12) * 2);
    let remaining = (term.longitude_deg() - lon).rem_euclid(360.0) / SUN_MEAN_MOTION_DEG_PER_DAY;
    term_instant_near(source, term, jd_ut + remaining)
}
