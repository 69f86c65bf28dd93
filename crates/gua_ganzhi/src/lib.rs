//! Heavenly stems, earthly branches, and the sexagenary clock.
//!
//! This crate provides:
//! - The 10 stems and 12 branches with element and polarity
//! - The five-element generation/control cycles
//! - `Pillar`, the 60-cycle stem-branch pair
//! - `SexagenaryClock`, converting a date and hour to the four pillars

pub mod branch;
pub mod clock;
pub mod element;
pub mod error;
pub mod pillar;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use clock::{
    FourPillars, SexagenaryClock, SolarPillars, approximate_month_offset, day_pillar, hour_pillar,
    month_offset_from_longitude, month_pillar, year_pillar,
};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use error::GanzhiError;
pub use pillar::{Pillar, SEXAGENARY_CYCLE};
pub use stem::{ALL_STEMS, Stem};
