//! Six-line hexagram (Liuyao) chart engine.
//!
//! This crate provides:
//! - The 64-hexagram palace table, built from the palace construction rule
//! - Najia stem-branch labels, six relations and six spirits per line
//! - Void branches of the day pillar
//! - Moving-line transformation
//! - `ChartAssembler`, composing all of the above with the sexagenary
//!   clock and true-solar-time correction

pub mod chart;
pub mod error;
pub mod hexagram;
pub mod line;
pub mod najia;
pub mod palace;
pub mod relation;
pub mod spirit;
pub mod transform;
pub mod trigram;
pub mod void;

pub use chart::{Chart, ChartAssembler, ChartRequest, ResolvedHexagram, ResolvedLine};
pub use error::{ChartError, InputError, TableError};
pub use hexagram::{Hexagram, HexagramInfo, all_hexagrams, palace_member, resolve};
pub use line::{Cast, LINE_COUNT, LineValue, parse_casts, parse_line_values};
pub use najia::{Najia, assign_najia, line_stem};
pub use palace::{ALL_GENERATIONS, ALL_PALACES, Generation, Palace};
pub use relation::{ALL_RELATIONS, SixRelation, six_relation};
pub use spirit::{ALL_SPIRITS, SixSpirit, six_spirits, spirit_offset};
pub use transform::{MovingLines, Transformation, transform};
pub use trigram::{ALL_TRIGRAMS, Trigram};
pub use void::void_branches;
