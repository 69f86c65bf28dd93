//! Najia: stem-branch assignment to the six lines.
//!
//! Branches are fixed per palace. Each line's stem is the stem of its
//! branch's element, yang on odd lines and yin on even lines. The
//! resulting pair is a line label, not necessarily a sexagenary pillar.

use gua_ganzhi::{Branch, Element, Polarity, Stem};
use serde::Serialize;

use crate::palace::Palace;

/// Stem and branch attached to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Najia {
    pub stem: Stem,
    pub branch: Branch,
}

impl Najia {
    /// Element the line carries (its branch's element).
    pub const fn element(self) -> Element {
        self.branch.element()
    }
}

impl std::fmt::Display for Najia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem, self.branch)
    }
}

/// Stem for line `position` (1..=6) carrying `branch`.
pub const fn line_stem(branch: Branch, position: u8) -> Stem {
    let polarity = if position % 2 == 1 {
        Polarity::Yang
    } else {
        Polarity::Yin
    };
    Stem::of(branch.element(), polarity)
}

/// Najia for lines 1..=6 of any hexagram in `palace`.
pub fn assign_najia(palace: Palace) -> [Najia; 6] {
    let branches = palace.najia_branches();
    std::array::from_fn(|i| Najia {
        stem: line_stem(branches[i], i as u8 + 1),
        branch: branches[i],
    })
}
