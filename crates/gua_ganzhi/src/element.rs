//! The five elements (wuxing), yin/yang polarity, and the
//! generation/control cycles between elements.

use serde::Serialize;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation order (each generates the next).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese name.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in generation order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element this one generates (Wood → Fire → Earth → Metal → Water → Wood).
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// Element this one controls (Wood → Earth → Water → Fire → Metal → Wood).
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    /// How `other` stands relative to `self` in the two cycles.
    pub fn relation_to(self, other: Element) -> ElementRelation {
        match (other.index() + 5 - self.index()) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generated,
            2 => ElementRelation::Controlled,
            3 => ElementRelation::Controlling,
            _ => ElementRelation::Generating,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Element {
    type Err = String;

    /// Parse an English name (case-insensitive) or a Chinese character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(s) || e.chinese() == s)
            .ok_or_else(|| format!("unknown element: {s}"))
    }
}

/// Position of one element relative to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// Same element as the reference.
    Same,
    /// Generated by the reference.
    Generated,
    /// Generates the reference.
    Generating,
    /// Controlled by the reference.
    Controlled,
    /// Controls the reference.
    Controlling,
}

/// Yang (odd, active) or Yin (even, receptive) polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a 0-based cyclic index: even → Yang, odd → Yin.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}
