//! The eight trigrams (bagua).

use gua_ganzhi::Element;
use serde::Serialize;

/// A three-line figure. Bit 0 is the bottom line, set = yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trigram {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

/// All 8 trigrams in Fu Xi order (Qian, Dui, Li, Zhen, Xun, Kan, Gen, Kun).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
    Trigram::Kun,
];

impl Trigram {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Li => "Li",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Kan => "Kan",
            Self::Gen => "Gen",
            Self::Kun => "Kun",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Li => "离",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
        }
    }

    /// Natural image.
    pub const fn image(self) -> &'static str {
        match self {
            Self::Qian => "Heaven",
            Self::Dui => "Lake",
            Self::Li => "Fire",
            Self::Zhen => "Thunder",
            Self::Xun => "Wind",
            Self::Kan => "Water",
            Self::Gen => "Mountain",
            Self::Kun => "Earth",
        }
    }

    /// Line bits, bottom line in bit 0.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Qian => 0b111,
            Self::Dui => 0b011,
            Self::Li => 0b101,
            Self::Zhen => 0b001,
            Self::Xun => 0b110,
            Self::Kan => 0b010,
            Self::Gen => 0b100,
            Self::Kun => 0b000,
        }
    }

    /// Trigram from its low three bits.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b111 => Self::Qian,
            0b011 => Self::Dui,
            0b101 => Self::Li,
            0b001 => Self::Zhen,
            0b110 => Self::Xun,
            0b010 => Self::Kan,
            0b100 => Self::Gen,
            _ => Self::Kun,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Gen | Self::Kun => Element::Earth,
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
