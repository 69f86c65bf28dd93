//! The eight palaces and their generations.
//!
//! Each palace is headed by a doubled trigram (the pure hexagram). Its
//! other seven members are derived by flipping lines bottom-up, then the
//! wandering-soul and returning-soul steps. Generation fixes the world
//! (shi) and response (ying) lines.

use gua_ganzhi::{Branch, Element};
use serde::Serialize;

use crate::trigram::Trigram;

/// Palace, named after its pure hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Palace {
    Qian,
    Kan,
    Gen,
    Zhen,
    Xun,
    Li,
    Kun,
    Dui,
}

/// All 8 palaces in the traditional Jing Fang order.
pub const ALL_PALACES: [Palace; 8] = [
    Palace::Qian,
    Palace::Kan,
    Palace::Gen,
    Palace::Zhen,
    Palace::Xun,
    Palace::Li,
    Palace::Kun,
    Palace::Dui,
];

impl Palace {
    pub const fn index(self) -> u8 {
        match self {
            Self::Qian => 0,
            Self::Kan => 1,
            Self::Gen => 2,
            Self::Zhen => 3,
            Self::Xun => 4,
            Self::Li => 5,
            Self::Kun => 6,
            Self::Dui => 7,
        }
    }

    /// The doubled trigram heading the palace.
    pub const fn trigram(self) -> Trigram {
        match self {
            Self::Qian => Trigram::Qian,
            Self::Kan => Trigram::Kan,
            Self::Gen => Trigram::Gen,
            Self::Zhen => Trigram::Zhen,
            Self::Xun => Trigram::Xun,
            Self::Li => Trigram::Li,
            Self::Kun => Trigram::Kun,
            Self::Dui => Trigram::Dui,
        }
    }

    pub const fn name(self) -> &'static str {
        self.trigram().name()
    }

    pub const fn chinese(self) -> &'static str {
        self.trigram().chinese()
    }

    /// Palace element, shared by every hexagram of the palace.
    pub const fn element(self) -> Element {
        self.trigram().element()
    }

    /// Najia branches for lines 1..=6.
    ///
    /// Fixed per palace: yang palaces ascend from their starting branch,
    /// yin palaces descend.
    pub const fn najia_branches(self) -> [Branch; 6] {
        use Branch::*;
        match self {
            Self::Qian | Self::Zhen => [Zi, Yin, Chen, Wu, Shen, Xu],
            Self::Kan => [Yin, Chen, Wu, Shen, Xu, Zi],
            Self::Gen => [Chen, Wu, Shen, Xu, Zi, Yin],
            Self::Xun => [Chou, Hai, You, Wei, Si, Mao],
            Self::Li => [Mao, Chou, Hai, You, Wei, Si],
            Self::Kun => [Wei, Si, Mao, Chou, Hai, You],
            Self::Dui => [Si, Mao, Chou, Hai, You, Wei],
        }
    }
}

impl std::fmt::Display for Palace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a hexagram within its palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Generation {
    Pure,
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    /// Wandering soul (youhun).
    Wandering,
    /// Returning soul (guihun).
    Returning,
}

/// All 8 generations in construction order.
pub const ALL_GENERATIONS: [Generation; 8] = [
    Generation::Pure,
    Generation::First,
    Generation::Second,
    Generation::Third,
    Generation::Fourth,
    Generation::Fifth,
    Generation::Wandering,
    Generation::Returning,
];

impl Generation {
    pub const fn index(self) -> u8 {
        match self {
            Self::Pure => 0,
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Wandering => 6,
            Self::Returning => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pure => "Pure",
            Self::First => "First generation",
            Self::Second => "Second generation",
            Self::Third => "Third generation",
            Self::Fourth => "Fourth generation",
            Self::Fifth => "Fifth generation",
            Self::Wandering => "Wandering soul",
            Self::Returning => "Returning soul",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Pure => "本宫",
            Self::First => "一世",
            Self::Second => "二世",
            Self::Third => "三世",
            Self::Fourth => "四世",
            Self::Fifth => "五世",
            Self::Wandering => "游魂",
            Self::Returning => "归魂",
        }
    }

    /// World (shi) line position, 1..=6.
    pub const fn world(self) -> u8 {
        match self {
            Self::Pure => 6,
            Self::First => 1,
            Self::Second => 2,
            Self::Third | Self::Returning => 3,
            Self::Fourth | Self::Wandering => 4,
            Self::Fifth => 5,
        }
    }

    /// Response (ying) line position, three lines from the world.
    pub const fn response(self) -> u8 {
        (self.world() + 2) % 6 + 1
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_response_table() {
        let expected = [(6, 3), (1, 4), (2, 5), (3, 6), (4, 1), (5, 2), (4, 1), (3, 6)];
        for (g, (w, r)) in ALL_GENERATIONS.iter().zip(expected) {
            assert_eq!((g.world(), g.response()), (w, r), "{g}");
        }
    }

    #[test]
    fn palace_indices_follow_order() {
        for (i, p) in ALL_PALACES.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn najia_lower_and_upper_halves_differ() {
        for p in ALL_PALACES {
            let b = p.najia_branches();
            assert_ne!(b[0], b[3], "{p}");
        }
    }

    #[test]
    fn palace_elements() {
        assert_eq!(Palace::Qian.element(), Element::Metal);
        assert_eq!(Palace::Dui.element(), Element::Metal);
        assert_eq!(Palace::Li.element(), Element::Fire);
        assert_eq!(Palace::Kan.element(), Element::Water);
        assert_eq!(Palace::Gen.element(), Element::Earth);
        assert_eq!(Palace::Xun.element(), Element::Wood);
    }
}
