//! Six spirits (liushen), rotated by the day stem.

use gua_ganzhi::Stem;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SixSpirit {
    GreenDragon,
    VermilionBird,
    HookSnake,
    FlyingSnake,
    WhiteTiger,
    BlackTortoise,
}

/// Canonical order; line 1 starts at the day stem's offset into it.
pub const ALL_SPIRITS: [SixSpirit; 6] = [
    SixSpirit::GreenDragon,
    SixSpirit::VermilionBird,
    SixSpirit::HookSnake,
    SixSpirit::FlyingSnake,
    SixSpirit::WhiteTiger,
    SixSpirit::BlackTortoise,
];

impl SixSpirit {
    pub const fn name(self) -> &'static str {
        match self {
            Self::GreenDragon => "Green Dragon",
            Self::VermilionBird => "Vermilion Bird",
            Self::HookSnake => "Hook Snake",
            Self::FlyingSnake => "Flying Snake",
            Self::WhiteTiger => "White Tiger",
            Self::BlackTortoise => "Black Tortoise",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::GreenDragon => "青龙",
            Self::VermilionBird => "朱雀",
            Self::HookSnake => "勾陈",
            Self::FlyingSnake => "螣蛇",
            Self::WhiteTiger => "白虎",
            Self::BlackTortoise => "玄武",
        }
    }
}

impl std::fmt::Display for SixSpirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotation offset: stems pair off (Jia/Yi, Bing/Ding, ...), one offset per pair.
pub const fn spirit_offset(day_stem: Stem) -> usize {
    (day_stem.index() / 2) as usize
}

/// Spirits for lines 1..=6 on a day with stem `day_stem`.
pub fn six_spirits(day_stem: Stem) -> [SixSpirit; 6] {
    let offset = spirit_offset(day_stem);
    std::array::from_fn(|i| ALL_SPIRITS[(offset + i) % ALL_SPIRITS.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jia_day_starts_with_green_dragon() {
        assert_eq!(six_spirits(Stem::Jia), ALL_SPIRITS);
        assert_eq!(six_spirits(Stem::Yi), ALL_SPIRITS);
    }

    #[test]
    fn rotation_by_stem_pair() {
        assert_eq!(six_spirits(Stem::Bing)[0], SixSpirit::VermilionBird);
        assert_eq!(six_spirits(Stem::Ji)[0], SixSpirit::HookSnake);
        assert_eq!(six_spirits(Stem::Gui)[0], SixSpirit::WhiteTiger);
        assert_eq!(six_spirits(Stem::Gui)[1], SixSpirit::BlackTortoise);
        assert_eq!(six_spirits(Stem::Gui)[2], SixSpirit::GreenDragon);
    }

    #[test]
    fn next_stem_pair_shifts_by_one() {
        for i in 0..4u8 {
            let a = six_spirits(Stem::from_index(2 * i));
            let b = six_spirits(Stem::from_index(2 * i + 2));
            for line in 0..6 {
                assert_eq!(b[line], a[(line + 1) % 6]);
            }
        }
    }

    #[test]
    fn each_spirit_once() {
        for stem in gua_ganzhi::ALL_STEMS {
            let spirits = six_spirits(stem);
            for s in ALL_SPIRITS {
                assert_eq!(spirits.iter().filter(|&&x| x == s).count(), 1);
            }
        }
    }
}
