//! Hexagrams and the palace lookup table.
//!
//! A [`Hexagram`] is six line bits, bit 0 = line 1 (bottom), set = yang.
//! The lookup table is built once from the palace construction rule and
//! maps each of the 64 patterns to its palace, generation and King Wen
//! number.

use std::sync::LazyLock;

use serde::Serialize;

use crate::error::TableError;
use crate::line::{LINE_COUNT, LineValue};
use crate::palace::{ALL_GENERATIONS, ALL_PALACES, Generation, Palace};
use crate::trigram::Trigram;

const LINE_MASK: u8 = 0b11_1111;

/// Six line values packed bottom-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Hexagram(u8);

impl Hexagram {
    /// From raw bits; only the low six are kept.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & LINE_MASK)
    }

    pub fn from_lines(lines: [LineValue; LINE_COUNT]) -> Self {
        let bits = lines
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, v)| acc | (v.bit() << i));
        Self(bits)
    }

    /// Lower trigram repeated above itself.
    pub const fn doubled(trigram: Trigram) -> Self {
        Self(trigram.bits() | (trigram.bits() << 3))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Value of line `position` (1..=6).
    pub const fn line(self, position: u8) -> LineValue {
        if (self.0 >> (position - 1)) & 1 == 1 {
            LineValue::Yang
        } else {
            LineValue::Yin
        }
    }

    pub fn lines(self) -> [LineValue; LINE_COUNT] {
        std::array::from_fn(|i| self.line(i as u8 + 1))
    }

    pub const fn lower(self) -> Trigram {
        Trigram::from_bits(self.0)
    }

    pub const fn upper(self) -> Trigram {
        Trigram::from_bits(self.0 >> 3)
    }

    /// Flip every line whose bit is set in `mask`.
    pub const fn flipped(self, mask: u8) -> Self {
        Self((self.0 ^ mask) & LINE_MASK)
    }
}

impl std::fmt::Display for Hexagram {
    /// Lines bottom to top as 0/1 digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.lines() {
            write!(f, "{}", v.bit())?;
        }
        Ok(())
    }
}

/// Hexagram of `palace` at `generation`, by the construction rule.
pub const fn palace_member(palace: Palace, generation: Generation) -> Hexagram {
    let pure = Hexagram::doubled(palace.trigram());
    match generation {
        Generation::Pure => pure,
        Generation::First => pure.flipped(0b00_0001),
        Generation::Second => pure.flipped(0b00_0011),
        Generation::Third => pure.flipped(0b00_0111),
        Generation::Fourth => pure.flipped(0b00_1111),
        Generation::Fifth => pure.flipped(0b01_1111),
        // Fifth generation with line 4 restored.
        Generation::Wandering => pure.flipped(0b01_0111),
        // Wandering upper trigram over the palace's own lower trigram.
        Generation::Returning => {
            let wandering = pure.flipped(0b01_0111);
            Hexagram::from_bits((wandering.bits() & 0b11_1000) | (pure.bits() & 0b00_0111))
        }
    }
}

/// A hexagram with its palace placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HexagramInfo {
    pub hexagram: Hexagram,
    pub palace: Palace,
    pub generation: Generation,
    /// King Wen sequence number, 1..=64.
    pub king_wen: u8,
    pub name: &'static str,
    pub chinese: &'static str,
}

impl HexagramInfo {
    /// World line of this hexagram's own generation.
    pub const fn world(&self) -> u8 {
        self.generation.world()
    }

    /// Response line of this hexagram's own generation.
    pub const fn response(&self) -> u8 {
        self.generation.response()
    }
}

/// (King Wen number, pinyin, Chinese) per palace, per generation.
const NAMES: [[(u8, &str, &str); 8]; 8] = [
    // Qian
    [
        (1, "Qian", "乾为天"),
        (44, "Gou", "天风姤"),
        (33, "Dun", "天山遁"),
        (12, "Pi", "天地否"),
        (20, "Guan", "风地观"),
        (23, "Bo", "山地剥"),
        (35, "Jin", "火地晋"),
        (14, "Da You", "火天大有"),
    ],
    // Kan
    [
        (29, "Kan", "坎为水"),
        (60, "Jie", "水泽节"),
        (3, "Zhun", "水雷屯"),
        (63, "Ji Ji", "水火既济"),
        (49, "Ge", "泽火革"),
        (55, "Feng", "雷火丰"),
        (36, "Ming Yi", "地火明夷"),
        (7, "Shi", "地水师"),
    ],
    // Gen
    [
        (52, "Gen", "艮为山"),
        (22, "Bi", "山火贲"),
        (26, "Da Chu", "山天大畜"),
        (41, "Sun", "山泽损"),
        (38, "Kui", "火泽睽"),
        (10, "Lü", "天泽履"),
        (61, "Zhong Fu", "风泽中孚"),
        (53, "Jian", "风山渐"),
    ],
    // Zhen
    [
        (51, "Zhen", "震为雷"),
        (16, "Yu", "雷地豫"),
        (40, "Xie", "雷水解"),
        (32, "Heng", "雷风恒"),
        (46, "Sheng", "地风升"),
        (48, "Jing", "水风井"),
        (28, "Da Guo", "泽风大过"),
        (17, "Sui", "泽雷随"),
    ],
    // Xun
    [
        (57, "Xun", "巽为风"),
        (9, "Xiao Chu", "风天小畜"),
        (37, "Jia Ren", "风火家人"),
        (42, "Yi", "风雷益"),
        (25, "Wu Wang", "天雷无妄"),
        (21, "Shi He", "火雷噬嗑"),
        (27, "Yi", "山雷颐"),
        (18, "Gu", "山风蛊"),
    ],
    // Li
    [
        (30, "Li", "离为火"),
        (56, "Lü", "火山旅"),
        (50, "Ding", "火风鼎"),
        (64, "Wei Ji", "火水未济"),
        (4, "Meng", "山水蒙"),
        (59, "Huan", "风水涣"),
        (6, "Song", "天水讼"),
        (13, "Tong Ren", "天火同人"),
    ],
    // Kun
    [
        (2, "Kun", "坤为地"),
        (24, "Fu", "地雷复"),
        (19, "Lin", "地泽临"),
        (11, "Tai", "地天泰"),
        (34, "Da Zhuang", "雷天大壮"),
        (43, "Guai", "泽天夬"),
        (5, "Xu", "水天需"),
        (8, "Bi", "水地比"),
    ],
    // Dui
    [
        (58, "Dui", "兑为泽"),
        (47, "Kun", "泽水困"),
        (45, "Cui", "泽地萃"),
        (31, "Xian", "泽山咸"),
        (39, "Jian", "水山蹇"),
        (15, "Qian", "地山谦"),
        (62, "Xiao Guo", "雷山小过"),
        (54, "Gui Mei", "雷泽归妹"),
    ],
];

static TABLE: LazyLock<[Option<HexagramInfo>; 64]> = LazyLock::new(build_table);

fn build_table() -> [Option<HexagramInfo>; 64] {
    let mut table = [None; 64];
    for palace in ALL_PALACES {
        for generation in ALL_GENERATIONS {
            let hexagram = palace_member(palace, generation);
            let (king_wen, name, chinese) =
                NAMES[palace.index() as usize][generation.index() as usize];
            let slot = &mut table[hexagram.bits() as usize];
            debug_assert!(slot.is_none(), "pattern {hexagram} built twice");
            *slot = Some(HexagramInfo {
                hexagram,
                palace,
                generation,
                king_wen,
                name,
                chinese,
            });
        }
    }
    table
}

/// Look up a hexagram's palace placement.
pub fn resolve(hexagram: Hexagram) -> Result<HexagramInfo, TableError> {
    TABLE[hexagram.bits() as usize].ok_or(TableError::Unresolved(hexagram.bits()))
}

/// All 64 entries in palace order.
pub fn all_hexagrams() -> impl Iterator<Item = HexagramInfo> {
    ALL_PALACES.into_iter().flat_map(|p| {
        ALL_GENERATIONS.into_iter().filter_map(move |g| resolve(palace_member(p, g)).ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        for bits in 0..64u8 {
            assert!(resolve(Hexagram::from_bits(bits)).is_ok(), "{bits:06b}");
        }
    }

    #[test]
    fn king_wen_numbers_are_a_permutation() {
        let mut seen = [false; 65];
        for info in all_hexagrams() {
            assert!(!seen[info.king_wen as usize], "{}", info.king_wen);
            seen[info.king_wen as usize] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn pure_hexagrams() {
        let qian = resolve(Hexagram::from_bits(0b11_1111)).unwrap();
        assert_eq!((qian.palace, qian.generation, qian.king_wen), (Palace::Qian, Generation::Pure, 1));
        let kun = resolve(Hexagram::from_bits(0)).unwrap();
        assert_eq!((kun.palace, kun.king_wen), (Palace::Kun, 2));
    }

    #[test]
    fn trigrams_match_king_wen_names() {
        // Tai: Qian below, Kun above.
        let tai = resolve(Hexagram::from_bits(0b00_0111)).unwrap();
        assert_eq!(tai.name, "Tai");
        assert_eq!(tai.hexagram.lower(), Trigram::Qian);
        assert_eq!(tai.hexagram.upper(), Trigram::Kun);
        // Ji Ji: Li below, Kan above.
        let ji_ji = resolve(Hexagram::from_bits(Trigram::Li.bits() | (Trigram::Kan.bits() << 3))).unwrap();
        assert_eq!((ji_ji.name, ji_ji.king_wen), ("Ji Ji", 63));
    }

    #[test]
    fn returning_soul_keeps_palace_lower_trigram() {
        for palace in ALL_PALACES {
            let h = palace_member(palace, Generation::Returning);
            assert_eq!(h.lower(), palace.trigram());
        }
    }

    #[test]
    fn line_accessors() {
        let h = Hexagram::from_lines([
            LineValue::Yang,
            LineValue::Yang,
            LineValue::Yang,
            LineValue::Yin,
            LineValue::Yang,
            LineValue::Yang,
        ]);
        assert_eq!(h.bits(), 0b11_0111);
        assert_eq!(h.line(4), LineValue::Yin);
        assert_eq!(h.to_string(), "111011");
    }
}
