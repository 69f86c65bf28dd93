//! The ten heavenly stems (tiangan).

use serde::Serialize;

use crate::element::{Element, Polarity};

/// The 10 heavenly stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem for a 0-based index, wrapping modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Element: stems go in pairs Wood, Fire, Earth, Metal, Water.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// The stem of `element` with the given polarity.
    pub const fn of(element: Element, polarity: Polarity) -> Self {
        let base = element.index() * 2;
        match polarity {
            Polarity::Yang => Self::from_index(base),
            Polarity::Yin => Self::from_index(base + 1),
        }
    }

    /// Stem `n` steps later in the cycle.
    pub const fn offset(self, n: u8) -> Self {
        Self::from_index((self.index() + n % 10) % 10)
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Stem {
    type Err = String;

    /// Parse a pinyin name (case-insensitive) or a Chinese character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| stem.name().eq_ignore_ascii_case(s) || stem.chinese() == s)
            .ok_or_else(|| format!("unknown stem: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn elements_and_polarity() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Ji.polarity(), Polarity::Yin);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn of_element_roundtrip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::of(s.element(), s.polarity()), s);
        }
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Stem::Ren.offset(3), Stem::Yi);
        assert_eq!(Stem::Jia.offset(10), Stem::Jia);
    }

    #[test]
    fn parse_names() {
        assert_eq!("geng".parse::<Stem>().unwrap(), Stem::Geng);
        assert_eq!("癸".parse::<Stem>().unwrap(), Stem::Gui);
        assert!("zi".parse::<Stem>().is_err());
    }
}
