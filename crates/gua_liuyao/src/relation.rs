//! Six relations (liuqin): kinship of a line to the Day Master.

use gua_ganzhi::{ElementRelation, Stem};
use serde::Serialize;

/// Kinship label. Only five of the traditional "six" are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SixRelation {
    /// Same element.
    Brothers,
    /// Element the Day Master generates.
    Offspring,
    /// Element that generates the Day Master.
    Parents,
    /// Element the Day Master controls.
    Wealth,
    /// Element that controls the Day Master.
    Officials,
}

pub const ALL_RELATIONS: [SixRelation; 5] = [
    SixRelation::Brothers,
    SixRelation::Offspring,
    SixRelation::Parents,
    SixRelation::Wealth,
    SixRelation::Officials,
];

impl SixRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brothers => "Brothers",
            Self::Offspring => "Offspring",
            Self::Parents => "Parents",
            Self::Wealth => "Wealth",
            Self::Officials => "Officials",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Brothers => "兄弟",
            Self::Offspring => "子孙",
            Self::Parents => "父母",
            Self::Wealth => "妻财",
            Self::Officials => "官鬼",
        }
    }
}

impl std::fmt::Display for SixRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Relation of a line (by its najia stem) to the Day Master.
pub fn six_relation(day_master: Stem, line_stem: Stem) -> SixRelation {
    match day_master.element().relation_to(line_stem.element()) {
        ElementRelation::Same => SixRelation::Brothers,
        ElementRelation::Generated => SixRelation::Offspring,
        ElementRelation::Generating => SixRelation::Parents,
        ElementRelation::Controlled => SixRelation::Wealth,
        ElementRelation::Controlling => SixRelation::Officials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wood_day_master() {
        let dm = Stem::Jia;
        assert_eq!(six_relation(dm, Stem::Yi), SixRelation::Brothers);
        assert_eq!(six_relation(dm, Stem::Bing), SixRelation::Offspring);
        assert_eq!(six_relation(dm, Stem::Ren), SixRelation::Parents);
        assert_eq!(six_relation(dm, Stem::Wu), SixRelation::Wealth);
        assert_eq!(six_relation(dm, Stem::Geng), SixRelation::Officials);
    }

    #[test]
    fn every_stem_pair_is_labelled_consistently() {
        for dm in gua_ganzhi::ALL_STEMS {
            let mut counts = [0; 5];
            for s in gua_ganzhi::ALL_STEMS {
                let r = six_relation(dm, s);
                counts[ALL_RELATIONS.iter().position(|x| *x == r).unwrap()] += 1;
            }
            assert_eq!(counts, [2; 5], "{dm}");
        }
    }
}
