//! Sexagenary pairs (ganzhi pillars).
//!
//! A pillar pairs a stem with a branch of the same parity, giving 60 valid
//! combinations. Index 0 is Jia-Zi; stepping the index advances both the
//! stem and the branch by one.

use serde::Serialize;

use crate::branch::Branch;
use crate::error::GanzhiError;
use crate::stem::Stem;

/// Number of pairs in the sexagenary cycle.
pub const SEXAGENARY_CYCLE: u8 = 60;

/// One valid stem-branch pair of the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair a stem and branch, rejecting mismatched parity.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, GanzhiError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(GanzhiError::ParityMismatch { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Pair a stem and branch already known to share parity.
    pub(crate) fn pair(stem: Stem, branch: Branch) -> Self {
        debug_assert_eq!(stem.index() % 2, branch.index() % 2);
        Self { stem, branch }
    }

    /// Pillar at a 0-based sexagenary index (0 = Jia-Zi).
    pub fn from_index(index: u8) -> Result<Self, GanzhiError> {
        if index >= SEXAGENARY_CYCLE {
            return Err(GanzhiError::IndexOutOfRange(index));
        }
        Ok(Self::from_cycle(index as i64))
    }

    /// Pillar at any integer position, wrapping modulo 60.
    pub fn from_cycle(n: i64) -> Self {
        let i = n.rem_euclid(SEXAGENARY_CYCLE as i64) as u8;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    pub fn stem(self) -> Stem {
        self.stem
    }

    pub fn branch(self) -> Branch {
        self.branch
    }

    /// 0-based sexagenary index (Jia-Zi=0 .. Gui-Hai=59).
    ///
    /// Solves i ≡ stem (mod 10), i ≡ branch (mod 12): i = 6·stem − 5·branch (mod 60).
    pub fn index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(SEXAGENARY_CYCLE as i32) as u8
    }

    /// Pillar `n` steps away in the cycle (negative steps go back).
    pub fn offset(self, n: i64) -> Self {
        Self::from_cycle(self.index() as i64 + n)
    }

    /// Chinese two-character form, e.g. 甲子.
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}
