//! Moving lines and the transformed hexagram.

use serde::Serialize;

use crate::error::{InputError, TableError};
use crate::hexagram::{Hexagram, HexagramInfo, resolve};
use crate::line::LINE_COUNT;

/// Set of moving-line positions, stored as a bit mask (bit 0 = line 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MovingLines(u8);

impl MovingLines {
    pub const NONE: Self = Self(0);

    /// Validate positions (1..=6). Repeats collapse; more than six
    /// entries is rejected outright.
    pub fn new(positions: &[u8]) -> Result<Self, InputError> {
        if positions.len() > LINE_COUNT {
            return Err(InputError::TooManyMoving(positions.len()));
        }
        let mut mask = 0u8;
        for &p in positions {
            if !(1..=6).contains(&p) {
                return Err(InputError::MovingPosition(p));
            }
            mask |= 1 << (p - 1);
        }
        Ok(Self(mask))
    }

    pub const fn mask(self) -> u8 {
        self.0
    }

    pub const fn contains(self, position: u8) -> bool {
        position >= 1 && position <= 6 && (self.0 >> (position - 1)) & 1 == 1
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Positions in ascending order.
    pub fn positions(self) -> Vec<u8> {
        (1..=6).filter(|&p| self.contains(p)).collect()
    }
}

impl Serialize for MovingLines {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.positions())
    }
}

/// Home hexagram and the hexagram it changes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transformation {
    pub home: HexagramInfo,
    pub transformed: HexagramInfo,
    pub moving: MovingLines,
}

impl Transformation {
    /// Whether any line moved.
    pub const fn changed(&self) -> bool {
        !self.moving.is_empty()
    }
}

/// Flip every moving line of `home` and resolve both hexagrams.
pub fn transform(home: Hexagram, moving: MovingLines) -> Result<Transformation, TableError> {
    let transformed = home.flipped(moving.mask());
    Ok(Transformation {
        home: resolve(home)?,
        transformed: resolve(transformed)?,
        moving,
    })
}
