//! Line values and traditional casts.
//!
//! Lines are numbered 1 (bottom) to 6 (top). A cast records the coin or
//! yarrow-stalk result: 6 and 9 are old (moving) lines, 7 and 8 young.

use serde::Serialize;

use crate::error::InputError;
use crate::transform::MovingLines;

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// A solid (yang) or broken (yin) line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineValue {
    Yin,
    Yang,
}

impl LineValue {
    /// Parse a binary line value: 1 = yang, 0 = yin.
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Yin),
            1 => Some(Self::Yang),
            _ => None,
        }
    }

    pub const fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// The opposite line.
    pub const fn flip(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yin => "Yin",
            Self::Yang => "Yang",
        }
    }

    /// Monogram as drawn in a chart.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Yin => "▅▅  ▅▅",
            Self::Yang => "▅▅▅▅▅▅",
        }
    }
}

/// One traditional cast value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cast {
    /// 6: yin, moving.
    OldYin,
    /// 7: yang, at rest.
    YoungYang,
    /// 8: yin, at rest.
    YoungYin,
    /// 9: yang, moving.
    OldYang,
}

impl Cast {
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYang),
            8 => Some(Self::YoungYin),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    pub const fn value(self) -> LineValue {
        match self {
            Self::YoungYang | Self::OldYang => LineValue::Yang,
            Self::OldYin | Self::YoungYin => LineValue::Yin,
        }
    }

    pub const fn is_moving(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }
}

/// Validate six binary line values (bottom to top).
pub fn parse_line_values(values: &[u8]) -> Result<[LineValue; LINE_COUNT], InputError> {
    if values.len() != LINE_COUNT {
        return Err(InputError::LineCount(values.len()));
    }
    let mut lines = [LineValue::Yin; LINE_COUNT];
    for (i, &v) in values.iter().enumerate() {
        lines[i] = LineValue::from_bit(v).ok_or(InputError::LineValue {
            position: i as u8 + 1,
            value: v,
        })?;
    }
    Ok(lines)
}

/// Validate six cast values (bottom to top) into lines plus moving positions.
pub fn parse_casts(casts: &[u8]) -> Result<([LineValue; LINE_COUNT], MovingLines), InputError> {
    if casts.len() != LINE_COUNT {
        return Err(InputError::LineCount(casts.len()));
    }
    let mut lines = [LineValue::Yin; LINE_COUNT];
    let mut moving = Vec::new();
    for (i, &n) in casts.iter().enumerate() {
        let position = i as u8 + 1;
        let cast = Cast::from_number(n).ok_or(InputError::CastValue { position, value: n })?;
        lines[i] = cast.value();
        if cast.is_moving() {
            moving.push(position);
        }
    }
    Ok((lines, MovingLines::new(&moving)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip() {
        assert_eq!(LineValue::from_bit(1), Some(LineValue::Yang));
        assert_eq!(LineValue::from_bit(0), Some(LineValue::Yin));
        assert_eq!(LineValue::from_bit(2), None);
        assert_eq!(LineValue::Yang.flip(), LineValue::Yin);
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(parse_line_values(&[1, 0, 1]), Err(InputError::LineCount(3)));
        assert_eq!(parse_casts(&[7; 7]), Err(InputError::LineCount(7)));
    }

    #[test]
    fn rejects_bad_value() {
        let err = parse_line_values(&[1, 1, 1, 2, 0, 0]).unwrap_err();
        assert_eq!(err, InputError::LineValue { position: 4, value: 2 });
    }

    #[test]
    fn casts_yield_lines_and_moving() {
        let (lines, moving) = parse_casts(&[9, 7, 8, 6, 7, 8]).unwrap();
        assert_eq!(
            lines.map(LineValue::bit),
            [1, 1, 0, 0, 1, 0]
        );
        assert_eq!(moving.positions(), vec![1, 4]);
    }

    #[test]
    fn rejects_bad_cast() {
        let err = parse_casts(&[7, 7, 5, 7, 7, 7]).unwrap_err();
        assert_eq!(err, InputError::CastValue { position: 3, value: 5 });
    }
}
