//! Chart assembly: calendar, hexagrams and line labels in one result.
//!
//! The clock reading is first corrected to true solar time. The corrected
//! date and hour give the four pillars, and the day pillar drives the six
//! spirits, the void branches and (unless overridden) the Day Master for
//! the six relations.
//!
//! World and response markers always come from the home hexagram and are
//! annotated at the same positions on both hexagrams.

use gua_ganzhi::{Branch, Element, FourPillars, SexagenaryClock, SolarPillars, Stem};
use gua_time::{ClockReading, SolarTermSource, SolarTimeCorrection};
use serde::Serialize;
use tracing::debug;

use crate::error::{ChartError, InputError};
use crate::hexagram::{Hexagram, HexagramInfo};
use crate::line::{LINE_COUNT, LineValue, parse_casts, parse_line_values};
use crate::najia::{Najia, assign_najia};
use crate::relation::{SixRelation, six_relation};
use crate::spirit::{SixSpirit, six_spirits};
use crate::transform::{MovingLines, transform};
use crate::void::void_branches;

/// Everything needed to cast a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRequest {
    /// Lines bottom to top.
    pub lines: [LineValue; LINE_COUNT],
    pub moving: MovingLines,
    pub reading: ClockReading,
    /// Overrides the day stem as the Day Master for the six relations.
    pub day_master: Option<Stem>,
    /// Useful element (yongshen) hint, carried through to the chart.
    pub useful_element: Option<Element>,
}

impl ChartRequest {
    pub fn new(lines: [LineValue; LINE_COUNT], moving: MovingLines, reading: ClockReading) -> Self {
        Self {
            lines,
            moving,
            reading,
            day_master: None,
            useful_element: None,
        }
    }

    /// From binary line values (0/1) and moving positions (1..=6).
    pub fn from_values(values: &[u8], moving: &[u8], reading: ClockReading) -> Result<Self, InputError> {
        Ok(Self::new(parse_line_values(values)?, MovingLines::new(moving)?, reading))
    }

    /// From traditional casts (6, 7, 8, 9).
    pub fn from_casts(casts: &[u8], reading: ClockReading) -> Result<Self, InputError> {
        let (lines, moving) = parse_casts(casts)?;
        Ok(Self::new(lines, moving, reading))
    }

    pub fn with_day_master(mut self, stem: Stem) -> Self {
        self.day_master = Some(stem);
        self
    }

    pub fn with_useful_element(mut self, element: Element) -> Self {
        self.useful_element = Some(element);
        self
    }
}

/// One fully labelled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedLine {
    /// 1 (bottom) to 6 (top).
    pub position: u8,
    pub value: LineValue,
    pub moving: bool,
    pub najia: Najia,
    pub element: Element,
    pub relation: SixRelation,
    pub spirit: SixSpirit,
    pub world: bool,
    pub response: bool,
    /// The line's branch is one of the day's void branches.
    pub void: bool,
}

/// A hexagram with its six labelled lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedHexagram {
    pub info: HexagramInfo,
    /// World position annotated on this chart (the home hexagram's).
    pub world: u8,
    /// Response position annotated on this chart (the home hexagram's).
    pub response: u8,
    /// Lines bottom to top.
    pub lines: [ResolvedLine; LINE_COUNT],
}

impl ResolvedHexagram {
    /// Line at `position` (1..=6).
    pub fn line(&self, position: u8) -> Option<&ResolvedLine> {
        position
            .checked_sub(1)
            .and_then(|i| self.lines.get(i as usize))
    }
}

/// A complete divination chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub reading: ClockReading,
    pub solar_time: SolarTimeCorrection,
    pub pillars: FourPillars,
    /// Month and year pillars came from the fixed-date approximation.
    pub approximate: bool,
    pub day_master: Stem,
    pub useful_element: Option<Element>,
    pub void_branches: [Branch; 2],
    pub moving: MovingLines,
    pub home: ResolvedHexagram,
    pub transformed: ResolvedHexagram,
}

impl Chart {
    /// Whether any line moved.
    pub fn changed(&self) -> bool {
        !self.moving.is_empty()
    }
}

/// Assembles charts against an optional solar-longitude source.
///
/// Without a source (or outside its range) the month and year pillars
/// fall back to fixed jie dates and the chart is flagged approximate.
#[derive(Clone, Copy)]
pub struct ChartAssembler<'a> {
    clock: SexagenaryClock<'a>,
}

impl std::fmt::Debug for ChartAssembler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartAssembler").field("clock", &self.clock).finish()
    }
}

impl<'a> ChartAssembler<'a> {
    pub fn new(source: &'a dyn SolarTermSource) -> Self {
        Self {
            clock: SexagenaryClock::new(source),
        }
    }

    pub fn approximate() -> Self {
        Self {
            clock: SexagenaryClock::approximate(),
        }
    }

    pub fn assemble(&self, request: &ChartRequest) -> Result<Chart, ChartError> {
        let SolarPillars {
            solar_time,
            pillars,
        } = self.clock.solar_pillars(&request.reading)?;

        let day_stem = pillars.day.stem();
        let day_master = request.day_master.unwrap_or(day_stem);
        let void = void_branches(pillars.day);
        let spirits = six_spirits(day_stem);

        let t = transform(Hexagram::from_lines(request.lines), request.moving)?;
        let world = t.home.world();
        let response = t.home.response();
        let labels = LineLabels {
            day_master,
            spirits: &spirits,
            void: &void,
            moving: request.moving,
            world,
            response,
        };

        debug!(
            home = t.home.name,
            transformed = t.transformed.name,
            palace = %t.home.palace,
            moving = request.moving.count(),
            day = %pillars.day,
            "chart assembled"
        );

        Ok(Chart {
            reading: request.reading,
            solar_time,
            approximate: pillars.approximate,
            pillars,
            day_master,
            useful_element: request.useful_element,
            void_branches: void,
            moving: request.moving,
            home: labels.resolve(t.home),
            transformed: labels.resolve(t.transformed),
        })
    }
}

/// Per-chart context shared by the home and transformed hexagrams.
struct LineLabels<'c> {
    day_master: Stem,
    spirits: &'c [SixSpirit; 6],
    void: &'c [Branch; 2],
    moving: MovingLines,
    world: u8,
    response: u8,
}

impl LineLabels<'_> {
    fn resolve(&self, info: HexagramInfo) -> ResolvedHexagram {
        let najia = assign_najia(info.palace);
        let lines = std::array::from_fn(|i| {
            let position = i as u8 + 1;
            let n = najia[i];
            ResolvedLine {
                position,
                value: info.hexagram.line(position),
                moving: self.moving.contains(position),
                najia: n,
                element: n.element(),
                relation: six_relation(self.day_master, n.stem),
                spirit: self.spirits[i],
                world: position == self.world,
                response: position == self.response,
                void: self.void.contains(&n.branch),
            }
        });
        ResolvedHexagram {
            info,
            world: self.world,
            response: self.response,
            lines,
        }
    }
}
