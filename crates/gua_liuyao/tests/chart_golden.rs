//! End-to-end chart tests.

use gua_ganzhi::{Branch, Pillar, Stem};
use gua_liuyao::{
    ChartAssembler, ChartError, ChartRequest, Generation, Hexagram, InputError, LineValue,
    MovingLines, Palace, SixRelation, SixSpirit, assign_najia, resolve, transform, void_branches,
};
use gua_time::{AnalyticSun, CivilDate, ClockReading};
use proptest::prelude::*;

fn beijing(y: i32, m: u32, d: u32, hour: f64) -> ClockReading {
    ClockReading::new(CivilDate::new(y, m, d).unwrap(), hour, 116.4074, 39.9042).with_meridian(120.0)
}

// ---------------------------------------------------------------------------
// Reference hexagram
// ---------------------------------------------------------------------------

#[test]
fn xiao_chu_reference() {
    let sun = AnalyticSun::default();
    let req = ChartRequest::from_values(&[1, 1, 1, 0, 1, 1], &[], beijing(2024, 3, 20, 10.0)).unwrap();
    let chart = ChartAssembler::new(&sun).assemble(&req).unwrap();

    let home = &chart.home;
    assert_eq!(home.info.name, "Xiao Chu");
    assert_eq!(home.info.king_wen, 9);
    assert_eq!(home.info.palace, Palace::Xun);
    assert_eq!(home.info.generation, Generation::First);
    assert_eq!((home.world, home.response), (1, 4));

    let najia: Vec<String> = home.lines.iter().map(|l| l.najia.to_string()).collect();
    assert_eq!(najia, ["Wu-Chou", "Gui-Hai", "Geng-You", "Ji-Wei", "Bing-Si", "Yi-Mao"]);
    assert_eq!(chart.transformed, chart.home);
    assert!(!chart.approximate);
}

#[test]
fn reference_chart_is_deterministic() {
    let sun = AnalyticSun::default();
    let req = ChartRequest::from_values(&[1, 1, 1, 0, 1, 1], &[], beijing(2024, 3, 20, 10.0)).unwrap();
    let assembler = ChartAssembler::new(&sun);
    let first = assembler.assemble(&req).unwrap();
    let second = assembler.assemble(&req).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.void_branches, void_branches(first.pillars.day));
}

#[test]
fn relations_and_spirits_follow_day_stem() {
    let req = ChartRequest::from_values(&[1, 1, 1, 0, 1, 1], &[], beijing(2024, 3, 20, 10.0)).unwrap();
    let chart = ChartAssembler::approximate().assemble(&req).unwrap();
    let day_stem = chart.pillars.day.stem();
    assert_eq!(chart.day_master, day_stem);

    let offset = (day_stem.index() / 2) as usize;
    let canon = gua_liuyao::ALL_SPIRITS;
    for (i, line) in chart.home.lines.iter().enumerate() {
        assert_eq!(line.spirit, canon[(offset + i) % 6]);
        assert_eq!(line.relation, gua_liuyao::six_relation(day_stem, line.najia.stem));
    }
}

#[test]
fn explicit_day_master() {
    // Metal day master against the Xun palace lines.
    let req = ChartRequest::from_values(&[1, 1, 1, 0, 1, 1], &[], beijing(2024, 3, 20, 10.0))
        .unwrap()
        .with_day_master(Stem::Geng);
    let chart = ChartAssembler::approximate().assemble(&req).unwrap();
    let relations: Vec<SixRelation> = chart.home.lines.iter().map(|l| l.relation).collect();
    assert_eq!(
        relations,
        [
            SixRelation::Parents,   // Wu earth
            SixRelation::Offspring, // Gui water
            SixRelation::Brothers,  // Geng metal
            SixRelation::Parents,   // Ji earth
            SixRelation::Officials, // Bing fire
            SixRelation::Wealth,    // Yi wood
        ]
    );
}

// ---------------------------------------------------------------------------
// Transformation
// ---------------------------------------------------------------------------

#[test]
fn single_moving_line_changes_palace() {
    // Qian, line 4 moving: Xiao Chu.
    let req = ChartRequest::from_values(&[1; 6], &[4], beijing(2024, 3, 20, 10.0)).unwrap();
    let chart = ChartAssembler::approximate().assemble(&req).unwrap();
    assert!(chart.changed());
    assert_eq!(chart.home.info.name, "Qian");
    assert_eq!(chart.transformed.info.name, "Xiao Chu");
    assert_eq!(chart.transformed.info.palace, Palace::Xun);
    assert_eq!(chart.transformed.lines[3].value, LineValue::Yin);
    assert_eq!(chart.transformed.lines[3].najia.to_string(), "Ji-Wei");
    assert_eq!((chart.transformed.world, chart.transformed.response), (6, 3));
}

#[test]
fn casts_drive_moving_lines() {
    let req = ChartRequest::from_casts(&[9, 7, 7, 8, 7, 7], beijing(2024, 3, 20, 10.0)).unwrap();
    assert_eq!(req.moving.positions(), vec![1]);
    let chart = ChartAssembler::approximate().assemble(&req).unwrap();
    assert_eq!(chart.home.info.name, "Xiao Chu");
    assert_eq!(chart.transformed.info.name, "Xun");
    assert!(chart.home.lines[0].moving);
    assert!(chart.transformed.lines[0].moving);
}

// ---------------------------------------------------------------------------
// Calendar interaction
// ---------------------------------------------------------------------------

#[test]
fn void_matches_day_pillar() {
    let req = ChartRequest::from_values(&[0, 0, 0, 1, 1, 1], &[], beijing(2024, 2, 10, 9.0)).unwrap();
    let chart = ChartAssembler::approximate().assemble(&req).unwrap();
    // 2024-02-10 is Jia-Chen: index 40, residue 0.
    assert_eq!(chart.pillars.day.to_string(), "Jia-Chen");
    assert_eq!(chart.void_branches, [Branch::Xu, Branch::Hai]);
    assert_eq!(chart.home.lines[0].spirit, SixSpirit::GreenDragon);
    for line in chart.home.lines {
        assert_eq!(line.void, chart.void_branches.contains(&line.najia.branch));
    }
}

#[test]
fn solar_correction_can_move_the_day() {
    // 00:10 clock time at 100°E on the 120° meridian is the previous evening.
    let reading = ClockReading::new(CivilDate::new(2024, 6, 1).unwrap(), 0.1667, 100.0, 30.0)
        .with_meridian(120.0);
    let req = ChartRequest::from_values(&[1, 0, 1, 0, 1, 0], &[], reading).unwrap();
    let chart = ChartAssembler::approximate().assemble(&req).unwrap();
    assert_eq!(chart.solar_time.day_offset, -1);
    assert_eq!(chart.solar_time.solar_date, CivilDate::new(2024, 5, 31).unwrap());
    let clock_day = gua_ganzhi::day_pillar(CivilDate::new(2024, 6, 1).unwrap());
    assert_eq!(chart.pillars.day, clock_day.offset(-1));
}

#[test]
fn invalid_inputs_are_rejected() {
    let r = beijing(2024, 3, 20, 10.0);
    assert_eq!(
        ChartRequest::from_values(&[1, 1, 1], &[], r).unwrap_err(),
        InputError::LineCount(3)
    );
    assert_eq!(
        ChartRequest::from_values(&[1; 6], &[9], r).unwrap_err(),
        InputError::MovingPosition(9)
    );
    let mut late = r;
    late.hour = 24.0;
    let req = ChartRequest::from_values(&[1; 6], &[], late).unwrap();
    let err = ChartAssembler::approximate().assemble(&req).unwrap_err();
    assert!(matches!(err, ChartError::Input(InputError::Time(_))));
}

#[test]
fn chart_serializes() {
    let req = ChartRequest::from_values(&[1, 1, 1, 0, 1, 1], &[2, 5], beijing(2024, 3, 20, 10.0))
        .unwrap()
        .with_useful_element(gua_ganzhi::Element::Water);
    let chart = ChartAssembler::approximate().assemble(&req).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["home"]["info"]["name"], "Xiao Chu");
    assert_eq!(json["moving"], serde_json::json!([2, 5]));
    assert_eq!(json["useful_element"], "Water");
    assert_eq!(json["home"]["lines"].as_array().map(Vec::len), Some(6));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn transformed_differs_only_at_moving_lines(bits in 0u8..64, mask in 0u8..64) {
        let positions: Vec<u8> = (1..=6).filter(|p| mask >> (p - 1) & 1 == 1).collect();
        let moving = MovingLines::new(&positions).unwrap();
        let t = transform(Hexagram::from_bits(bits), moving).unwrap();
        for p in 1..=6u8 {
            let same = t.home.hexagram.line(p) == t.transformed.hexagram.line(p);
            prop_assert_eq!(same, !moving.contains(p));
        }
    }

    #[test]
    fn world_and_response_are_three_apart(bits in 0u8..64) {
        let info = resolve(Hexagram::from_bits(bits)).unwrap();
        let (w, r) = (info.world(), info.response());
        prop_assert!((1..=6).contains(&w) && (1..=6).contains(&r));
        prop_assert_eq!((w as i8 - r as i8).abs(), 3);
    }

    #[test]
    fn najia_depends_only_on_palace(a in 0u8..64, b in 0u8..64) {
        let ia = resolve(Hexagram::from_bits(a)).unwrap();
        let ib = resolve(Hexagram::from_bits(b)).unwrap();
        if ia.palace == ib.palace {
            prop_assert_eq!(assign_najia(ia.palace), assign_najia(ib.palace));
        }
    }

    #[test]
    fn void_pair_is_adjacent(i in 0u8..60) {
        let [a, b] = void_branches(Pillar::from_index(i).unwrap());
        prop_assert_eq!(a.offset(1), b);
    }
}
