//! Plain-text rendering for terminal output.

use gua_ganzhi::{Branch, FourPillars, Pillar, SolarPillars};
use gua_liuyao::{Chart, HexagramInfo, ResolvedHexagram, assign_najia};
use gua_time::SolarTimeCorrection;

/// Fractional hours as HH:MM.
fn hh_mm(hour: f64) -> String {
    let total = (hour * 60.0).round() as i64;
    let total = total.rem_euclid(24 * 60);
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn coordinate(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    format!("{:.4}{hemisphere}", value.abs())
}

pub fn solar_time(c: &SolarTimeCorrection) -> String {
    let mut out = vec![
        format!("Clock time:      {}", hh_mm(c.requested_hour)),
        format!("True solar time: {} on {}", hh_mm(c.true_solar_hour), c.solar_date),
        format!(
            "Correction:      {:+.1} min (equation of time {:+.1}, longitude {:+.1})",
            c.correction_minutes, c.equation_of_time_minutes, c.longitude_offset_minutes
        ),
        format!("Meridian:        {:.1}", c.meridian_deg),
    ];
    if c.day_offset != 0 {
        out.push(format!("Day shifted by {:+}", c.day_offset));
    }
    out.join("\n")
}

fn pillar_row(p: &FourPillars) -> String {
    let mut row = format!(
        "Year {}  Month {}  Day {}  Hour {}",
        p.year, p.month, p.day, p.hour
    );
    row.push_str(&format!(
        "  ({} {} {} {})",
        p.year.chinese(),
        p.month.chinese(),
        p.day.chinese(),
        p.hour.chinese()
    ));
    if p.approximate {
        row.push_str("  [approximate]");
    }
    row
}

pub fn pillars(sp: &SolarPillars) -> String {
    let mut out = vec![pillar_row(&sp.pillars)];
    if let Some(term) = sp.pillars.solar_term {
        out.push(format!("Solar term: {} ({})", term.name(), term.chinese()));
    }
    out.push(solar_time(&sp.solar_time));
    out.join("\n")
}

pub fn hexagram(info: &HexagramInfo) -> String {
    let najia = assign_najia(info.palace);
    let mut out = vec![
        format!(
            "{} ({}) {}  {} over {}",
            info.name,
            info.king_wen,
            info.chinese,
            info.hexagram.upper(),
            info.hexagram.lower()
        ),
        format!(
            "{} palace ({}), {} ({}), element {}",
            info.palace,
            info.palace.chinese(),
            info.generation,
            info.generation.chinese(),
            info.palace.element()
        ),
    ];
    for position in (1..=6u8).rev() {
        let marker = if position == info.world() {
            "World"
        } else if position == info.response() {
            "Response"
        } else {
            ""
        };
        out.push(format!(
            "{position}  {}  {:<10} {marker}",
            info.hexagram.line(position).symbol(),
            najia[position as usize - 1].to_string()
        ));
    }
    out.join("\n")
}

pub fn void(day: Pillar, void: [Branch; 2]) -> String {
    format!(
        "{} ({}): void {} {} ({}{})",
        day,
        day.chinese(),
        void[0],
        void[1],
        void[0].chinese(),
        void[1].chinese()
    )
}

fn title(label: &str, h: &ResolvedHexagram) -> String {
    format!(
        "{label}: {} ({}) {}, {} palace, {}",
        h.info.name, h.info.king_wen, h.info.chinese, h.info.palace, h.info.generation
    )
}

pub fn chart(c: &Chart) -> String {
    let r = &c.reading;
    let mut out = vec![
        format!(
            "{} {} at {} {}",
            r.date,
            hh_mm(r.hour),
            coordinate(r.latitude_deg, 'N', 'S'),
            coordinate(r.longitude_deg, 'E', 'W')
        ),
        format!(
            "True solar time {} on {} ({:+.1} min)",
            hh_mm(c.solar_time.true_solar_hour),
            c.solar_time.solar_date,
            c.solar_time.correction_minutes
        ),
        pillar_row(&c.pillars),
        format!(
            "Day master {} ({})   Void {} {}",
            c.day_master,
            c.day_master.element(),
            c.void_branches[0],
            c.void_branches[1]
        ),
    ];
    if let Some(e) = c.useful_element {
        out.push(format!("Useful element {e}"));
    }
    out.push(String::new());
    out.push(title("Home", &c.home));
    if c.changed() {
        out.push(title("Changed", &c.transformed));
    }
    out.push(String::new());

    for i in (0..6).rev() {
        let h = &c.home.lines[i];
        let mut row = format!(
            "{:<15} {:<10} {:<10} {:<6} {}{}",
            h.spirit.name(),
            h.relation.name(),
            h.najia.to_string(),
            h.element.name(),
            h.value.symbol(),
            if h.moving { " o" } else { "  " },
        );
        row.push_str(if h.world {
            " World   "
        } else if h.response {
            " Response"
        } else {
            "         "
        });
        if h.void {
            row.push_str(" void");
        }
        if c.changed() {
            let t = &c.transformed.lines[i];
            row.push_str(&format!(
                "   {}  {:<10} {}",
                t.value.symbol(),
                t.najia.to_string(),
                t.relation.name()
            ));
        }
        out.push(row.trim_end().to_string());
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hh_mm_rounds_and_wraps() {
        assert_eq!(hh_mm(9.5), "09:30");
        assert_eq!(hh_mm(23.9999), "00:00");
        assert_eq!(hh_mm(0.0), "00:00");
    }

    #[test]
    fn coordinates_have_hemisphere() {
        assert_eq!(coordinate(-33.86, 'N', 'S'), "33.8600S");
        assert_eq!(coordinate(116.4, 'E', 'W'), "116.4000E");
    }

    #[test]
    fn void_text() {
        let day = Pillar::from_index(0).unwrap();
        assert_eq!(void(day, [Branch::Xu, Branch::Hai]), "Jia-Zi (甲子): void Xu Hai (戌亥)");
    }

    #[test]
    fn hexagram_marks_world_and_response() {
        let info = gua_liuyao::resolve(gua_liuyao::Hexagram::from_bits(0b11_0111)).unwrap();
        let text = hexagram(&info);
        assert!(text.starts_with("Xiao Chu (9)"));
        let line1 = text.lines().last().unwrap();
        assert!(line1.starts_with('1'));
        assert!(line1.contains("Wu-Chou"));
        assert!(line1.ends_with("World"));
    }
}
