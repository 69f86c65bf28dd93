//! `gua`: Liuyao charts, sexagenary pillars and true solar time.

mod render;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gua_config::{CalendarSource, GuaConfig, LocationConfig, OutputFormat};
use gua_ganzhi::{Element, Pillar, SexagenaryClock, Stem};
use gua_liuyao::{ChartAssembler, ChartRequest, Hexagram, parse_line_values, resolve, void_branches};
use gua_time::{AnalyticSun, CivilDate, ClockReading, SolarTermSource, true_solar_time};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gua", version, about = "Liuyao hexagram charts and the sexagenary calendar")]
struct Cli {
    /// TOML config with default location, calendar source and output format
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Use fixed jie dates instead of the Sun's longitude
    #[arg(long, global = true)]
    approximate: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for six lines at a date, time and place
    Chart {
        #[command(flatten)]
        at: When,
        /// Six binary line values bottom to top, e.g. 111011
        #[arg(long, conflicts_with = "casts")]
        lines: Option<String>,
        /// Six traditional casts bottom to top (6, 7, 8, 9), e.g. 978777
        #[arg(long)]
        casts: Option<String>,
        /// Moving line positions (1-6), comma separated
        #[arg(long, value_delimiter = ',', conflicts_with = "casts")]
        moving: Vec<u8>,
        /// Day Master stem overriding the day stem (pinyin or Chinese)
        #[arg(long)]
        day_master: Option<Stem>,
        /// Useful element hint (Wood, Fire, Earth, Metal, Water)
        #[arg(long)]
        useful: Option<Element>,
    },
    /// Year, month, day and hour pillars at true solar time
    Pillars {
        #[command(flatten)]
        at: When,
    },
    /// True solar time for a clock reading
    SolarTime {
        #[command(flatten)]
        at: When,
    },
    /// Palace, generation and najia of a line pattern
    Hexagram {
        /// Six binary line values bottom to top, e.g. 111011
        lines: String,
    },
    /// Void branches of a day pillar
    Void {
        /// Day pillar index in the 60-cycle (0 = Jia-Zi)
        index: u8,
    },
}

/// Date, time and place of a reading. Omitted coordinates come from config.
#[derive(Args)]
struct When {
    /// Civil date (YYYY-MM-DD)
    #[arg(long)]
    date: CivilDate,
    /// Clock time, HH:MM or fractional hours
    #[arg(long, value_parser = parse_hour)]
    time: f64,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Civil time-zone meridian in degrees
    #[arg(long, allow_hyphen_values = true)]
    meridian: Option<f64>,
}

impl When {
    /// An explicit longitude without a meridian selects its nominal zone.
    fn reading(&self, location: &LocationConfig) -> ClockReading {
        let longitude = self.lon.unwrap_or(location.longitude);
        let latitude = self.lat.unwrap_or(location.latitude);
        let meridian = match (self.meridian, self.lon) {
            (Some(m), _) => Some(m),
            (None, Some(_)) => None,
            (None, None) => location.meridian,
        };
        let reading = ClockReading::new(self.date, self.time, longitude, latitude);
        match meridian {
            Some(m) => reading.with_meridian(m),
            None => reading,
        }
    }
}

fn parse_hour(s: &str) -> Result<f64, String> {
    let hour = match s.split_once(':') {
        Some((h, m)) => {
            let h: u32 = h.parse().map_err(|_| format!("bad hour in {s:?}"))?;
            let m: u32 = m.parse().map_err(|_| format!("bad minute in {s:?}"))?;
            if m >= 60 {
                return Err(format!("minute {m} out of range"));
            }
            h as f64 + m as f64 / 60.0
        }
        None => s.parse().map_err(|_| format!("bad time {s:?}"))?,
    };
    if !(0.0..24.0).contains(&hour) {
        return Err(format!("time {s} outside 00:00..24:00"));
    }
    Ok(hour)
}

/// Digits of a line string; commas and spaces are ignored.
fn parse_digits(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .with_context(|| format!("'{c}' is not a digit in {s:?}"))
        })
        .collect()
}

#[derive(Serialize)]
struct VoidReport {
    day: Pillar,
    void: [gua_ganzhi::Branch; 2],
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GuaConfig::load_or_default(cli.config.as_deref())?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let sun = AnalyticSun::default();
    let source: Option<&dyn SolarTermSource> =
        match (config.calendar.source, cli.approximate) {
            (CalendarSource::Astronomical, false) => Some(&sun),
            _ => None,
        };
    let clock = source.map_or_else(SexagenaryClock::approximate, SexagenaryClock::new);

    match cli.command {
        Commands::Chart {
            at,
            lines,
            casts,
            moving,
            day_master,
            useful,
        } => {
            let reading = at.reading(&config.location);
            let mut request = match (lines, casts) {
                (Some(l), None) => ChartRequest::from_values(&parse_digits(&l)?, &moving, reading)?,
                (None, Some(c)) => ChartRequest::from_casts(&parse_digits(&c)?, reading)?,
                _ => bail!("give the lines with either --lines or --casts"),
            };
            request.day_master = day_master;
            request.useful_element = useful;
            let assembler = source.map_or_else(ChartAssembler::approximate, ChartAssembler::new);
            let chart = assembler.assemble(&request)?;
            emit(format, &chart, render::chart)
        }

        Commands::Pillars { at } => {
            let sp = clock.solar_pillars(&at.reading(&config.location))?;
            emit(format, &sp, render::pillars)
        }

        Commands::SolarTime { at } => {
            let correction = true_solar_time(&at.reading(&config.location))?;
            emit(format, &correction, render::solar_time)
        }

        Commands::Hexagram { lines } => {
            let values = parse_line_values(&parse_digits(&lines)?)?;
            let info = resolve(Hexagram::from_lines(values))?;
            emit(format, &info, render::hexagram)
        }

        Commands::Void { index } => {
            let day = Pillar::from_index(index)?;
            let report = VoidReport {
                day,
                void: void_branches(day),
            };
            emit(format, &report, |r| render::void(r.day, r.void))
        }
    }
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl Fn(&T) -> String) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", text(value)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn hour_formats() {
        assert_eq!(parse_hour("14:30"), Ok(14.5));
        assert_eq!(parse_hour("9.25"), Ok(9.25));
        assert!(parse_hour("24:00").is_err());
        assert!(parse_hour("10:75").is_err());
        assert!(parse_hour("noon").is_err());
    }

    #[test]
    fn digits_ignore_separators() {
        assert_eq!(parse_digits("1,1,1 0 1 1").unwrap(), vec![1, 1, 1, 0, 1, 1]);
        assert!(parse_digits("11x011").is_err());
    }

    #[test]
    fn explicit_longitude_drops_config_meridian() {
        let cli = Cli::try_parse_from([
            "gua", "pillars", "--date", "2024-03-20", "--time", "10:00", "--lon", "-74.0",
        ])
        .unwrap();
        let Commands::Pillars { at } = cli.command else {
            panic!("expected pillars");
        };
        let reading = at.reading(&LocationConfig::default());
        assert_eq!(reading.meridian_deg, None);
        assert_eq!(reading.longitude_deg, -74.0);
        assert_eq!(reading.latitude_deg, LocationConfig::default().latitude);
    }

    #[test]
    fn chart_args_parse() {
        let cli = Cli::try_parse_from([
            "gua", "--json", "chart", "--date", "2024-03-20", "--time", "10", "--lines", "111011",
            "--moving", "2,5", "--day-master", "Geng", "--useful", "water",
        ])
        .unwrap();
        assert!(cli.json);
        let Commands::Chart {
            moving,
            day_master,
            useful,
            ..
        } = cli.command
        else {
            panic!("expected chart");
        };
        assert_eq!(moving, vec![2, 5]);
        assert_eq!(day_master, Some(Stem::Geng));
        assert_eq!(useful, Some(Element::Water));
    }

    #[test]
    fn casts_conflict_with_moving() {
        let parsed = Cli::try_parse_from([
            "gua", "chart", "--date", "2024-03-20", "--time", "10", "--casts", "977877",
            "--moving", "1",
        ]);
        assert!(parsed.is_err());
    }
}
