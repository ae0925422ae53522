use std::path::PathBuf;

use almanac_config::{AlmanacConfig, Observer, parse_time_zone};
use almanac_core::{Body, GeoCoordinate, position_at};
use almanac_search::{
    BodyDay, DayClassification, Direction, SearchConfig, body_day, illuminated_percent,
    moon_orientation, noon_phase, sun_day, year_events,
};
use almanac_time::{jd_from_datetime, local_noon, resolve_local};
use anyhow::{Context, Result, anyhow, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, debug};

#[derive(Parser)]
#[command(name = "almanac", about = "Sun, Moon and planet almanac")]
struct Cli {
    /// TOML config file with search caps and a default observer
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ObserverArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// IANA time zone, e.g. Australia/Brisbane
    #[arg(long)]
    tz: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Azimuth, elevation and distance of a body at an instant
    Position {
        /// sun, moon, mercury, venus, mars, jupiter, saturn, uranus, neptune
        body: String,
        /// RFC 3339 instant, or local "YYYY-MM-DD HH:MM" in --tz (default now)
        #[arg(long)]
        time: Option<String>,
        #[command(flatten)]
        observer: ObserverArgs,
    },
    /// Rise, set, transit and twilight for a local calendar day
    Day {
        /// Body to search, default sun
        #[arg(default_value = "sun")]
        body: String,
        /// Local date YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[command(flatten)]
        observer: ObserverArgs,
    },
    /// Principal Moon phases of a year
    Phases {
        year: i32,
        /// IANA time zone the year and printed times are taken in
        #[arg(long)]
        tz: Option<String>,
    },
    /// Moon phase, illumination and disk orientation at local noon
    Moon {
        /// Local date YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[command(flatten)]
        observer: ObserverArgs,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Result<AlmanacConfig> {
    match path {
        Some(p) => AlmanacConfig::load_from_path(p)
            .with_context(|| format!("loading config {}", p.display())),
        None => Ok(AlmanacConfig::default()),
    }
}

/// Command-line location, falling back to the config file's observer.
fn resolve_observer(args: &ObserverArgs, config: &AlmanacConfig) -> Result<Observer> {
    let fallback = config.observer()?;
    let location = match (args.lat, args.lon, &fallback) {
        (Some(lat), Some(lon), _) => GeoCoordinate::new(lat, lon)?,
        (None, None, Some(obs)) => obs.location,
        (None, None, None) => {
            bail!("no location: pass --lat/--lon or set [observer] in the config")
        }
        _ => bail!("--lat and --lon must be given together"),
    };
    let tz = match (&args.tz, &fallback) {
        (Some(name), _) => parse_time_zone(name)?,
        (None, Some(obs)) => obs.tz,
        (None, None) => chrono_tz::UTC,
    };
    Ok(Observer { location, tz })
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}"))
}

/// RFC 3339 instants keep their offset; naive wall times are taken in `tz`.
fn parse_instant(s: &str, tz: Tz) -> Result<DateTime<Tz>> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&tz));
    }
    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    for format in formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(resolve_local(naive, tz)?);
        }
    }
    Err(anyhow!("invalid time {s:?}: expected RFC 3339 or YYYY-MM-DD HH:MM"))
}

fn fmt_time(t: &DateTime<Tz>) -> String {
    t.format("%Y-%m-%d %H:%M %Z").to_string()
}

fn print_day(day: &BodyDay) {
    println!("{} on {}", day.body, day.date);
    for t in &day.thresholds {
        match t.classification {
            DayClassification::Crossing => {}
            DayClassification::Risen => println!("  {:<13} above all day", t.threshold.name()),
            DayClassification::Set => println!("  {:<13} below all day", t.threshold.name()),
        }
    }
    for ev in &day.events {
        let dir = match ev.direction {
            Direction::Rising => "rising",
            Direction::Descending => "descending",
            Direction::Transit => "",
        };
        println!(
            "  {:<13} {:<10} {}  az {:6.1}  el {:6.2}",
            ev.threshold.name(),
            dir,
            fmt_time(&ev.time),
            ev.azimuth_deg,
            ev.elevation_deg
        );
    }
    match day.up_time {
        Some(d) => println!(
            "  up time       {}h {:02}m",
            d.num_minutes() / 60,
            d.num_minutes() % 60
        ),
        None => println!("  up time       n/a"),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let search: SearchConfig = config.search_config()?;

    match cli.command {
        Commands::Position {
            body,
            time,
            observer,
        } => {
            let body: Body = body.parse()?;
            let obs = resolve_observer(&observer, &config)?;
            let at = match time {
                Some(s) => parse_instant(&s, obs.tz)?,
                None => Utc::now().with_timezone(&obs.tz),
            };
            let p = position_at(body, &obs.location, &at)?;
            println!("{body} at {}", fmt_time(&at));
            println!("  azimuth      {:9.3}°", p.azimuth_deg);
            println!(
                "  elevation    {:9.3}° (true {:.3}°)",
                p.elevation_deg, p.true_elevation_deg
            );
            println!(
                "  RA / Dec     {:9.3}° {:+.3}° (topocentric)",
                p.topocentric.ra_deg, p.topocentric.dec_deg
            );
            println!(
                "  ecliptic     {:9.3}° {:+.3}°",
                p.ecliptic_lon_deg, p.ecliptic_lat_deg
            );
            println!(
                "  distance     {:.0} km ({:.2} Earth radii)",
                p.distance_km, p.distance_earth_radii
            );
        }

        Commands::Day {
            body,
            date,
            observer,
        } => {
            let body: Body = body.parse()?;
            let obs = resolve_observer(&observer, &config)?;
            let date = parse_date(&date)?;
            let day = if body == Body::Sun {
                sun_day(&obs.location, date, obs.tz, &search)?
            } else {
                body_day(body, &obs.location, date, obs.tz, &search)?
            };
            print_day(&day);
        }

        Commands::Phases { year, tz } => {
            let tz = match (tz, config.observer()?) {
                (Some(name), _) => parse_time_zone(&name)?,
                (None, Some(obs)) => obs.tz,
                (None, None) => chrono_tz::UTC,
            };
            for ev in year_events(year, tz)? {
                println!("{:<14} {}", ev.phase.name(), fmt_time(&ev.time));
            }
        }

        Commands::Moon { date, observer } => {
            let obs = resolve_observer(&observer, &config)?;
            let date = parse_date(&date)?;
            let mut cache = config.phase_cache();
            let phase = noon_phase(date, obs.tz, &mut cache)?;
            let noon = local_noon(date, obs.tz)?;
            let angles = moon_orientation(&obs.location, jd_from_datetime(&noon))?;
            debug!("orientation at {}: {angles:?}", fmt_time(&noon));
            println!("Moon at {}", fmt_time(&noon));
            println!("  phase        {phase:.4}");
            println!("  illuminated  {}%", illuminated_percent(phase));
            println!(
                "  bright limb  {:7.2}° ({:.2}° from zenith)",
                angles.bright_limb_deg,
                angles.zenith_limb_deg()
            );
            println!("  parallactic  {:7.2}°", angles.parallactic_deg);
            println!("  axis         {:7.2}°", angles.axis_deg);
            println!(
                "  libration    {:+.2}° lon, {:+.2}° lat",
                angles.libration_lon_deg, angles.libration_lat_deg
            );
        }

        Commands::Config => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn rfc3339_keeps_instant() {
        let t = parse_instant("2020-01-10T00:00:00Z", chrono_tz::Australia::Brisbane).unwrap();
        assert_eq!(t.hour(), 10);
    }

    #[test]
    fn naive_time_is_local() {
        let t = parse_instant("2020-01-10 05:01", chrono_tz::Australia::Brisbane).unwrap();
        assert_eq!((t.hour(), t.minute()), (5, 1));
        assert_eq!(t.naive_utc().hour(), 19);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("yesterday", chrono_tz::UTC).is_err());
        assert!(parse_date("2020-13-01").is_err());
    }

    #[test]
    fn observer_needs_both_coordinates() {
        let args = ObserverArgs {
            lat: Some(10.0),
            lon: None,
            tz: None,
        };
        assert!(resolve_observer(&args, &AlmanacConfig::default()).is_err());
    }

    #[test]
    fn observer_falls_back_to_config() {
        let config: AlmanacConfig = r#"
            [observer]
            latitude_deg = 55.95
            longitude_deg = -3.19
            time_zone = "Europe/London"
        "#
        .parse()
        .unwrap();
        let args = ObserverArgs {
            lat: None,
            lon: None,
            tz: None,
        };
        let obs = resolve_observer(&args, &config).unwrap();
        assert_eq!(obs.tz, chrono_tz::Europe::London);
    }

    #[test]
    fn cli_parses() {
        let args = [
            "almanac",
            "day",
            "moon",
            "--date",
            "2020-01-10",
            "--lat",
            "-27.467",
            "--lon",
            "153.033",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Commands::Day { .. }));
    }
}
