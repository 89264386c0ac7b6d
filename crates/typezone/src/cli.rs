use std::io::Write;

use clap::{Parser, Subcommand};
use typezone_core::{
    jiff::{fmt::strtime, tz::TimeZone, Timestamp},
    registry, Moment, Time, Utc,
};

use crate::zones;

/// The pattern used to display times when `--pattern` is not given.
pub const DEFAULT_PATTERN: &str = "%Y-%m-%d %H:%M:%S %Z (%:z)";

/// The command line interface for `typezone`.
#[derive(Parser, Debug)]
#[clap(name = "typezone", version, about)]
pub struct Args {
    /// The strftime-style pattern used to display times.
    #[clap(long, short, env = "TYPEZONE_PATTERN", default_value = DEFAULT_PATTERN, global = true)]
    pub pattern: String,
    /// The command to execute.
    #[clap(subcommand)]
    pub command: Command,
}

impl Args {
    /// Executes the command, writing its results to `output`.
    pub fn execute(self, output: &mut impl Write) -> anyhow::Result<()> {
        self.command.execute(&self.pattern, output)
    }
}

/// All available command line commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prints the current time in each zone. Without arguments, every
    /// built-in zone is printed.
    Now {
        /// Zones to print, by module name (`est`) or IANA identifier.
        zones: Vec<String>,
    },
    /// Converts a time from one zone to another.
    Convert {
        /// The zone clock times without an offset are read in.
        #[clap(long)]
        from: String,
        /// The zone to display the result in.
        #[clap(long)]
        to: String,
        /// The pattern `text` is parsed with when it is not RFC 3339.
        #[clap(long, default_value = "%Y-%m-%d %H:%M:%S")]
        input_pattern: String,
        /// The time to convert.
        text: String,
    },
    /// Lists the built-in zones and verifies that each one resolves.
    Zones,
}

impl Command {
    /// Executes the command, displaying times with `pattern`.
    pub fn execute(self, pattern: &str, output: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Self::Now { zones } => {
                let now = Time::<Utc>::now();
                let names = if zones.is_empty() {
                    zones::all().map(String::from).collect()
                } else {
                    zones
                };
                for name in names {
                    let zone = resolve(&name)?;
                    writeln!(output, "{name:<20} {}", display(now, zone, pattern)?)?;
                }
            }
            Self::Convert {
                from,
                to,
                input_pattern,
                text,
            } => {
                let instant = parse(&text, &input_pattern, &resolve(&from)?)?;
                writeln!(output, "{}", display(instant, resolve(&to)?, pattern)?)?;
            }
            Self::Zones => {
                for (module, name) in zones::TABLE {
                    let status = match registry::resolve(name) {
                        Ok(_) => String::from("ok"),
                        Err(err) => err.to_string(),
                    };
                    writeln!(output, "{module:<4} {name:<20} {status}")?;
                }
                zones::verify_all()?;
            }
        }
        Ok(())
    }
}

fn resolve(name: &str) -> Result<TimeZone, typezone_core::Error> {
    registry::resolve(zones::by_name(name).unwrap_or(name))
}

/// Reads RFC 3339 text as-is. Anything else is parsed with `pattern`, and
/// clock times without an offset are read in `zone`.
fn parse(text: &str, pattern: &str, zone: &TimeZone) -> anyhow::Result<Timestamp> {
    if let Ok(time) = text.parse::<Time<Utc>>() {
        return Ok(time.to_timestamp());
    }

    let parsed = strtime::parse(pattern, text)?;
    let timestamp = if parsed.offset().is_some() {
        parsed.to_timestamp()?
    } else {
        zone.to_timestamp(parsed.to_datetime()?)?
    };
    Ok(timestamp)
}

fn display(moment: impl Moment, zone: TimeZone, pattern: &str) -> anyhow::Result<String> {
    let zoned = Time::<Utc>::from_moment(moment).in_time_zone(zone);
    Ok(strtime::format(pattern, &zoned)?)
}
