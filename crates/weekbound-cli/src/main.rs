//! Command-line interface for the `weekbound` library.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use weekbound::{summarize_week, tz_week_number, utc_week_number, WeekStartDay};

#[derive(Parser)]
#[command(name = "weekbound", version, about = "Week boundaries and ISO week numbers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the week surrounding a datetime as JSON
    Bounds {
        /// RFC 3339 datetime, e.g. 2024-03-14T15:30:00Z
        datetime: String,

        /// IANA timezone the week is aligned to
        #[arg(long, default_value = "UTC")]
        timezone: String,

        /// Which day begins the week
        #[arg(long, value_enum, default_value_t = WeekStartArg::Monday)]
        week_start: WeekStartArg,
    },
    /// Print the ISO week number of a datetime as JSON
    Number {
        /// RFC 3339 datetime, e.g. 2024-03-14T15:30:00Z
        datetime: String,

        /// IANA timezone whose local day the week number is taken from
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeekStartArg {
    Monday,
    Sunday,
}

impl From<WeekStartArg> for WeekStartDay {
    fn from(arg: WeekStartArg) -> Self {
        match arg {
            WeekStartArg::Monday => WeekStartDay::Monday,
            WeekStartArg::Sunday => WeekStartDay::Sunday,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Bounds {
            datetime,
            timezone,
            week_start,
        } => {
            let week = summarize_week(&datetime, &timezone, week_start.into())?;
            println!("{}", serde_json::to_string_pretty(&week)?);
        }
        Command::Number { datetime, timezone } => {
            let utc: DateTime<Utc> = DateTime::parse_from_rfc3339(&datetime)
                .with_context(|| format!("invalid RFC 3339 datetime '{datetime}'"))?
                .with_timezone(&Utc);
            let output = serde_json::json!({
                "timezone": timezone,
                "week_number": tz_week_number(utc, &timezone)?,
                "utc_week_number": utc_week_number(utc),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
