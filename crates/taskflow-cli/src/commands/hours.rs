//! Weekly work-hours commands for CLI.

use chrono::Weekday;
use clap::Subcommand;
use taskflow_core::{parse_weekday, weekday_name, Config, ConfigError};

#[derive(Subcommand)]
pub enum HoursAction {
    /// Show the weekly work hours
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set start/end for a weekday
    Set {
        /// Weekday name (monday..sunday)
        day: String,
        /// Start time, HH:MM
        start: String,
        /// End time, HH:MM
        end: String,
    },
    /// Enable a weekday
    Enable {
        /// Weekday name (monday..sunday)
        day: String,
    },
    /// Disable a weekday
    Disable {
        /// Weekday name (monday..sunday)
        day: String,
    },
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn run(action: HoursAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HoursAction::Show { json } => {
            let config = Config::load_or_default();
            if json {
                println!("{}", serde_json::to_string_pretty(&config.workweek)?);
            } else {
                for weekday in WEEK {
                    let day = config.workweek.day(weekday);
                    if day.enabled {
                        println!("{:<10} {} - {}", weekday_name(weekday), day.start, day.end);
                    } else {
                        println!("{:<10} off", weekday_name(weekday));
                    }
                }
            }
        }
        HoursAction::Set { day, start, end } => {
            let weekday = lookup(&day)?;
            let mut config = Config::load_or_default();
            let day_config = config.workweek.day_mut(weekday);
            day_config.start = start;
            day_config.end = end;

            // Reject unparsable hours here; the allocator would silently
            // treat the day as disabled.
            if day_config.start_hour().is_none() || day_config.end_hour().is_none() {
                return Err(ConfigError::InvalidValue {
                    key: format!("workweek.{}", weekday_name(weekday)),
                    message: format!(
                        "hours must be HH:MM, got `{}` - `{}`",
                        day_config.start, day_config.end
                    ),
                }
                .into());
            }

            config.save()?;
            println!("Work hours updated: {}", weekday_name(weekday));
        }
        HoursAction::Enable { day } => {
            let weekday = lookup(&day)?;
            let mut config = Config::load_or_default();
            config.workweek.day_mut(weekday).enabled = true;
            config.save()?;
            println!("{} enabled", weekday_name(weekday));
        }
        HoursAction::Disable { day } => {
            let weekday = lookup(&day)?;
            let mut config = Config::load_or_default();
            config.workweek.day_mut(weekday).enabled = false;
            config.save()?;
            println!("{} disabled", weekday_name(weekday));
        }
    }
    Ok(())
}

fn lookup(day: &str) -> Result<Weekday, Box<dyn std::error::Error>> {
    parse_weekday(day).ok_or_else(|| format!("unknown weekday `{day}`; expected monday..sunday").into())
}
