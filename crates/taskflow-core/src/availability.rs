//! Weekly availability: per-weekday work hours and slot derivation.
//!
//! Work hours are wall-clock `"HH:MM"` strings, same-day. Only the hour
//! component participates in slot counting, consistent with the fixed
//! two-hour slot granularity.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Fixed slot duration in hours.
pub const SLOT_HOURS: u32 = 2;

/// Work hours for a single weekday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkDayConfig {
    pub start: String,
    pub end: String,
    pub enabled: bool,
}

impl Default for WorkDayConfig {
    // Missing config means the day is not worked.
    fn default() -> Self {
        Self {
            start: "09:00".to_string(),
            end: "17:00".to_string(),
            enabled: false,
        }
    }
}

impl WorkDayConfig {
    pub fn new(start: impl Into<String>, end: impl Into<String>, enabled: bool) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            enabled,
        }
    }

    pub fn start_hour(&self) -> Option<u32> {
        parse_hour(&self.start)
    }

    pub fn end_hour(&self) -> Option<u32> {
        parse_hour(&self.end)
    }
}

fn parse_hour(value: &str) -> Option<u32> {
    let hour: u32 = value.split(':').next()?.trim().parse().ok()?;
    (hour <= 23).then_some(hour)
}

/// Derived availability for one enabled day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAvailability {
    pub start_hour: u32,
    pub slot_count: u32,
}

/// The full weekly work-hours pattern.
///
/// Serde defaults make every missing weekday deserialize as disabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WeekSchedule {
    pub monday: WorkDayConfig,
    pub tuesday: WorkDayConfig,
    pub wednesday: WorkDayConfig,
    pub thursday: WorkDayConfig,
    pub friday: WorkDayConfig,
    pub saturday: WorkDayConfig,
    pub sunday: WorkDayConfig,
}

impl WeekSchedule {
    pub fn day(&self, weekday: Weekday) -> &WorkDayConfig {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut WorkDayConfig {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Availability for a calendar date.
    ///
    /// Returns `None` for disabled days and for enabled days whose hours do
    /// not parse (treated as disabled, never an error). An enabled day
    /// shorter than one slot yields `Some` with a zero slot count.
    pub fn availability_on(&self, date: NaiveDate) -> Option<DayAvailability> {
        let config = self.day(date.weekday());
        if !config.enabled {
            return None;
        }

        let (Some(start_hour), Some(end_hour)) = (config.start_hour(), config.end_hour()) else {
            log::warn!(
                "work hours for {} do not parse ({} - {}), treating day as disabled",
                weekday_name(date.weekday()),
                config.start,
                config.end
            );
            return None;
        };

        let slot_count = if end_hour > start_hour {
            (end_hour - start_hour) / SLOT_HOURS
        } else {
            0
        };

        Some(DayAvailability {
            start_hour,
            slot_count,
        })
    }
}

/// Lowercase English weekday name, the key used in config files.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Capitalized weekday label as rendered in schedule output.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a lowercase weekday name back to a `Weekday`.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
