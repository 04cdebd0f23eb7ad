// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use barberbook_core::{Appointment, CalendarMonth};
use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::{ToSpan, civil::Date, tz::TimeZone};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Parses a day given as `YYYY-MM-DD`, `today` or `tomorrow`.
pub fn parse_date(today: Date, s: &str) -> Result<Date, Box<dyn Error>> {
    match s.trim() {
        "today" => Ok(today),
        "tomorrow" => Ok(today.checked_add(1.day())?),
        s => Date::strptime("%Y-%m-%d", s)
            .map_err(|_| format!("Invalid date: {s}. Expected format: YYYY-MM-DD").into()),
    }
}

/// Parses a month given as `YYYY-MM`.
pub fn parse_month(s: &str) -> Result<CalendarMonth, Box<dyn Error>> {
    let invalid = || format!("Invalid month: {s}. Expected format: YYYY-MM");
    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i16 = year.parse().map_err(|_| invalid())?;
    let month: i8 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid().into());
    }
    Ok(CalendarMonth::new(year, month - 1)?)
}

/// The booked day of an appointment in local time, or the raw stored value
/// when it cannot be read.
pub fn format_booking_day(appointment: &Appointment, tz: &TimeZone) -> String {
    match appointment.calendar_day(tz) {
        Ok(date) => date.strftime("%a, %b %-d, %Y").to_string(),
        Err(err) => {
            tracing::debug!(id = %appointment.id, %err, "unreadable appointment date");
            appointment.date.clone()
        }
    }
}
