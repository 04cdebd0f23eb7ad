// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Write};

use barberbook_core::{
    Barbershop, CalendarMonth, DatePicker, WEEKDAY_NAMES, can_navigate_to_next_month,
    can_navigate_to_previous_month,
};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::util::{OutputFormat, parse_date, parse_month};

const CELL_WIDTH: usize = 4;

#[derive(Debug, Clone)]
pub struct CmdCalendar {
    pub month: Option<CalendarMonth>,
    pub select: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the bookable days of a month")
            .arg(arg!(-m --month <MONTH> "Month to show, as YYYY-MM"))
            .arg(
                arg!(-s --select <DATE> "Day to select, as YYYY-MM-DD")
                    .long_help("Day to select, as YYYY-MM-DD, `today` or `tomorrow`. Defaults to today."),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let month = match matches.get_one::<String>("month") {
            Some(month) => Some(parse_month(month)?),
            None => None,
        };
        Ok(Self {
            month,
            select: matches.get_one::<String>("select").cloned(),
            output_format: OutputFormat::from(matches),
        })
    }

    pub async fn run(self, shop: &Barbershop) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing calendar...");
        let mut picker = shop.date_picker();

        if let Some(select) = &self.select {
            let date = parse_date(shop.today(), select)?;
            picker
                .select(date)
                .ok_or_else(|| format!("Date not available for booking: {date}"))?;
            picker.show_month(CalendarMonth::of(date));
        }

        if let Some(month) = self.month {
            if !picker.show_month(month) {
                return Err(format!("Month {month} is outside the bookable range").into());
            }
        }

        match self.output_format {
            OutputFormat::Table => print!("{}", render(&picker)),
            OutputFormat::Json => println!("{}", to_json(&picker)?),
        }
        Ok(())
    }
}

/// Renders the picker as a text month grid.
pub fn render(picker: &DatePicker) -> String {
    let month = picker.displayed_month();
    let bounds = picker.bounds();
    let prev = if can_navigate_to_previous_month(month, bounds.min) { "‹" } else { " " };
    let next = if can_navigate_to_next_month(month, bounds.max) { "›" } else { " " };

    let width = CELL_WIDTH * WEEKDAY_NAMES.len();
    let mut out = String::new();
    let title = format!("{prev} {} {next}", picker.month_label());
    let _ = writeln!(out, "{:^width$}", title.bold());

    for name in WEEKDAY_NAMES {
        let _ = write!(out, "{:>CELL_WIDTH$}", name.dimmed());
    }
    out.push('\n');

    for (i, cell) in picker.cells().iter().enumerate() {
        let text = match cell.day {
            Some(day) => format!("{day:>CELL_WIDTH$}"),
            None => " ".repeat(CELL_WIDTH),
        };
        let text = if cell.is_selected {
            text.reversed().bold().to_string()
        } else if cell.is_disabled {
            text.dimmed().strikethrough().to_string()
        } else {
            text
        };
        out.push_str(&text);
        if i % WEEKDAY_NAMES.len() == WEEKDAY_NAMES.len() - 1 {
            out.push('\n');
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn to_json(picker: &DatePicker) -> Result<String, Box<dyn Error>> {
    let month = picker.displayed_month();
    let bounds = picker.bounds();
    let value = serde_json::json!({
        "month": month.to_string(),
        "label": picker.month_label(),
        "selected": picker.selected().to_string(),
        "canGoPrevious": can_navigate_to_previous_month(month, bounds.min),
        "canGoNext": can_navigate_to_next_month(month, bounds.max),
        "cells": picker.cells(),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
