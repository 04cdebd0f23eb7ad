// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use barberbook_core::{Appointment, AppointmentStatus};
use colored::Color;
use jiff::tz::TimeZone;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{OutputFormat, format_booking_day};

#[derive(Debug)]
pub struct AppointmentFormatter {
    columns: Vec<AppointmentColumn>,
    format: OutputFormat,
}

impl AppointmentFormatter {
    pub fn new(tz: TimeZone) -> Self {
        Self {
            columns: vec![
                AppointmentColumn::Id,
                AppointmentColumn::Day(tz),
                AppointmentColumn::Time,
                AppointmentColumn::Barber,
                AppointmentColumn::Service,
                AppointmentColumn::Price,
                AppointmentColumn::Status,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, appointments: &'a [Appointment]) -> Display<'a> {
        Display {
            appointments,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    appointments: &'a [Appointment],
    formatter: &'a AppointmentFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(self.appointments).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table if self.appointments.is_empty() => {
                writeln!(f, "No appointments yet.")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(&self.formatter.columns, self.appointments)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppointmentColumn {
    Id,
    Day(TimeZone),
    Time,
    Barber,
    Service,
    Price,
    Status,
}

impl Column<Appointment> for AppointmentColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            AppointmentColumn::Id => "ID",
            AppointmentColumn::Day(_) => "Date",
            AppointmentColumn::Time => "Time",
            AppointmentColumn::Barber => "Barber",
            AppointmentColumn::Service => "Service",
            AppointmentColumn::Price => "Price",
            AppointmentColumn::Status => "Status",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Appointment) -> Cow<'a, str> {
        match self {
            AppointmentColumn::Id => data.id.as_str().into(),
            AppointmentColumn::Day(tz) => format_booking_day(data, tz).into(),
            AppointmentColumn::Time => data.time.as_str().into(),
            AppointmentColumn::Barber => data.barber_name.as_str().into(),
            AppointmentColumn::Service => data.service_name.as_str().into(),
            AppointmentColumn::Price => data.price.as_str().into(),
            AppointmentColumn::Status => data.status.as_ref().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            AppointmentColumn::Price | AppointmentColumn::Time => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &Appointment) -> Option<Color> {
        match self {
            AppointmentColumn::Status => Some(match data.status {
                AppointmentStatus::Upcoming => Color::Green,
                AppointmentStatus::Completed => Color::Blue,
                AppointmentStatus::Cancelled => Color::Red,
            }),
            AppointmentColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
