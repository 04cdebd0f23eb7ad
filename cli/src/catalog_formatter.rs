// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use barberbook_core::{Barber, Service};
use colored::Color;

use crate::table::{Column, PaddingDirection, Table};
use crate::util::OutputFormat;

/// Renders a list of barbers.
#[derive(Debug)]
pub struct BarberList<'a> {
    pub barbers: &'a [&'a Barber],
    pub format: OutputFormat,
}

impl fmt::Display for BarberList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => write_json(f, self.barbers),
            OutputFormat::Table => {
                let columns = [
                    BarberColumn::Id,
                    BarberColumn::Name,
                    BarberColumn::Experience,
                    BarberColumn::Rating,
                ];
                write!(f, "{}", Table::new(&columns, self.barbers))
            }
        }
    }
}

/// Renders the services of one barber.
#[derive(Debug)]
pub struct ServiceList<'a> {
    pub services: &'a [&'a Service],
    pub format: OutputFormat,
}

impl fmt::Display for ServiceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            OutputFormat::Json => write_json(f, self.services),
            OutputFormat::Table => {
                let columns = [
                    ServiceColumn::Id,
                    ServiceColumn::Name,
                    ServiceColumn::Duration,
                    ServiceColumn::Price,
                ];
                write!(f, "{}", Table::new(&columns, self.services))
            }
        }
    }
}

fn write_json<T: serde::Serialize>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    let json = serde_json::to_string_pretty(items).map_err(|_| fmt::Error)?;
    writeln!(f, "{json}")
}

#[derive(Debug, Clone, Copy)]
enum BarberColumn {
    Id,
    Name,
    Experience,
    Rating,
}

impl<'b> Column<&'b Barber> for BarberColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            BarberColumn::Id => "ID",
            BarberColumn::Name => "Name",
            BarberColumn::Experience => "Experience",
            BarberColumn::Rating => "Rating",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &'b Barber) -> Cow<'a, str> {
        match self {
            BarberColumn::Id => data.id.to_string().into(),
            BarberColumn::Name => data.name.as_str().into(),
            BarberColumn::Experience => data.experience.as_str().into(),
            BarberColumn::Rating => format!("★ {:.1}", data.rating).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            BarberColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, _data: &&'b Barber) -> Option<Color> {
        match self {
            BarberColumn::Rating => Some(Color::Yellow),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ServiceColumn {
    Id,
    Name,
    Duration,
    Price,
}

impl<'b> Column<&'b Service> for ServiceColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ServiceColumn::Id => "ID",
            ServiceColumn::Name => "Service",
            ServiceColumn::Duration => "Duration",
            ServiceColumn::Price => "Price",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &'b Service) -> Cow<'a, str> {
        match self {
            ServiceColumn::Id => data.id.to_string().into(),
            ServiceColumn::Name => data.name.as_str().into(),
            ServiceColumn::Duration => data.duration.as_str().into(),
            ServiceColumn::Price => data.price.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ServiceColumn::Id | ServiceColumn::Price => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
