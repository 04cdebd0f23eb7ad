// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use barberbook_core::Barbershop;
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::catalog_formatter::{BarberList, ServiceList};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdBarbers {
    pub output_format: OutputFormat,
}

impl CmdBarbers {
    pub const NAME: &str = "barbers";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the barbers")
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, shop: &Barbershop) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing barbers...");
        let barbers: Vec<_> = shop.catalog().barbers().collect();
        let list = BarberList {
            barbers: &barbers,
            format: self.output_format,
        };
        print!("{list}");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdServices {
    pub barber_id: u32,
    pub output_format: OutputFormat,
}

impl CmdServices {
    pub const NAME: &str = "services";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the services offered by a barber")
            .arg(arg!(barber: <BARBER_ID> "The barber to show").value_parser(value_parser!(u32)))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let barber_id = match matches.get_one::<u32>("barber") {
            Some(id) => *id,
            None => unreachable!("barber is required"),
        };
        Self {
            barber_id,
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, shop: &Barbershop) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing services...");
        let barber = shop
            .catalog()
            .barber(self.barber_id)
            .ok_or_else(|| format!("Barber not found: {}", self.barber_id))?;

        let services: Vec<_> = shop.catalog().services_for_barber(barber.id).collect();
        if self.output_format == OutputFormat::Table {
            println!(
                "{} {} ({} experience)\n{}\n",
                barber.name.bold(),
                format!("★ {:.1}", barber.rating).yellow(),
                barber.experience,
                barber.bio.italic(),
            );
        }
        let list = ServiceList {
            services: &services,
            format: self.output_format,
        };
        print!("{list}");
        Ok(())
    }
}
