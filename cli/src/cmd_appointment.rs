// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use barberbook_core::{Appointment, Barbershop, BookingDraft};
use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::appointment_formatter::AppointmentFormatter;
use crate::util::{OutputFormat, parse_date};

#[derive(Debug, Clone)]
pub struct CmdBook {
    pub barber_id: u32,
    pub service_id: u32,
    pub date: String,
    pub time: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdBook {
    pub const NAME: &str = "book";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Book an appointment")
            .arg(arg!(barber: <BARBER_ID> "The barber to book").value_parser(value_parser!(u32)))
            .arg(
                arg!(service: <SERVICE_ID> "One of the barber's services")
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                arg!(-d --date <DATE> "Day of the appointment, as YYYY-MM-DD")
                    .long_help("Day of the appointment, as YYYY-MM-DD, `today` or `tomorrow`.")
                    .required(true),
            )
            .arg(arg!(-t --time <TIME> "Time slot, e.g. \"2:30 PM\". Defaults to the preselected slot"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let (Some(barber_id), Some(service_id), Some(date)) = (
            matches.get_one::<u32>("barber"),
            matches.get_one::<u32>("service"),
            matches.get_one::<String>("date"),
        ) else {
            unreachable!("barber, service and date are required");
        };
        Self {
            barber_id: *barber_id,
            service_id: *service_id,
            date: date.clone(),
            time: matches.get_one::<String>("time").cloned(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, shop: &Barbershop) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "booking appointment...");
        let mut picker = shop.date_picker();
        let date = parse_date(shop.today(), &self.date)?;
        picker
            .select(date)
            .ok_or_else(|| format!("Date not available for booking: {date}"))?;

        let mut draft: BookingDraft = shop.new_booking(self.barber_id, self.service_id, &picker);
        if let Some(time) = self.time {
            draft.time = Some(time);
        }

        let appointment = shop.book(draft).await?;
        if self.output_format == OutputFormat::Table {
            println!("{}", "Booking confirmed!".green().bold());
        }
        print_appointments(shop, &[appointment], self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdAppointments {
    pub upcoming: bool,
    pub output_format: OutputFormat,
}

impl CmdAppointments {
    pub const NAME: &str = "appointments";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("list")
            .about("List booked appointments")
            .arg(arg!(-u --upcoming "Only show upcoming appointments"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            upcoming: matches.get_flag("upcoming"),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, shop: &Barbershop) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing appointments...");
        let appointments = if self.upcoming {
            shop.upcoming_appointments().await
        } else {
            shop.appointments().await
        };
        print_appointments(shop, &appointments, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdCancel {
    pub ids: Vec<String>,
    pub output_format: OutputFormat,
}

impl CmdCancel {
    pub const NAME: &str = "cancel";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Cancel upcoming appointments")
            .arg(arg_ids("cancel"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, shop: &Barbershop) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "cancelling appointments...");
        let mut cancelled = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            cancelled.push(shop.cancel(id).await?);
        }
        print_appointments(shop, &cancelled, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdComplete {
    pub ids: Vec<String>,
    pub output_format: OutputFormat,
}

impl CmdComplete {
    pub const NAME: &str = "complete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("done")
            .about("Mark upcoming appointments as completed")
            .arg(arg_ids("complete"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: get_ids(matches),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, shop: &Barbershop) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "completing appointments...");
        let mut completed = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            completed.push(shop.complete(id).await?);
        }
        print_appointments(shop, &completed, self.output_format);
        Ok(())
    }
}

fn arg_ids(action: &str) -> Arg {
    arg!(id: <ID> "The appointment ids")
        .long_help(format!("The ids of the appointments to {action}"))
        .num_args(1..)
}

fn get_ids(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("id")
        .map(|ids| ids.cloned().collect())
        .unwrap_or_default()
}

fn print_appointments(shop: &Barbershop, appointments: &[Appointment], format: OutputFormat) {
    let formatter = AppointmentFormatter::new(shop.time_zone().clone()).with_output_format(format);
    print!("{}", formatter.format(appointments));
}
