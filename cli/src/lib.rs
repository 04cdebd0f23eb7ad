// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the barbershop booking core.

mod appointment_formatter;
mod catalog_formatter;
mod cli;
mod cmd_appointment;
mod cmd_calendar;
mod cmd_catalog;
mod cmd_generate_completion;
mod config;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
