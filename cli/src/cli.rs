// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use barberbook_core::{APP_NAME, Barbershop};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::LocalBoxFuture};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cmd_appointment::{CmdAppointments, CmdBook, CmdCancel, CmdComplete};
use crate::cmd_calendar::CmdCalendar;
use crate::cmd_catalog::{CmdBarbers, CmdServices};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;

/// Run the barberbook command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` and quiet below warnings otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Book appointments with your barber.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/barberbook/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/barberbook/config.toml on Windows. Built-in defaults apply when no file exists.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdBarbers::command())
            .subcommand(CmdServices::command())
            .subcommand(CmdCalendar::command())
            .subcommand(CmdBook::command())
            .subcommand(CmdAppointments::command())
            .subcommand(CmdCancel::command())
            .subcommand(CmdComplete::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdBarbers::NAME, matches)) => Barbers(CmdBarbers::from(matches)),
            Some((CmdServices::NAME, matches)) => Services(CmdServices::from(matches)),
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)?),
            Some((CmdBook::NAME, matches)) => Book(CmdBook::from(matches)),
            Some((CmdAppointments::NAME, matches)) => {
                Appointments(CmdAppointments::from(matches))
            }
            Some((CmdCancel::NAME, matches)) => Cancel(CmdCancel::from(matches)),
            Some((CmdComplete::NAME, matches)) => Complete(CmdComplete::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List the barbers
    Barbers(CmdBarbers),

    /// List the services of a barber
    Services(CmdServices),

    /// Show the booking calendar
    Calendar(CmdCalendar),

    /// Book an appointment
    Book(CmdBook),

    /// List appointments
    Appointments(CmdAppointments),

    /// Cancel appointments
    Cancel(CmdCancel),

    /// Mark appointments as completed
    Complete(CmdComplete),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Barbers(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Services(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Calendar(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Book(a)         => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Appointments(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Cancel(a)       => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Complete(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Barbershop) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let shop = Barbershop::new(core_config).await?;

        f(&shop).await
    }
}
