// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::booking::TimeSlots;

/// The name of the application.
pub const APP_NAME: &str = "barberbook";

/// Configuration for the barbershop core.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory for storing application state, the appointment slot lives
    /// here.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// JSON catalog of barbers and services, the builtin catalog when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Bookable time slot labels.
    #[serde(default)]
    pub time_slots: Option<Vec<String>>,

    /// Preselected time slot.
    #[serde(default)]
    pub default_time: Option<String>,

    /// How many days ahead bookings are accepted, unlimited when unset.
    #[serde(default)]
    pub booking_window_days: Option<u16>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                );
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        }

        if let Some(a) = &self.catalog_path {
            self.catalog_path = Some(
                expand_path(a).map_err(|e| format!("Failed to expand catalog path: {e}"))?,
            );
        }

        Ok(())
    }

    /// The configured time slots, the default set when none are configured.
    pub fn time_slots(&self) -> Result<TimeSlots, Box<dyn Error>> {
        let slots = match (&self.time_slots, &self.default_time) {
            (None, None) => TimeSlots::default(),
            (None, Some(default)) => {
                let base = TimeSlots::default();
                TimeSlots::new(base.slots().to_vec(), Some(default.clone()))?
            }
            (Some(slots), default) => TimeSlots::new(slots.clone(), default.clone())?,
        };
        Ok(slots)
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}
