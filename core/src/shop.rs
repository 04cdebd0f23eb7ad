// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use jiff::{Zoned, civil::Date, tz::TimeZone};
use tokio::fs;

use crate::appointment::Appointment;
use crate::booking::{BookingDraft, TimeSlots};
use crate::calendar::{DateBounds, DatePicker};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use crate::store::AppointmentStore;

/// Barbershop booking core.
#[derive(Debug, Clone)]
pub struct Barbershop {
    now: Zoned,
    config: Config,
    catalog: Catalog,
    time_slots: TimeSlots,
    store: AppointmentStore,
}

impl Barbershop {
    /// Creates a new instance with the given configuration, storing
    /// appointments under the state directory.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        prepare(&config).await?;

        let state_dir = config
            .state_dir
            .clone()
            .ok_or("State directory is not configured")?;
        Self::with_storage(config, Arc::new(FileStorage::new(state_dir))).await
    }

    /// Creates an instance that keeps appointments in memory only.
    pub async fn ephemeral(config: Config) -> Result<Self, Box<dyn Error>> {
        Self::with_storage(config, Arc::new(MemoryStorage::new())).await
    }

    /// Creates an instance over the given storage. The configuration is used
    /// as is.
    pub async fn with_storage(
        config: Config,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Result<Self, Box<dyn Error>> {
        let now = Zoned::now();

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path).await?,
            None => Catalog::builtin(),
        };
        let time_slots = config
            .time_slots()
            .map_err(|e| format!("Invalid time slot configuration: {e}"))?;

        Ok(Self {
            now,
            config,
            catalog,
            time_slots,
            store: AppointmentStore::new(storage),
        })
    }

    /// The time captured when the instance was created.
    pub fn now(&self) -> &Zoned {
        &self.now
    }

    /// Refresh the current time to now.
    pub fn refresh_now(&mut self) {
        self.now = Zoned::now();
    }

    /// Today's date in local time.
    pub fn today(&self) -> Date {
        self.now.date()
    }

    /// The local time zone.
    pub fn time_zone(&self) -> &TimeZone {
        self.now.time_zone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn time_slots(&self) -> &TimeSlots {
        &self.time_slots
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    /// Bookable days: from today, up to the booking window when configured.
    pub fn booking_bounds(&self) -> DateBounds {
        let today = self.today();
        let max = self
            .config
            .booking_window_days
            .and_then(|days| today.checked_add(jiff::Span::new().days(days)).ok());
        DateBounds::new(Some(today), max)
    }

    /// A date picker with today selected.
    pub fn date_picker(&self) -> DatePicker {
        DatePicker::new(self.today(), self.booking_bounds())
    }

    /// A booking draft for the given barber and service on the picker's
    /// selected day, with the preselected time slot.
    pub fn new_booking(&self, barber_id: u32, service_id: u32, picker: &DatePicker) -> BookingDraft {
        BookingDraft {
            barber_id,
            service_id,
            date: picker.selected(),
            time: Some(self.time_slots.default_slot().to_string()),
        }
    }

    /// Validates the draft and stores it as an upcoming appointment.
    #[tracing::instrument(skip(self))]
    pub async fn book(&self, draft: BookingDraft) -> Result<Appointment, Box<dyn Error>> {
        let draft = draft.resolve(
            &self.catalog,
            &self.time_slots,
            &self.booking_bounds(),
            self.time_zone(),
        )?;
        let appointment = self.store.book(draft).await?;
        tracing::info!(id = %appointment.id, "appointment booked");
        Ok(appointment)
    }

    /// All stored appointments, empty when the history cannot be read.
    pub async fn appointments(&self) -> Vec<Appointment> {
        self.store.list_or_empty().await
    }

    /// Upcoming appointments only.
    pub async fn upcoming_appointments(&self) -> Vec<Appointment> {
        let mut appointments = self.appointments().await;
        appointments.retain(Appointment::is_upcoming);
        appointments
    }

    /// Cancels an upcoming appointment.
    pub async fn cancel(&self, id: &str) -> Result<Appointment, Box<dyn Error>> {
        Ok(self.store.cancel(id).await?)
    }

    /// Marks an upcoming appointment as completed.
    pub async fn complete(&self, id: &str) -> Result<Appointment, Box<dyn Error>> {
        Ok(self.store.complete(id).await?)
    }
}

async fn prepare(config: &Config) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = &config.state_dir {
        tracing::info!(path = %parent.display(), "ensuring state directory exists");
        fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("Failed to create state directory: {e}"))?;
    }
    Ok(())
}
