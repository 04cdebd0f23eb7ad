// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Persisted appointment history.
//!
//! The whole history lives in one storage slot as a JSON array. Every
//! mutation reads the array, changes it, and writes it back while holding the
//! store's write lock, so concurrent mutations through the same store never
//! lose each other's records.

use std::sync::Arc;

use jiff::Timestamp;
use tokio::sync::Mutex;

use crate::appointment::{Appointment, AppointmentDraft, AppointmentStatus};
use crate::storage::{KeyValueStorage, StorageError};

/// Name of the storage slot holding the appointment array.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Errors raised by the appointment store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slot could not be read or does not hold an appointment array.
    #[error("failed to read appointments: {0}")]
    StorageRead(String),

    /// The slot could not be written, the previous content is kept.
    #[error("failed to save appointments: {0}")]
    StorageWrite(#[source] StorageError),

    /// No appointment with this id.
    #[error("appointment not found: {0}")]
    NotFound(String),

    /// An appointment with this id is already stored.
    #[error("appointment already exists: {0}")]
    DuplicateId(String),

    /// The requested status change is not allowed.
    #[error("cannot change appointment {id} from {from} to {to}")]
    InvalidTransition {
        /// The appointment id.
        id: String,
        /// Its current status.
        from: AppointmentStatus,
        /// The requested status.
        to: AppointmentStatus,
    },
}

/// Create, list and status updates over the appointment slot.
///
/// Cloning is cheap, clones share the storage and the write lock.
#[derive(Debug, Clone)]
pub struct AppointmentStore {
    storage: Arc<dyn KeyValueStorage>,
    write_lock: Arc<Mutex<()>>,
}

impl AppointmentStore {
    /// Creates a store over the given storage.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All appointments in the order they were stored.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Appointment>, StoreError> {
        let raw = self
            .storage
            .get_item(APPOINTMENTS_KEY)
            .await
            .map_err(|e| StoreError::StorageRead(e.to_string()))?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::StorageRead(format!("malformed appointment data: {e}"))),
        }
    }

    /// Like [`list`](Self::list), but falls back to an empty list when the
    /// slot cannot be read.
    pub async fn list_or_empty(&self) -> Vec<Appointment> {
        match self.list().await {
            Ok(appointments) => appointments,
            Err(err) => {
                tracing::warn!(%err, "showing no appointments");
                Vec::new()
            }
        }
    }

    /// Looks up an appointment by id.
    pub async fn get(&self, id: &str) -> Result<Option<Appointment>, StoreError> {
        Ok(self.list().await?.into_iter().find(|a| a.id == id))
    }

    /// Appends an appointment to the end of the history. Its id must not be
    /// taken.
    #[tracing::instrument(skip(self, appointment), fields(id = %appointment.id))]
    pub async fn create(&self, appointment: Appointment) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut appointments = self.list().await?;
        if appointments.iter().any(|a| a.id == appointment.id) {
            return Err(StoreError::DuplicateId(appointment.id));
        }
        appointments.push(appointment);
        self.save(&appointments).await?;
        tracing::debug!(count = appointments.len(), "appointment created");
        Ok(())
    }

    /// Assigns a fresh id to the draft and appends it as an upcoming
    /// appointment.
    #[tracing::instrument(skip(self, draft))]
    pub async fn book(&self, draft: AppointmentDraft) -> Result<Appointment, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut appointments = self.list().await?;
        let id = next_id(&appointments, Timestamp::now());
        let appointment = draft.into_appointment(id);
        appointments.push(appointment.clone());
        self.save(&appointments).await?;
        tracing::debug!(id = %appointment.id, "appointment booked");
        Ok(appointment)
    }

    /// Moves an appointment to a new status.
    ///
    /// Only upcoming appointments change, to completed or cancelled.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<Appointment, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut appointments = self.list().await?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if !appointment.status.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                from: appointment.status,
                to: status,
            });
        }
        appointment.status = status;
        let updated = appointment.clone();

        self.save(&appointments).await?;
        tracing::debug!(status = %updated.status, "appointment updated");
        Ok(updated)
    }

    /// Cancels an upcoming appointment.
    pub async fn cancel(&self, id: &str) -> Result<Appointment, StoreError> {
        self.update_status(id, AppointmentStatus::Cancelled).await
    }

    /// Marks an upcoming appointment as completed.
    pub async fn complete(&self, id: &str) -> Result<Appointment, StoreError> {
        self.update_status(id, AppointmentStatus::Completed).await
    }

    async fn save(&self, appointments: &[Appointment]) -> Result<(), StoreError> {
        let json = serde_json::to_string(appointments)
            .map_err(|e| StoreError::StorageWrite(StorageError::Unavailable(e.to_string())))?;
        self.storage
            .set_item(APPOINTMENTS_KEY, &json)
            .await
            .map_err(StoreError::StorageWrite)
    }
}

/// Milliseconds since the epoch, bumped past every numeric id already taken.
///
/// When no larger number is left, a `<millis>-<n>` id not yet taken is used.
fn next_id(appointments: &[Appointment], now: Timestamp) -> String {
    let now = now.as_millisecond();
    let taken = appointments
        .iter()
        .filter_map(|a| a.id.parse::<i64>().ok())
        .max();
    match taken {
        Some(max) if max >= now => match max.checked_add(1) {
            Some(id) => id.to_string(),
            None => (1..)
                .map(|n| format!("{now}-{n}"))
                .find(|id| appointments.iter().all(|a| &a.id != id))
                .unwrap_or_default(),
        },
        _ => now.to_string(),
    }
}
