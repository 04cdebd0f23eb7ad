// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Turning a barber, service, day and slot choice into an appointment draft.

use jiff::{civil::Date, tz::TimeZone};

use crate::appointment::{AppointmentDraft, booking_timestamp};
use crate::calendar::DateBounds;
use crate::catalog::Catalog;

/// Slot labels offered when none are configured.
pub const DEFAULT_TIME_SLOTS: [&str; 14] = [
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "1:00 PM", "1:30 PM",
    "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM",
];

/// Slot preselected when none is configured.
pub const DEFAULT_TIME: &str = "10:00 AM";

/// Errors raised while validating a booking.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// No barber with this id in the catalog.
    #[error("barber not found: {0}")]
    UnknownBarber(u32),

    /// No service with this id in the catalog.
    #[error("service not found: {0}")]
    UnknownService(u32),

    /// The service belongs to another barber.
    #[error("service {service_id} is not offered by barber {barber_id}")]
    ServiceNotOffered {
        /// The chosen barber.
        barber_id: u32,
        /// The chosen service.
        service_id: u32,
    },

    /// The label is not one of the bookable slots.
    #[error("time slot not available: {0}")]
    UnknownTimeSlot(String),

    /// The day is outside the bookable range.
    #[error("date not available for booking: {0}")]
    DateUnavailable(Date),

    /// A slot set must not be empty.
    #[error("at least one time slot is required")]
    NoTimeSlots,

    /// The day could not be turned into a timestamp.
    #[error("failed to convert booking date: {0}")]
    Timestamp(#[from] jiff::Error),
}

/// The ordered set of bookable time slot labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlots {
    slots: Vec<String>,
    default: String,
}

impl TimeSlots {
    /// Creates a slot set. Without an explicit default the first slot is
    /// preselected.
    pub fn new(slots: Vec<String>, default: Option<String>) -> Result<Self, BookingError> {
        let default = match default {
            Some(label) if slots.contains(&label) => label,
            Some(label) => return Err(BookingError::UnknownTimeSlot(label)),
            None => slots.first().cloned().ok_or(BookingError::NoTimeSlots)?,
        };
        Ok(Self { slots, default })
    }

    /// All slot labels in display order.
    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// The preselected slot.
    #[must_use]
    pub fn default_slot(&self) -> &str {
        &self.default
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.slots.iter().any(|s| s == label)
    }
}

impl Default for TimeSlots {
    fn default() -> Self {
        Self {
            slots: DEFAULT_TIME_SLOTS.iter().map(ToString::to_string).collect(),
            default: DEFAULT_TIME.to_string(),
        }
    }
}

/// A customer's choices on the booking screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// Chosen barber.
    pub barber_id: u32,

    /// Chosen service, must belong to the barber.
    pub service_id: u32,

    /// Chosen calendar day.
    pub date: Date,

    /// Chosen slot, the preselected slot when `None`.
    pub time: Option<String>,
}

impl BookingDraft {
    /// Validates the choices and snapshots catalog details into an
    /// appointment draft.
    pub fn resolve(
        self,
        catalog: &Catalog,
        slots: &TimeSlots,
        bounds: &DateBounds,
        tz: &TimeZone,
    ) -> Result<AppointmentDraft, BookingError> {
        let barber = catalog
            .barber(self.barber_id)
            .ok_or(BookingError::UnknownBarber(self.barber_id))?;
        let service = catalog
            .service(self.service_id)
            .ok_or(BookingError::UnknownService(self.service_id))?;
        if service.barber_id != barber.id {
            return Err(BookingError::ServiceNotOffered {
                barber_id: barber.id,
                service_id: service.id,
            });
        }

        let time = match self.time {
            Some(time) if slots.contains(&time) => time,
            Some(time) => return Err(BookingError::UnknownTimeSlot(time)),
            None => slots.default_slot().to_string(),
        };

        if bounds.is_disabled(self.date) {
            return Err(BookingError::DateUnavailable(self.date));
        }

        Ok(AppointmentDraft {
            barber_id: barber.id,
            barber_name: barber.name.clone(),
            service_id: service.id,
            service_name: service.name.clone(),
            price: service.price.clone(),
            duration: service.duration.clone(),
            date: booking_timestamp(self.date, tz)?,
            time,
        })
    }
}
