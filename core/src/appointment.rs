// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// A booked appointment, as persisted in the appointment slot.
///
/// Barber and service details are snapshotted when booking, later catalog
/// changes do not affect stored appointments.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Appointment {
    /// Unique identifier, assigned at creation.
    pub id: String,

    /// Catalog id of the barber.
    pub barber_id: u32,

    /// Barber name at booking time.
    pub barber_name: String,

    /// Catalog id of the service.
    pub service_id: u32,

    /// Service name at booking time.
    pub service_name: String,

    /// Price label, e.g. "$25".
    pub price: String,

    /// Duration label, e.g. "30 minutes".
    pub duration: String,

    /// ISO-8601 timestamp of the booked calendar day.
    pub date: String,

    /// Time slot label, e.g. "10:00 AM".
    pub time: String,

    /// Current status.
    pub status: AppointmentStatus,
}

impl Appointment {
    /// The booked calendar day in the given time zone.
    pub fn calendar_day(&self, tz: &TimeZone) -> Result<Date, jiff::Error> {
        let ts: Timestamp = self.date.parse()?;
        Ok(ts.to_zoned(tz.clone()).date())
    }

    /// Whether the appointment is still upcoming.
    #[must_use]
    pub fn is_upcoming(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }
}

/// Draft for an appointment, everything but the id and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    /// Catalog id of the barber.
    pub barber_id: u32,

    /// Barber name to snapshot.
    pub barber_name: String,

    /// Catalog id of the service.
    pub service_id: u32,

    /// Service name to snapshot.
    pub service_name: String,

    /// Price label to snapshot.
    pub price: String,

    /// Duration label to snapshot.
    pub duration: String,

    /// ISO-8601 timestamp of the booked day, see [`booking_timestamp`].
    pub date: String,

    /// Time slot label.
    pub time: String,
}

impl AppointmentDraft {
    /// Turns the draft into an upcoming appointment with the given id.
    pub(crate) fn into_appointment(self, id: String) -> Appointment {
        Appointment {
            id,
            barber_id: self.barber_id,
            barber_name: self.barber_name,
            service_id: self.service_id,
            service_name: self.service_name,
            price: self.price,
            duration: self.duration,
            date: self.date,
            time: self.time,
            status: AppointmentStatus::Upcoming,
        }
    }
}

/// Formats a calendar day as the stored ISO-8601 timestamp: local midnight of
/// that day in UTC, with millisecond precision.
pub fn booking_timestamp(date: Date, tz: &TimeZone) -> Result<String, jiff::Error> {
    let midnight = date.to_zoned(tz.clone())?;
    Ok(format!("{:.3}", midnight.timestamp()))
}

/// The status of an appointment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AppointmentStatus {
    /// Booked and not yet happened.
    #[default]
    Upcoming,

    /// Took place.
    Completed,

    /// Called off.
    Cancelled,
}

const STATUS_UPCOMING: &str = "upcoming";
const STATUS_COMPLETED: &str = "completed";
const STATUS_CANCELLED: &str = "cancelled";

impl AppointmentStatus {
    /// Whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, AppointmentStatus::Upcoming)
    }

    /// Whether a stored appointment may move from `self` to `next`.
    ///
    /// Only `upcoming` moves, and only to `completed` or `cancelled`.
    #[must_use]
    pub const fn can_transition_to(self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (
                AppointmentStatus::Upcoming,
                AppointmentStatus::Completed | AppointmentStatus::Cancelled
            )
        )
    }
}

impl AsRef<str> for AppointmentStatus {
    fn as_ref(&self) -> &str {
        match self {
            AppointmentStatus::Upcoming => STATUS_UPCOMING,
            AppointmentStatus::Completed => STATUS_COMPLETED,
            AppointmentStatus::Cancelled => STATUS_CANCELLED,
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_UPCOMING => Ok(AppointmentStatus::Upcoming),
            STATUS_COMPLETED => Ok(AppointmentStatus::Completed),
            STATUS_CANCELLED => Ok(AppointmentStatus::Cancelled),
            _ => Err(()),
        }
    }
}
