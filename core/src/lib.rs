// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Booking core of a barbershop app: the date picker grid, the catalog and
//! the locally persisted appointment history.

mod appointment;
mod booking;
mod calendar;
mod catalog;
mod config;
mod shop;
mod storage;
mod store;

pub use crate::appointment::{Appointment, AppointmentDraft, AppointmentStatus, booking_timestamp};
pub use crate::booking::{BookingDraft, BookingError, DEFAULT_TIME, DEFAULT_TIME_SLOTS, TimeSlots};
pub use crate::calendar::{
    CalendarError, CalendarMonth, DateBounds, DatePicker, DayCell, WEEKDAY_NAMES, build_grid,
    can_navigate_to_next_month, can_navigate_to_previous_month, days_in_month,
    first_weekday_of_month, is_date_disabled,
};
pub use crate::catalog::{Barber, Catalog, Service};
pub use crate::config::{APP_NAME, Config};
pub use crate::shop::Barbershop;
pub use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use crate::store::{APPOINTMENTS_KEY, AppointmentStore, StoreError};
