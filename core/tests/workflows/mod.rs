// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the barberbook-core crate.
//!
//! These tests drive the `Barbershop` facade and the appointment store over
//! real files, covering booking, listing, status changes and configuration.

mod booking_lifecycle;
mod config_driven;
mod date_picking;
mod persistence;
