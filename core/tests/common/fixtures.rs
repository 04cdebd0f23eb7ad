// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::{Path, PathBuf};

use barberbook_core::{Appointment, AppointmentStatus, Config};

/// Creates a test configuration storing state in the given directory.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    TestConfigBuilder::new().with_state_dir(state_dir).build()
}

/// Creates a stored appointment with the given id and status.
#[must_use]
pub fn test_appointment(id: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.to_string(),
        barber_id: 2,
        barber_name: "Amit Verma".to_string(),
        service_id: 5,
        service_name: "Beard Styling".to_string(),
        price: "$18".to_string(),
        duration: "20 minutes".to_string(),
        date: "2024-03-01T00:00:00.000Z".to_string(),
        time: "11:30 AM".to_string(),
        status,
    }
}

/// A small catalog file with one barber offering two services.
#[must_use]
pub fn test_catalog_json() -> &'static str {
    r#"{
  "barbers": [
    {"id": 10, "name": "Sam Lee", "experience": "2 years", "bio": "Clean cuts.", "rating": 4.2}
  ],
  "services": [
    {"id": 100, "barberId": 10, "name": "Buzz Cut", "price": "$12",
     "duration": "15 minutes", "description": "Clippers all over."},
    {"id": 101, "barberId": 10, "name": "Line Up", "price": "$8",
     "duration": "10 minutes", "description": "Sharp edges."}
  ]
}"#
}

/// Builder for test configurations.
#[derive(Debug, Default)]
pub struct TestConfigBuilder {
    config: Config,
}

#[allow(dead_code)]
impl TestConfigBuilder {
    /// Creates a builder with every option unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state_dir(mut self, path: &Path) -> Self {
        self.config.state_dir = Some(PathBuf::from(path));
        self
    }

    #[must_use]
    pub fn with_catalog_path(mut self, path: &Path) -> Self {
        self.config.catalog_path = Some(PathBuf::from(path));
        self
    }

    #[must_use]
    pub fn with_time_slots(mut self, slots: &[&str], default: Option<&str>) -> Self {
        self.config.time_slots = Some(slots.iter().map(ToString::to_string).collect());
        self.config.default_time = default.map(ToString::to_string);
        self
    }

    #[must_use]
    pub fn with_booking_window_days(mut self, days: u16) -> Self {
        self.config.booking_window_days = Some(days);
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
