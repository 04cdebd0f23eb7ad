// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary directory management with auto-cleanup

mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_appointment_matches, assert_file_exists, assert_statuses};
#[allow(unused_imports)]
pub use fixtures::{TestConfigBuilder, test_appointment, test_catalog_json, test_config};
pub use temp_dir::setup_temp_dirs;
