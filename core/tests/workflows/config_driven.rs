// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.

use barberbook_core::{Barbershop, Config};
use jiff::ToSpan;

use crate::common::{TestConfigBuilder, setup_temp_dirs, test_catalog_json};

#[tokio::test]
async fn config_custom_catalog_is_loaded() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let catalog_path = temp_dirs
        .write_file("catalog.json", test_catalog_json())
        .await
        .unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_catalog_path(&catalog_path)
        .build();

    // Act
    let shop = Barbershop::new(config).await.unwrap();

    // Assert
    let names: Vec<_> = shop.catalog().barbers().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Sam Lee"]);
    assert_eq!(shop.catalog().services_for_barber(10).count(), 2);

    let picker = shop.date_picker();
    let appointment = shop.book(shop.new_booking(10, 101, &picker)).await.unwrap();
    assert_eq!(appointment.service_name, "Line Up");
    assert_eq!(appointment.price, "$8");
}

#[tokio::test]
async fn config_missing_catalog_fails() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_catalog_path(&temp_dirs.base.join("missing.json"))
        .build();

    let err = Barbershop::new(config).await.unwrap_err();
    assert!(err.to_string().contains("catalog"), "{err}");
}

#[tokio::test]
async fn config_time_slots_applied() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_time_slots(&["8:00 AM", "8:30 AM", "9:00 AM"], Some("8:30 AM"))
        .build();
    let shop = Barbershop::new(config).await.unwrap();
    let picker = shop.date_picker();

    let appointment = shop.book(shop.new_booking(1, 1, &picker)).await.unwrap();
    assert_eq!(appointment.time, "8:30 AM");

    let mut draft = shop.new_booking(1, 1, &picker);
    draft.time = Some("10:00 AM".to_string());
    assert!(shop.book(draft).await.is_err());
}

#[tokio::test]
async fn config_invalid_default_time_fails() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_time_slots(&["8:00 AM"], Some("9:00 AM"))
        .build();

    let err = Barbershop::new(config).await.unwrap_err();
    assert!(err.to_string().contains("time slot"), "{err}");
}

#[tokio::test]
async fn config_booking_window_limits_picker() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = TestConfigBuilder::new()
        .with_state_dir(&temp_dirs.state_dir)
        .with_booking_window_days(7)
        .build();
    let shop = Barbershop::new(config).await.unwrap();

    let today = shop.today();
    let bounds = shop.booking_bounds();
    assert_eq!(bounds.min, Some(today));
    assert_eq!(bounds.max, Some(today.checked_add(7.days()).unwrap()));

    let mut picker = shop.date_picker();
    let too_far = today.checked_add(8.days()).unwrap();
    assert_eq!(picker.select(too_far), None);
    assert_eq!(picker.selected(), today);
}

#[tokio::test]
async fn config_state_dir_is_created() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let state_dir = temp_dirs.base.join("nested/state");
    let config = Config {
        state_dir: Some(state_dir.clone()),
        ..Config::default()
    };

    let shop = Barbershop::new(config).await.unwrap();
    assert!(state_dir.is_dir());
    assert_eq!(shop.config().state_dir.as_deref(), Some(state_dir.as_path()));
}

#[tokio::test]
async fn config_ephemeral_keeps_nothing_on_disk() {
    let shop = Barbershop::ephemeral(Config::default()).await.unwrap();
    let picker = shop.date_picker();
    shop.book(shop.new_booking(1, 1, &picker)).await.unwrap();
    assert_eq!(shop.appointments().await.len(), 1);

    let other = Barbershop::ephemeral(Config::default()).await.unwrap();
    assert!(other.appointments().await.is_empty());
}
