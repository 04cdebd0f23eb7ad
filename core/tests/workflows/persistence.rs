// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Persistence workflow tests over the file-backed appointment slot.

use std::sync::Arc;

use barberbook_core::{
    AppointmentDraft, AppointmentStatus, AppointmentStore, Barbershop, FileStorage, StoreError,
};
use tokio::fs;

use crate::common::{setup_temp_dirs, test_appointment, test_config};

#[tokio::test]
async fn persistence_survives_restart() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&temp_dirs.state_dir);
    let shop = Barbershop::new(config.clone()).await.unwrap();
    let picker = shop.date_picker();
    let booked = shop.book(shop.new_booking(1, 3, &picker)).await.unwrap();
    drop(shop);

    // Act
    let reopened = Barbershop::new(config).await.unwrap();

    // Assert
    assert_eq!(reopened.appointments().await, [booked]);
}

#[tokio::test]
async fn persistence_reads_existing_slot() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let content = r#"[{"id":"1709251200000","barberId":1,"barberName":"Raj Singh","serviceId":1,"serviceName":"Classic Haircut","price":"$25","duration":"30 minutes","date":"2024-03-01T00:00:00.000Z","time":"10:00 AM","status":"upcoming"}]"#;
    fs::write(temp_dirs.appointments_file(), content)
        .await
        .unwrap();

    let store = AppointmentStore::new(Arc::new(FileStorage::new(&temp_dirs.state_dir)));
    let list = store.list().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "1709251200000");

    let booked = store.book(test_draft()).await.unwrap();
    let stored_id: i64 = list[0].id.parse().unwrap();
    assert!(booked.id.parse::<i64>().unwrap() > stored_id);
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn persistence_ids_bumped_past_future_ids() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let store = AppointmentStore::new(Arc::new(FileStorage::new(&temp_dirs.state_dir)));
    // an id far ahead of the clock, e.g. written on a device with a skewed clock
    let ahead = test_appointment("99999999999999", AppointmentStatus::Completed);
    store.create(ahead).await.unwrap();

    let booked = store.book(test_draft()).await.unwrap();
    assert_eq!(booked.id, "100000000000000");
    assert_eq!(booked.status, AppointmentStatus::Upcoming);
}

fn test_draft() -> AppointmentDraft {
    AppointmentDraft {
        barber_id: 4,
        barber_name: "David Thompson".to_string(),
        service_id: 9,
        service_name: "Hair & Scalp Treatment".to_string(),
        price: "$35".to_string(),
        duration: "40 minutes".to_string(),
        date: "2024-03-05T00:00:00.000Z".to_string(),
        time: "4:30 PM".to_string(),
    }
}

#[tokio::test]
async fn persistence_writes_camel_case_array() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let store = AppointmentStore::new(Arc::new(FileStorage::new(&temp_dirs.state_dir)));
    store
        .create(test_appointment("1", AppointmentStatus::Upcoming))
        .await
        .unwrap();

    let content = fs::read_to_string(temp_dirs.appointments_file())
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["barberName"], "Amit Verma");
    assert_eq!(records[0]["serviceId"], 5);
    assert_eq!(records[0]["status"], "upcoming");
}

#[tokio::test]
async fn persistence_corrupt_slot_is_left_untouched() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    fs::write(temp_dirs.appointments_file(), "[{\"id\": 1,")
        .await
        .unwrap();
    let shop = Barbershop::new(test_config(&temp_dirs.state_dir))
        .await
        .unwrap();

    // Act & Assert - listing degrades to empty, booking refuses to overwrite
    assert!(shop.appointments().await.is_empty());
    assert!(matches!(
        shop.store().list().await,
        Err(StoreError::StorageRead(_))
    ));

    let picker = shop.date_picker();
    assert!(shop.book(shop.new_booking(1, 1, &picker)).await.is_err());
    let content = fs::read_to_string(temp_dirs.appointments_file())
        .await
        .unwrap();
    assert_eq!(content, "[{\"id\": 1,");
}

#[tokio::test]
async fn persistence_concurrent_bookings_all_kept() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let shop = Barbershop::new(test_config(&temp_dirs.state_dir))
        .await
        .unwrap();
    let picker = shop.date_picker();

    let (a, b, c) = tokio::join!(
        shop.book(shop.new_booking(1, 1, &picker)),
        shop.book(shop.new_booking(2, 4, &picker)),
        shop.book(shop.new_booking(3, 7, &picker)),
    );
    let ids = [a.unwrap().id, b.unwrap().id, c.unwrap().id];

    let stored: Vec<_> = shop.appointments().await.into_iter().map(|a| a.id).collect();
    assert_eq!(stored.len(), 3);
    for id in &ids {
        assert!(stored.contains(id));
    }
}
