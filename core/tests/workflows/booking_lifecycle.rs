// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Booking lifecycle workflow tests.

use barberbook_core::{AppointmentStatus, Barbershop, BookingDraft, StoreError};
use jiff::ToSpan;

use crate::common::{
    assert_appointment_matches, assert_file_exists, assert_statuses, setup_temp_dirs, test_config,
};

#[tokio::test]
async fn booking_book_list_cancel_complete() {
    // Arrange
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let shop = Barbershop::new(test_config(&temp_dirs.state_dir))
        .await
        .unwrap();
    let picker = shop.date_picker();

    // Act - book with the preselected slot, then with an explicit one
    let first = shop.book(shop.new_booking(1, 2, &picker)).await.unwrap();
    let mut draft = shop.new_booking(3, 6, &picker);
    draft.time = Some("2:30 PM".to_string());
    let second = shop.book(draft).await.unwrap();

    // Assert
    assert_appointment_matches(&first, "Raj Singh", "Beard Trim", "10:00 AM");
    assert_appointment_matches(&second, "Michael Rodriguez", "Signature Fade", "2:30 PM");
    assert_ne!(first.id, second.id);
    assert_file_exists(temp_dirs.appointments_file());

    let listed = shop.appointments().await;
    assert_eq!(listed, [first.clone(), second.clone()]);

    // Act - change statuses
    shop.cancel(&first.id).await.unwrap();
    shop.complete(&second.id).await.unwrap();

    // Assert
    assert_statuses(
        &shop.appointments().await,
        &[AppointmentStatus::Cancelled, AppointmentStatus::Completed],
    );
    assert!(shop.upcoming_appointments().await.is_empty());
}

#[tokio::test]
async fn booking_records_selected_day() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let shop = Barbershop::new(test_config(&temp_dirs.state_dir))
        .await
        .unwrap();

    let mut picker = shop.date_picker();
    let tomorrow = shop.today().checked_add(1.day()).unwrap();
    assert_eq!(picker.select(tomorrow), Some(tomorrow));

    let appointment = shop.book(shop.new_booking(4, 8, &picker)).await.unwrap();
    assert_eq!(appointment.calendar_day(shop.time_zone()).unwrap(), tomorrow);
    assert!(appointment.date.ends_with('Z'));
}

#[tokio::test]
async fn booking_rejects_past_day() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let shop = Barbershop::new(test_config(&temp_dirs.state_dir))
        .await
        .unwrap();

    let yesterday = shop.today().checked_sub(1.day()).unwrap();
    let draft = BookingDraft {
        barber_id: 1,
        service_id: 1,
        date: yesterday,
        time: None,
    };

    let err = shop.book(draft).await.unwrap_err();
    assert!(err.to_string().contains("not available"), "{err}");
    assert!(shop.appointments().await.is_empty());
}

#[tokio::test]
async fn booking_rejects_foreign_service() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let shop = Barbershop::new(test_config(&temp_dirs.state_dir))
        .await
        .unwrap();
    let picker = shop.date_picker();

    // service 8 belongs to barber 4
    let err = shop.book(shop.new_booking(1, 8, &picker)).await.unwrap_err();
    assert!(err.to_string().contains("not offered"), "{err}");
}

#[tokio::test]
async fn booking_cancel_twice_fails() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let shop = Barbershop::new(test_config(&temp_dirs.state_dir))
        .await
        .unwrap();
    let picker = shop.date_picker();
    let appointment = shop.book(shop.new_booking(2, 4, &picker)).await.unwrap();

    shop.cancel(&appointment.id).await.unwrap();
    let err = shop.store().cancel(&appointment.id).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidTransition { .. }));

    let err = shop.complete("does-not-exist").await.unwrap_err();
    assert!(err.to_string().contains("not found"), "{err}");
}
