// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date picking scenarios as a booking screen drives them.

use barberbook_core::{
    CalendarMonth, DateBounds, DatePicker, build_grid, can_navigate_to_next_month,
    can_navigate_to_previous_month,
};
use jiff::civil::date;

#[test]
fn picking_february_2024_scenario() {
    // Arrange - today is 2024-02-10, selection defaults to today
    let today = date(2024, 2, 10);
    let bounds = DateBounds::new(Some(today), None);
    let feb = CalendarMonth::new(2024, 1).unwrap();

    // Act
    let cells = build_grid(feb, today, &bounds);

    // Assert - Feb 1 2024 is a Thursday, so four padding cells then 29 days
    assert_eq!(cells.len(), 33);
    assert!(cells[..4].iter().all(|c| c.is_padding()));
    assert_eq!(cells[4].day, Some(1));
    assert!(cells[4].is_disabled);
    assert_eq!(cells[13].day, Some(10));
    assert!(cells[13].is_selected && !cells[13].is_disabled);
    assert!(!cells[14].is_disabled);
    assert_eq!(cells[32].day, Some(29));

    assert!(!can_navigate_to_previous_month(feb, bounds.min));
    assert!(can_navigate_to_next_month(feb, bounds.max));
}

#[test]
fn picking_across_months() {
    let today = date(2024, 12, 30);
    let mut picker = DatePicker::new(today, DateBounds::new(Some(today), Some(date(2025, 1, 31))));

    assert!(!picker.go_to_previous_month());
    assert!(picker.go_to_next_month());
    assert_eq!(picker.month_label(), "January 2025");
    assert!(!picker.go_to_next_month());

    assert_eq!(picker.select_day(15), Some(date(2025, 1, 15)));
    assert_eq!(picker.cells().iter().filter(|c| c.is_selected).count(), 1);

    assert!(picker.go_to_previous_month());
    assert_eq!(picker.select_day(29), None);
    assert_eq!(picker.selected(), date(2025, 1, 15));
    assert!(picker.cells().iter().all(|c| !c.is_selected));
}
