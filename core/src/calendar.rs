// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid for the booking date picker.
//!
//! Months are addressed by year and a 0-based month index, weekdays by a
//! 0-based offset from Sunday. All comparisons are by calendar day.

use std::fmt;

use jiff::civil::Date;

/// Column headers for the grid, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Errors raised when addressing a month outside the supported date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The month does not exist in the civil calendar range.
    #[error("month {month} of year {year} is out of the supported range")]
    OutOfRange {
        /// The normalized year.
        year: i32,
        /// The normalized 0-based month.
        month: i32,
    },
}

/// A displayed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: Date,
}

impl CalendarMonth {
    /// Creates a month from a year and a 0-based month index.
    ///
    /// Indices outside `0..12` roll over into the neighbouring years, so
    /// `(2024, 12)` is January 2025 and `(2024, -1)` is December 2023.
    pub fn new(year: i16, month: i8) -> Result<Self, CalendarError> {
        Self::from_index(i32::from(year) * 12 + i32::from(month))
    }

    /// The month containing the given date.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            first: date.first_of_month(),
        }
    }

    /// The year of this month.
    #[must_use]
    pub fn year(&self) -> i16 {
        self.first.year()
    }

    /// The 0-based month index, January is 0.
    #[must_use]
    pub fn month(&self) -> i8 {
        self.first.month() - 1
    }

    /// The first day of this month.
    #[must_use]
    pub fn first_day(&self) -> Date {
        self.first
    }

    /// The last day of this month.
    #[must_use]
    pub fn last_day(&self) -> Date {
        self.first.last_of_month()
    }

    /// The date of the given day number, if the month has such a day.
    #[must_use]
    pub fn day(&self, day: i8) -> Option<Date> {
        Date::new(self.first.year(), self.first.month(), day).ok()
    }

    /// The previous month, `None` at the lower end of the date range.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        Self::from_index(self.index() - 1).ok()
    }

    /// The next month, `None` at the upper end of the date range.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1).ok()
    }

    /// Header label such as "February 2024".
    #[must_use]
    pub fn label(&self) -> String {
        self.first.strftime("%B %Y").to_string()
    }

    fn index(&self) -> i32 {
        i32::from(self.year()) * 12 + i32::from(self.month())
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_index(index: i32) -> Result<Self, CalendarError> {
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12);
        let err = CalendarError::OutOfRange { year, month };

        let y = i16::try_from(year).map_err(|_| err)?;
        // month is in 0..12 here
        let first = Date::new(y, month as i8 + 1, 1).map_err(|_| err)?;
        Ok(Self { first })
    }
}

impl From<Date> for CalendarMonth {
    fn from(date: Date) -> Self {
        Self::of(date)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month() + 1)
    }
}

/// Optional lower and upper bounds on selectable days, both inclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    /// Earliest selectable day.
    pub min: Option<Date>,

    /// Latest selectable day.
    pub max: Option<Date>,
}

impl DateBounds {
    /// Bounds with both ends set.
    #[must_use]
    pub const fn new(min: Option<Date>, max: Option<Date>) -> Self {
        Self { min, max }
    }

    /// Whether the given day falls outside the bounds.
    #[must_use]
    pub fn is_disabled(&self, date: Date) -> bool {
        is_date_disabled(date, self.min, self.max)
    }
}

/// One rendered cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// Day of month, `None` for a padding cell before day 1.
    #[serde(rename = "dayNumber")]
    pub day: Option<i8>,

    /// Whether this is the selected day.
    pub is_selected: bool,

    /// Whether this day is outside the selectable bounds.
    pub is_disabled: bool,
}

impl DayCell {
    /// A padding cell.
    #[must_use]
    pub const fn padding() -> Self {
        Self {
            day: None,
            is_selected: false,
            is_disabled: false,
        }
    }

    /// Whether this cell is padding.
    #[must_use]
    pub const fn is_padding(&self) -> bool {
        self.day.is_none()
    }
}

/// Number of days in the month.
#[must_use]
pub fn days_in_month(month: CalendarMonth) -> i8 {
    month.first_day().days_in_month()
}

/// Weekday of the first day of the month, 0 is Sunday.
#[must_use]
pub fn first_weekday_of_month(month: CalendarMonth) -> i8 {
    month.first_day().weekday().to_sunday_zero_offset()
}

/// Whether `date` lies before `min` or after `max`.
#[must_use]
pub fn is_date_disabled(date: Date, min: Option<Date>, max: Option<Date>) -> bool {
    min.is_some_and(|min| date < min) || max.is_some_and(|max| date > max)
}

/// Builds the cells of the displayed month: leading padding, then one cell
/// per day.
#[must_use]
pub fn build_grid(displayed: CalendarMonth, selected: Date, bounds: &DateBounds) -> Vec<DayCell> {
    let padding = usize::try_from(first_weekday_of_month(displayed)).unwrap_or_default();
    let days = days_in_month(displayed);

    let mut cells = Vec::with_capacity(padding + usize::from(days.unsigned_abs()));
    cells.extend(std::iter::repeat_n(DayCell::padding(), padding));
    cells.extend((1..=days).filter_map(|day| {
        let date = displayed.day(day)?;
        Some(DayCell {
            day: Some(day),
            is_selected: date == selected,
            is_disabled: bounds.is_disabled(date),
        })
    }));
    cells
}

/// Whether the picker may move to the month before `displayed`.
#[must_use]
pub fn can_navigate_to_previous_month(displayed: CalendarMonth, min: Option<Date>) -> bool {
    displayed
        .previous()
        .is_some_and(|prev| min.is_none_or(|min| prev >= CalendarMonth::of(min)))
}

/// Whether the picker may move to the month after `displayed`.
#[must_use]
pub fn can_navigate_to_next_month(displayed: CalendarMonth, max: Option<Date>) -> bool {
    displayed
        .next()
        .is_some_and(|next| max.is_none_or(|max| next <= CalendarMonth::of(max)))
}

/// Date picker state: the displayed month and the selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    displayed: CalendarMonth,
    selected: Date,
    bounds: DateBounds,
}

impl DatePicker {
    /// Creates a picker showing the month of `selected`.
    #[must_use]
    pub fn new(selected: Date, bounds: DateBounds) -> Self {
        Self {
            displayed: CalendarMonth::of(selected),
            selected,
            bounds,
        }
    }

    /// The month currently shown.
    #[must_use]
    pub fn displayed_month(&self) -> CalendarMonth {
        self.displayed
    }

    /// The selected day.
    #[must_use]
    pub fn selected(&self) -> Date {
        self.selected
    }

    /// The selectable bounds.
    #[must_use]
    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    /// Cells of the displayed month.
    #[must_use]
    pub fn cells(&self) -> Vec<DayCell> {
        build_grid(self.displayed, self.selected, &self.bounds)
    }

    /// Header label of the displayed month.
    #[must_use]
    pub fn month_label(&self) -> String {
        self.displayed.label()
    }

    /// Selects a day of the displayed month.
    ///
    /// Returns the newly selected date, or `None` when the day does not exist
    /// or is disabled, in which case the selection is left untouched.
    pub fn select_day(&mut self, day: i8) -> Option<Date> {
        let date = self.displayed.day(day)?;
        self.select(date)
    }

    /// Selects an arbitrary date without changing the displayed month.
    pub fn select(&mut self, date: Date) -> Option<Date> {
        if self.bounds.is_disabled(date) {
            tracing::debug!(%date, "ignoring selection of disabled day");
            return None;
        }
        self.selected = date;
        Some(date)
    }

    /// Shows the previous month if the lower bound allows it.
    pub fn go_to_previous_month(&mut self) -> bool {
        if !can_navigate_to_previous_month(self.displayed, self.bounds.min) {
            return false;
        }
        match self.displayed.previous() {
            Some(prev) => {
                self.displayed = prev;
                true
            }
            None => false,
        }
    }

    /// Shows the next month if the upper bound allows it.
    pub fn go_to_next_month(&mut self) -> bool {
        if !can_navigate_to_next_month(self.displayed, self.bounds.max) {
            return false;
        }
        match self.displayed.next() {
            Some(next) => {
                self.displayed = next;
                true
            }
            None => false,
        }
    }

    /// Shows the given month if it lies within the navigable range.
    pub fn show_month(&mut self, month: CalendarMonth) -> bool {
        let after_min = self
            .bounds
            .min
            .is_none_or(|min| month >= CalendarMonth::of(min));
        let before_max = self
            .bounds
            .max
            .is_none_or(|max| month <= CalendarMonth::of(max));
        if after_min && before_max {
            self.displayed = month;
        }
        after_min && before_max
    }
}
