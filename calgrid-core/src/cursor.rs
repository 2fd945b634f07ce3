//! Navigation helpers for the date cursors.
//!
//! These compute the next `viewed_month` for sidebar and grid navigation. All
//! of them clamp the day to the length of the target month, so Jan 31 moved
//! to February lands on the last day of February.

use chrono::{Datelike, Months, NaiveDate};

use crate::event::is_supported;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name for a zero-based month index
pub fn month_name(month_index: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month_index as usize).copied()
}

/// Move `date` by whole months. Results outside the supported year range
/// leave `date` unchanged.
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    shifted.filter(|d| is_supported(*d)).unwrap_or(date)
}

pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    shift_months(date, years.saturating_mul(12))
}

/// Keep the year of `date` and switch to zero-based `month_index`.
pub fn with_month(date: NaiveDate, month_index: u32) -> Option<NaiveDate> {
    if month_index > 11 {
        return None;
    }
    Some(shift_months(date, month_index as i32 - date.month0() as i32))
}
