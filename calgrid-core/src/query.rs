//! Pure date and event queries used by the grid, sidebar and day panel.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::GRID_DAYS;
use crate::event::{clamp_to_supported, Event};

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDay {
    pub date: NaiveDate,
    /// Same month and year as the viewed month
    pub in_viewed_month: bool,
}

const WEEKDAY_LABELS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

/// Column headers for the grid, rotated so the first one matches `week_start`.
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    let mut labels = WEEKDAY_LABELS;
    labels.rotate_left(week_start.weekday().num_days_from_monday() as usize);
    labels
}

/// The 42 days (six weeks) shown for `viewed_month`, starting on the Monday
/// on or before the first of the month.
pub fn month_grid_days(viewed_month: NaiveDate) -> Vec<GridDay> {
    month_grid_days_with(viewed_month, WeekStart::Monday)
}

/// Same as [`month_grid_days`] with a configurable first weekday.
///
/// Dates outside the supported year range are clamped into it first, so the
/// grid is always complete.
pub fn month_grid_days_with(viewed_month: NaiveDate, week_start: WeekStart) -> Vec<GridDay> {
    let viewed_month = clamp_to_supported(viewed_month);
    let first_of_month = viewed_month.with_day(1).unwrap_or(viewed_month);

    let lead = (first_of_month.weekday().num_days_from_monday() + 7
        - week_start.weekday().num_days_from_monday())
        % 7;
    let grid_start = first_of_month
        .checked_sub_days(Days::new(u64::from(lead)))
        .unwrap_or(first_of_month);

    grid_start
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| GridDay {
            date,
            in_viewed_month: date.year() == viewed_month.year()
                && date.month() == viewed_month.month(),
        })
        .collect()
}

/// Events whose date is the calendar day of `day`. Any time-of-day component
/// of `day` is ignored.
pub fn events_on_day<D: Datelike>(events: &[Event], day: D) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| e.date.year() == day.year() && e.date.ordinal() == day.ordinal())
        .collect()
}

/// Number of events in `year` and zero-based `month_index`.
pub fn event_count_in_month(events: &[Event], year: i32, month_index: u32) -> usize {
    events
        .iter()
        .filter(|e| e.date.year() == year && e.date.month0() == month_index)
        .count()
}

/// Event counts for all twelve months of `year`, indexed by zero-based month.
pub fn month_event_counts(events: &[Event], year: i32) -> [usize; 12] {
    let mut counts = [0; 12];
    for event in events.iter().filter(|e| e.date.year() == year) {
        counts[event.date.month0() as usize] += 1;
    }
    counts
}
