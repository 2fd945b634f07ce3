//! Calendar event type.
//!
//! Events are deliberately flat: a title, a calendar date and an optional
//! free-form time label. The views never interpret the time beyond display,
//! so it is kept as the string the user (or the seed data) supplied.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::constants::{ALL_DAY, DATE_FORMAT, MAX_YEAR, MIN_YEAR};
use crate::error::{CalGridError, CalGridResult};

/// Length of the random part of generated ids
const ID_SUFFIX_LEN: usize = 9;

/// A calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque id, assigned at creation and never changed
    pub id: String,
    pub title: String,
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// "HH:MM", "HH:MM - HH:MM" or "All Day"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Event {
    pub fn with_id(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Event {
            id: id.into(),
            title: title.into(),
            date,
            description: None,
            time: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_all_day(&self) -> bool {
        self.time.as_deref() == Some(ALL_DAY)
    }

    /// The date in its serialized YYYY-MM-DD form
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Generate a collision-resistant event id: `event-<unix millis>-<random>`.
pub fn generate_id() -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ID_SUFFIX_LEN)
        .collect();

    format!("event-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Parse a YYYY-MM-DD string into a calendar date. Years outside
/// `MIN_YEAR..=MAX_YEAR` are rejected.
pub fn parse_date(s: &str) -> CalGridResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .ok()
        .filter(|date| is_supported(*date))
        .ok_or_else(|| CalGridError::InvalidDate(s.to_string()))
}

pub fn is_supported(date: NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year())
}

/// Pull `date` into the supported year range.
pub fn clamp_to_supported(date: NaiveDate) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1);
    let last = NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31);
    match (first, last) {
        (Some(first), Some(last)) => date.clamp(first, last),
        _ => date,
    }
}
