//! Create/edit form for events.
//!
//! The form holds raw text for every field. Each submission is checked as a
//! whole: all rules run and every failing field gets its own message. A valid
//! submission produces an `Event` and dispatches it to the store, an invalid
//! one leaves the store untouched and the form as it was.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::constants::{DATE_FORMAT, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use crate::error::CalGridResult;
use crate::event::{Event, generate_id, parse_date};
use crate::store::CalendarStore;

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.date.is_none() && self.time.is_none()
    }

    /// (field, message) pairs in form order
    pub fn messages(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("date", &self.date),
            ("time", &self.time),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.as_deref().map(|m| (field, m)))
        .collect()
    }
}

/// Normalized field values of a valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub time: Option<String>,
}

impl EventDraft {
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            description: self.description,
            time: self.time,
        }
    }
}

/// Terminal state of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Saved(Event),
    Invalid(FormErrors),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM or empty
    pub start_time: String,
    /// HH:MM or empty
    pub end_time: String,
    /// Id of the event being edited, None in create mode
    editing: Option<String>,
}

impl EventForm {
    /// Empty form for a new event on `default_date`.
    pub fn create(default_date: NaiveDate) -> Self {
        EventForm {
            title: String::new(),
            description: String::new(),
            date: default_date.format(DATE_FORMAT).to_string(),
            start_time: String::new(),
            end_time: String::new(),
            editing: None,
        }
    }

    /// Form pre-populated from `event`.
    pub fn edit(event: &Event) -> Self {
        let (start_time, end_time) = split_time(event.time.as_deref());

        EventForm {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            date: event.date_string(),
            start_time,
            end_time,
            editing: Some(event.id.clone()),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Back to an empty create form.
    pub fn reset(&mut self, default_date: NaiveDate) {
        *self = Self::create(default_date);
    }

    /// Check every field and return the normalized values or all errors.
    pub fn validate(&self) -> Result<EventDraft, FormErrors> {
        let mut errors = FormErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_string());
        } else if self.title.chars().count() > MAX_TITLE_LENGTH {
            errors.title = Some(format!("Title must be {} characters or less", MAX_TITLE_LENGTH));
        }

        if self.description.chars().count() > MAX_DESCRIPTION_LENGTH {
            errors.description = Some(format!(
                "Description must be {} characters or less",
                MAX_DESCRIPTION_LENGTH
            ));
        }

        let date = if self.date.trim().is_empty() {
            errors.date = Some("Date is required".to_string());
            None
        } else {
            match parse_date(&self.date) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.date = Some("Date must be in YYYY-MM-DD format".to_string());
                    None
                }
            }
        };

        let start = self.start_time.trim();
        let end = self.end_time.trim();
        if !is_valid_time(start) || !is_valid_time(end) {
            errors.time = Some("Time must be in HH:MM format".to_string());
        } else if !start.is_empty() && !end.is_empty() && end <= start {
            errors.time = Some("End time must be after start time".to_string());
        }

        match date {
            Some(date) if errors.is_empty() => {
                let description = self.description.trim();
                Ok(EventDraft {
                    title: self.title.trim().to_string(),
                    date,
                    description: (!description.is_empty()).then(|| description.to_string()),
                    time: join_time(start, end),
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate and, when valid, add or update the event in `store`.
    ///
    /// Store errors only occur in strict mode.
    pub fn submit(&self, store: &mut CalendarStore) -> CalGridResult<FormOutcome> {
        let draft = match self.validate() {
            Ok(draft) => draft,
            Err(errors) => {
                debug!(fields = errors.messages().len(), "form submission rejected");
                return Ok(FormOutcome::Invalid(errors));
            }
        };

        let event = match &self.editing {
            Some(id) => {
                let event = draft.into_event(id.clone());
                store.update_event(event.clone())?;
                event
            }
            None => {
                let event = draft.into_event(generate_id());
                store.add_event(event.clone())?;
                event
            }
        };

        Ok(FormOutcome::Saved(event))
    }
}

/// Decompose a stored time label into (start, end).
///
/// `HH:MM - HH:MM` gives both, `HH:MM` gives only a start, anything else
/// (including "All Day") gives neither.
pub fn split_time(time: Option<&str>) -> (String, String) {
    let Some(time) = time.map(str::trim) else {
        return (String::new(), String::new());
    };

    if let Some((start, end)) = time.split_once('-') {
        let (start, end) = (start.trim(), end.trim());
        if is_clock_shape(start) && is_clock_shape(end) {
            return (start.to_string(), end.to_string());
        }
    } else if is_clock_shape(time) {
        return (time.to_string(), String::new());
    }

    (String::new(), String::new())
}

/// Combine start and end into the stored label. An end without a start is
/// dropped.
pub fn join_time(start: &str, end: &str) -> Option<String> {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => Some(format!("{} - {}", start, end)),
        (false, true) => Some(start.to_string()),
        _ => None,
    }
}

/// Two digits, a colon, two digits
fn is_clock_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 5
        && b[2] == b':'
        && [b[0], b[1], b[3], b[4]].iter().all(u8::is_ascii_digit)
}

/// Empty, or a real HH:MM time of day
fn is_valid_time(s: &str) -> bool {
    s.is_empty() || (is_clock_shape(s) && NaiveTime::parse_from_str(s, "%H:%M").is_ok())
}
