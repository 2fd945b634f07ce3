//! The event store: single source of truth for events and the date cursors.
//!
//! Every mutation goes through a `CalendarStore` method, which keeps the
//! collection and both cursors consistent and then notifies subscribers
//! synchronously. Views hold `&CalendarStore` for reads and get `&mut` only
//! where they dispatch an operation.
//!
//! Update and delete of an unknown id are silent no-ops. `StoreOptions::strict`
//! turns those (and duplicate ids on add) into errors instead.

use chrono::NaiveDate;
use std::fmt;
use tracing::{debug, warn};

use crate::error::{CalGridError, CalGridResult};
use crate::event::Event;
use crate::query::events_on_day;
use crate::seed::SeedProvider;

/// Behavior switches for a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Report missing and duplicate ids as errors instead of ignoring them
    pub strict: bool,
}

/// What an effective mutation changed. Ids refer to the affected event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Added(String),
    Updated(String),
    Deleted(String),
    ViewedMonth(NaiveDate),
    SelectedDay(NaiveDate),
}

type Listener = Box<dyn FnMut(&StoreChange)>;

pub struct CalendarStore {
    events: Vec<Event>,
    viewed_month: NaiveDate,
    selected_day: NaiveDate,
    options: StoreOptions,
    revision: u64,
    listeners: Vec<Listener>,
}

impl CalendarStore {
    /// Create a store owning `events`, with both cursors on `today`.
    pub fn new(events: Vec<Event>, today: NaiveDate) -> Self {
        Self::with_options(events, today, StoreOptions::default())
    }

    pub fn with_options(events: Vec<Event>, today: NaiveDate, options: StoreOptions) -> Self {
        CalendarStore {
            events,
            viewed_month: today,
            selected_day: today,
            options,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Create a store from a seed provider. The provider is consulted once.
    pub fn from_seed<S: SeedProvider + ?Sized>(
        seed: &S,
        today: NaiveDate,
        options: StoreOptions,
    ) -> Self {
        let events = seed.events();
        debug!(count = events.len(), "seeded event store");
        Self::with_options(events, today, options)
    }

    // READ ACCESS:

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn viewed_month(&self) -> NaiveDate {
        self.viewed_month
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    /// Events shown in the day panel
    pub fn selected_day_events(&self) -> Vec<&Event> {
        events_on_day(&self.events, self.selected_day)
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Bumped once per effective mutation. Views compare it to decide
    /// whether they are stale.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a callback run after every effective mutation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreChange) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // EVENT OPERATIONS:

    /// Append `event`. The caller provides a unique id.
    pub fn add_event(&mut self, event: Event) -> CalGridResult<()> {
        if self.options.strict && self.event(&event.id).is_some() {
            warn!(id = %event.id, "rejected add: id already in use");
            return Err(CalGridError::DuplicateEventId(event.id));
        }

        let id = event.id.clone();
        self.events.push(event);
        self.notify(StoreChange::Added(id));
        Ok(())
    }

    /// Replace the entry with the same id in place, keeping order.
    pub fn update_event(&mut self, event: Event) -> CalGridResult<()> {
        let mut matched = false;
        for slot in self.events.iter_mut().filter(|e| e.id == event.id) {
            *slot = event.clone();
            matched = true;
        }

        if !matched {
            return self.missing(&event.id, "update");
        }

        self.notify(StoreChange::Updated(event.id));
        Ok(())
    }

    pub fn delete_event(&mut self, id: &str) -> CalGridResult<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);

        if self.events.len() == before {
            return self.missing(id, "delete");
        }

        self.notify(StoreChange::Deleted(id.to_string()));
        Ok(())
    }

    // CURSORS:

    pub fn set_viewed_month(&mut self, date: NaiveDate) {
        self.viewed_month = date;
        self.notify(StoreChange::ViewedMonth(date));
    }

    pub fn set_selected_day(&mut self, date: NaiveDate) {
        self.selected_day = date;
        self.notify(StoreChange::SelectedDay(date));
    }

    fn missing(&self, id: &str, operation: &str) -> CalGridResult<()> {
        if self.options.strict {
            warn!(id, operation, "rejected: event not found");
            return Err(CalGridError::EventNotFound(id.to_string()));
        }

        debug!(id, operation, "no event with this id, ignoring");
        Ok(())
    }

    fn notify(&mut self, change: StoreChange) {
        self.revision += 1;
        debug!(?change, revision = self.revision, "store changed");

        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}

impl fmt::Debug for CalendarStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarStore")
            .field("events", &self.events.len())
            .field("viewed_month", &self.viewed_month)
            .field("selected_day", &self.selected_day)
            .field("options", &self.options)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
