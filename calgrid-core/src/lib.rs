//! Core types for calgrid.
//!
//! This crate holds everything the calendar views derive their data from:
//! - `Event` and id generation
//! - `CalendarStore`, the single source of truth for events and date cursors
//! - `query` functions for the month grid, day panel and sidebar badges
//! - `form` validation for the create/edit flow
//! - `seed` providers for the initial event collection
//! - `config` for the user configuration file

pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod event;
pub mod form;
pub mod query;
pub mod seed;
pub mod store;

// Re-export the most used types at crate root for convenience
pub use error::{CalGridError, CalGridResult};
pub use event::Event;
pub use store::{CalendarStore, StoreChange, StoreOptions};
