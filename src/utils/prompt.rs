//! dialoguer prompts shared by the interactive session.

use anyhow::Result;
use calgrid_core::form::EventForm;
use calgrid_core::Event;
use dialoguer::{Confirm, Input, Select};

/// Free text input, pre-filled with `current`. Empty answers are allowed.
pub fn text(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
}

pub fn select(prompt: &str, items: &[&str], default: usize) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()?)
}

/// Ask for every field of the form, keeping what was entered before as the
/// starting text.
pub fn fill_event_form(form: &mut EventForm) -> Result<()> {
    form.title = text("  Title", &form.title)?;
    form.description = text("  Description (optional)", &form.description)?;
    form.date = text("  Date (YYYY-MM-DD)", &form.date)?;
    form.start_time = text("  Start time (HH:MM, optional)", &form.start_time)?;
    form.end_time = text("  End time (HH:MM, optional)", &form.end_time)?;
    Ok(())
}

/// Let the user pick one of `events`, or cancel.
pub fn pick_event<'a>(prompt: &str, events: &[&'a Event]) -> Result<Option<&'a Event>> {
    let labels: Vec<String> = events
        .iter()
        .map(|e| match &e.time {
            Some(time) => format!("{} ({})", e.title, time),
            None => e.title.clone(),
        })
        .chain(std::iter::once("Cancel".to_string()))
        .collect();

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(events.get(choice).copied())
}
