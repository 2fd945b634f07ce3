//! Interactive session over the event store.
//!
//! The screen is redrawn whenever the store revision moves. Nothing is saved:
//! quitting discards every change made during the session.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use calgrid_core::cursor::{shift_months, shift_years, with_month, MONTH_NAMES};
use calgrid_core::event::parse_date;
use calgrid_core::form::{EventForm, FormErrors, FormOutcome};
use calgrid_core::{CalGridResult, CalendarStore, Event, StoreChange};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use crate::context::AppContext;
use crate::render::{self, Render};
use crate::utils::prompt;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Action {
    SelectDay,
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    JumpToMonth,
    AddEvent,
    EditEvent,
    DeleteEvent,
    Quit,
}

const ACTIONS: [(Action, &str); 10] = [
    (Action::SelectDay, "Select day"),
    (Action::PreviousMonth, "Previous month"),
    (Action::NextMonth, "Next month"),
    (Action::PreviousYear, "Previous year"),
    (Action::NextYear, "Next year"),
    (Action::JumpToMonth, "Jump to month"),
    (Action::AddEvent, "Add event"),
    (Action::EditEvent, "Edit event"),
    (Action::DeleteEvent, "Delete event"),
    (Action::Quit, "Quit"),
];

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let edits = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&edits);
    ctx.store.subscribe(move |change| {
        if matches!(
            change,
            StoreChange::Added(_) | StoreChange::Updated(_) | StoreChange::Deleted(_)
        ) {
            counter.set(counter.get() + 1);
        }
    });

    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
    let mut rendered_revision = None;

    loop {
        if rendered_revision != Some(ctx.store.revision()) {
            println!();
            println!(
                "{}",
                render::render_screen(&ctx.store, &ctx.config.user_name, ctx.config.week_start)
            );
            println!();
            rendered_revision = Some(ctx.store.revision());
        }

        let choice = prompt::select("  What next?", &labels, 0)?;
        match ACTIONS[choice].0 {
            Action::Quit => break,
            action => apply(&mut ctx.store, action)?,
        }
    }

    if edits.get() > 0 {
        println!(
            "{}",
            format!("  {} unsaved change(s) discarded", edits.get()).dimmed()
        );
    }

    Ok(())
}

fn apply(store: &mut CalendarStore, action: Action) -> Result<()> {
    let viewed = store.viewed_month();

    match action {
        Action::SelectDay => {
            let input = prompt::text("  Day (number in this month, or YYYY-MM-DD)", "")?;
            match parse_day_input(&input, viewed) {
                Ok(day) => store.set_selected_day(day),
                Err(e) => eprintln!("  {}", e.to_string().red()),
            }
        }
        Action::PreviousMonth => store.set_viewed_month(shift_months(viewed, -1)),
        Action::NextMonth => store.set_viewed_month(shift_months(viewed, 1)),
        Action::PreviousYear => store.set_viewed_month(shift_years(viewed, -1)),
        Action::NextYear => store.set_viewed_month(shift_years(viewed, 1)),
        Action::JumpToMonth => {
            let index = prompt::select("  Month", &MONTH_NAMES, viewed.month0() as usize)?;
            if let Some(date) = with_month(viewed, index as u32) {
                store.set_viewed_month(date);
            }
        }
        Action::AddEvent => {
            let form = EventForm::create(store.selected_day());
            if let Some(event) = submit_loop(store, form, prompt::fill_event_form, ask_retry)? {
                println!("{}", format!("  Created: {}", event).green());
            }
        }
        Action::EditEvent => {
            let Some(event) = pick_selected_day_event(store, "  Edit which event?")? else {
                return Ok(());
            };
            let form = EventForm::edit(&event);
            if let Some(event) = submit_loop(store, form, prompt::fill_event_form, ask_retry)? {
                println!("{}", format!("  Updated: {}", event).green());
            }
        }
        Action::DeleteEvent => {
            let Some(event) = pick_selected_day_event(store, "  Delete which event?")? else {
                return Ok(());
            };
            let deleted = delete_confirmed(store, &event, |event| {
                println!("{}", render::render_delete_prompt(event));
                prompt::confirm("  Delete", false)
            })?;
            if deleted {
                println!("{}", format!("  Deleted: {}", event).red());
            }
        }
        Action::Quit => {}
    }

    Ok(())
}

/// Fill and submit until the form is valid or `retry` gives up. The form
/// keeps its values between attempts.
fn submit_loop(
    store: &mut CalendarStore,
    mut form: EventForm,
    mut fill: impl FnMut(&mut EventForm) -> Result<()>,
    mut retry: impl FnMut(&FormErrors) -> Result<bool>,
) -> Result<Option<Event>> {
    loop {
        fill(&mut form)?;

        match form.submit(store) {
            Ok(FormOutcome::Saved(event)) => return Ok(Some(event)),
            Ok(FormOutcome::Invalid(errors)) => {
                if !retry(&errors)? {
                    return Ok(None);
                }
            }
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                return Ok(None);
            }
        }
    }
}

fn ask_retry(errors: &FormErrors) -> Result<bool> {
    eprintln!("{}", errors.render());
    prompt::confirm("  Fix and try again?", true)
}

/// Delete `event` once `confirm` agrees. Returns whether it was removed.
fn delete_confirmed(
    store: &mut CalendarStore,
    event: &Event,
    confirm: impl FnOnce(&Event) -> Result<bool>,
) -> Result<bool> {
    if !confirm(event)? {
        return Ok(false);
    }
    Ok(report(store.delete_event(&event.id)))
}

fn pick_selected_day_event(store: &CalendarStore, question: &str) -> Result<Option<Event>> {
    let events = store.selected_day_events();
    if events.is_empty() {
        println!("  {}", "No events for this day.".dimmed());
        return Ok(None);
    }

    Ok(prompt::pick_event(question, &events)?.cloned())
}

/// Print a store error, returning whether the operation went through.
fn report(result: CalGridResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            eprintln!("  {}", e.to_string().red());
            false
        }
    }
}

/// A bare number picks that day of the viewed month; anything else must be a
/// full YYYY-MM-DD date.
fn parse_day_input(input: &str, viewed_month: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(day) = input.parse::<u32>() {
        return viewed_month.with_day(day).with_context(|| {
            format!(
                "{} has no day {}",
                viewed_month.format("%B %Y"),
                day
            )
        });
    }

    Ok(parse_date(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::StoreOptions;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_number_is_relative_to_viewed_month() {
        assert_eq!(parse_day_input("20", date(2026, 6, 1)).unwrap(), date(2026, 6, 20));
        assert_eq!(parse_day_input(" 1 ", date(2026, 2, 28)).unwrap(), date(2026, 2, 1));
    }

    #[test]
    fn day_number_outside_month_fails() {
        assert!(parse_day_input("31", date(2026, 6, 1)).is_err());
        assert!(parse_day_input("0", date(2026, 6, 1)).is_err());
    }

    #[test]
    fn full_date_is_accepted_anywhere() {
        assert_eq!(
            parse_day_input("2025-12-24", date(2026, 6, 1)).unwrap(),
            date(2025, 12, 24)
        );
        assert!(parse_day_input("tomorrow", date(2026, 6, 1)).is_err());
    }

    #[test]
    fn actions_end_with_quit() {
        assert!(matches!(ACTIONS.last(), Some((Action::Quit, "Quit"))));
    }

    #[test]
    fn navigation_actions_move_viewed_month_only() {
        let mut store = CalendarStore::new(Vec::new(), date(2026, 1, 31));

        apply(&mut store, Action::NextMonth).unwrap();
        assert_eq!(store.viewed_month(), date(2026, 2, 28));

        apply(&mut store, Action::PreviousYear).unwrap();
        assert_eq!(store.viewed_month(), date(2025, 2, 28));
        assert_eq!(store.selected_day(), date(2026, 1, 31));
    }

    #[test]
    fn invalid_submission_retries_with_entered_values() {
        let mut store = CalendarStore::new(Vec::new(), date(2026, 6, 15));
        let mut attempts = 0;
        let mut rejected = Vec::new();

        let saved = submit_loop(
            &mut store,
            EventForm::create(date(2026, 6, 15)),
            |form| {
                attempts += 1;
                if attempts == 1 {
                    form.title = "   ".to_string();
                    form.start_time = "10:00".to_string();
                } else {
                    assert_eq!(form.start_time, "10:00");
                    form.title = "Gym".to_string();
                }
                Ok(())
            },
            |errors| {
                rejected.push(errors.title.clone());
                Ok(true)
            },
        )
        .unwrap()
        .unwrap();

        assert_eq!(attempts, 2);
        assert_eq!(rejected, vec![Some("Title is required".to_string())]);
        assert_eq!(saved.title, "Gym");
        assert_eq!(saved.time.as_deref(), Some("10:00"));
        assert_eq!(store.events(), &[saved]);
    }

    #[test]
    fn giving_up_leaves_store_untouched() {
        let mut store = CalendarStore::new(Vec::new(), date(2026, 6, 15));

        let saved = submit_loop(
            &mut store,
            EventForm::create(date(2026, 6, 15)),
            |form| {
                form.start_time = "10:00".to_string();
                form.end_time = "09:00".to_string();
                form.title = "Standup".to_string();
                Ok(())
            },
            |_| Ok(false),
        )
        .unwrap();

        assert!(saved.is_none());
        assert!(store.events().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn edit_submission_updates_in_place() {
        let original = Event::with_id("1", "Lunch", date(2026, 6, 15)).with_time("12:00 - 13:00");
        let mut store = CalendarStore::new(vec![original.clone()], date(2026, 6, 15));

        let saved = submit_loop(
            &mut store,
            EventForm::edit(&original),
            |form| {
                form.title = "Team Lunch".to_string();
                Ok(())
            },
            |_| Ok(true),
        )
        .unwrap()
        .unwrap();

        assert_eq!(saved.id, "1");
        assert_eq!(store.events().len(), 1);
        assert_eq!(store.events()[0].title, "Team Lunch");
        assert_eq!(store.events()[0].time.as_deref(), Some("12:00 - 13:00"));
    }

    #[test]
    fn store_error_ends_the_submission() {
        let gone = Event::with_id("9", "Gone", date(2026, 6, 15));
        let mut store = CalendarStore::with_options(
            Vec::new(),
            date(2026, 6, 15),
            StoreOptions { strict: true },
        );

        let saved = submit_loop(&mut store, EventForm::edit(&gone), |_| Ok(()), |_| Ok(true)).unwrap();

        assert!(saved.is_none());
        assert!(store.events().is_empty());
    }

    #[test]
    fn delete_needs_confirmation() {
        let event = Event::with_id("1", "Dentist", date(2026, 6, 15));
        let mut store = CalendarStore::new(vec![event.clone()], date(2026, 6, 15));

        assert!(!delete_confirmed(&mut store, &event, |_| Ok(false)).unwrap());
        assert_eq!(store.events().len(), 1);

        let mut asked_about = None;
        let deleted = delete_confirmed(&mut store, &event, |e| {
            asked_about = Some(e.title.clone());
            Ok(true)
        })
        .unwrap();

        assert!(deleted);
        assert_eq!(asked_about.as_deref(), Some("Dentist"));
        assert!(store.events().is_empty());
    }
}
