use anyhow::Result;
use calgrid_core::query::{self, GridDay, WeekStart};
use calgrid_core::CalendarStore;
use chrono::Datelike;
use serde::Serialize;

use super::parse_month_arg;
use crate::context::AppContext;
use crate::render;

#[derive(Serialize)]
struct MonthView {
    year: i32,
    month: u32,
    days: Vec<CellView>,
}

#[derive(Serialize)]
struct CellView {
    #[serde(flatten)]
    day: GridDay,
    selected: bool,
    events: usize,
}

pub fn run(ctx: &mut AppContext, month: Option<&str>, json: bool) -> Result<()> {
    if let Some(month) = month {
        ctx.store.set_viewed_month(parse_month_arg(month)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&month_view(&ctx.store, ctx.config.week_start))?);
    } else {
        println!("{}", render::render_grid(&ctx.store, ctx.config.week_start));
    }

    Ok(())
}

fn month_view(store: &CalendarStore, week_start: WeekStart) -> MonthView {
    let viewed = store.viewed_month();
    let days = query::month_grid_days_with(viewed, week_start)
        .into_iter()
        .map(|day| CellView {
            selected: day.date == store.selected_day(),
            events: query::events_on_day(store.events(), day.date).len(),
            day,
        })
        .collect();

    MonthView {
        year: viewed.year(),
        month: viewed.month(),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_core::Event;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_view_marks_selection_and_counts() {
        let events = vec![
            Event::with_id("1", "Standup", date(2026, 6, 15)),
            Event::with_id("2", "Review", date(2026, 6, 15)),
        ];
        let store = CalendarStore::new(events, date(2026, 6, 15));

        let view = month_view(&store, WeekStart::Monday);

        assert_eq!((view.year, view.month), (2026, 6));
        assert_eq!(view.days.len(), 42);
        let cell = view.days.iter().find(|c| c.day.date == date(2026, 6, 15)).unwrap();
        assert!(cell.selected);
        assert_eq!(cell.events, 2);
    }

    #[test]
    fn month_view_serializes_flat_cells() {
        let store = CalendarStore::new(Vec::new(), date(2026, 6, 15));
        let json = serde_json::to_value(month_view(&store, WeekStart::Monday)).unwrap();

        assert_eq!(json["days"][0]["date"], "2026-06-01");
        assert_eq!(json["days"][0]["in_viewed_month"], true);
        assert_eq!(json["days"][0]["events"], 0);
    }
}
