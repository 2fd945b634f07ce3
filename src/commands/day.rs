use anyhow::Result;
use calgrid_core::event::parse_date;
use calgrid_core::Event;
use chrono::NaiveDate;
use serde::Serialize;

use crate::context::AppContext;
use crate::render;

#[derive(Serialize)]
struct DayView<'a> {
    date: NaiveDate,
    events: Vec<&'a Event>,
}

pub fn run(ctx: &mut AppContext, date: Option<&str>, json: bool) -> Result<()> {
    if let Some(date) = date {
        ctx.store.set_selected_day(parse_date(date)?);
    }

    if json {
        let view = DayView {
            date: ctx.store.selected_day(),
            events: ctx.store.selected_day_events(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render::render_day_panel(&ctx.store));
    }

    Ok(())
}
