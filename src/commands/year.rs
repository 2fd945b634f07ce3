use anyhow::{bail, Result};
use calgrid_core::constants::{MAX_YEAR, MIN_YEAR};
use calgrid_core::cursor::shift_years;
use chrono::Datelike;

use crate::context::AppContext;
use crate::render;

pub fn run(ctx: &mut AppContext, year: Option<i32>) -> Result<()> {
    if let Some(year) = year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            bail!("Year {} is out of range ({}-{})", year, MIN_YEAR, MAX_YEAR);
        }
        let viewed = ctx.store.viewed_month();
        ctx.store.set_viewed_month(shift_years(viewed, year - viewed.year()));
    }

    println!("{}", render::render_sidebar(&ctx.store));

    Ok(())
}
