//! Application root: configuration and the event store.
//!
//! Built once in `main` and handed down by reference to every command.

use anyhow::{bail, Context, Result};
use calgrid_core::config::CalGridConfig;
use calgrid_core::constants::{MAX_YEAR, MIN_YEAR};
use calgrid_core::event::parse_date;
use calgrid_core::seed::{self, SeedKind};
use calgrid_core::CalendarStore;
use chrono::{Datelike, Local, NaiveDate};
use tracing::info;

pub struct AppContext {
    pub config: CalGridConfig,
    pub store: CalendarStore,
}

impl AppContext {
    /// Load config, resolve today and seed the store. Any failure here aborts
    /// before a view is shown.
    pub fn build(config_path: Option<&str>, seed: Option<SeedKind>, today: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(raw) => CalGridConfig::load_from(&CalGridConfig::expand_path(raw)),
            None => CalGridConfig::load(),
        }
        .context("Failed to load configuration")?;
        check_seed_year(&config)?;

        let today = match today {
            Some(s) => parse_date(s)?,
            None => Local::now().date_naive(),
        };

        Ok(Self::from_parts(config, seed, today))
    }

    pub fn from_parts(mut config: CalGridConfig, seed: Option<SeedKind>, today: NaiveDate) -> Self {
        if let Some(kind) = seed {
            config.seed.kind = kind;
        }

        let year = config.seed.year.unwrap_or(today.year());
        let provider = seed::provider_for(config.seed.kind, year, config.seed.rng_seed, today);
        let store = CalendarStore::from_seed(provider.as_ref(), today, config.store_options());

        info!(
            seed = %config.seed.kind,
            events = store.events().len(),
            %today,
            "session started"
        );

        AppContext { config, store }
    }
}

fn check_seed_year(config: &CalGridConfig) -> Result<()> {
    if let Some(year) = config.seed.year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            bail!("seed.year {} is out of range ({}-{})", year, MIN_YEAR, MAX_YEAR);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seed_override_wins_over_config() {
        let ctx = AppContext::from_parts(CalGridConfig::default(), Some(SeedKind::Empty), date(2026, 1, 1));
        assert!(ctx.store.events().is_empty());
    }

    #[test]
    fn year_plan_defaults_to_current_year() {
        let mut config = CalGridConfig::default();
        config.seed.rng_seed = Some(1);

        let ctx = AppContext::from_parts(config, None, date(2027, 5, 5));

        assert!(ctx.store.events().iter().all(|e| e.date.year() == 2027));
        assert_eq!(ctx.store.selected_day(), date(2027, 5, 5));
    }

    #[test]
    fn sample_seed_at_last_supported_day() {
        let today = parse_date("9999-12-31").unwrap();
        let ctx = AppContext::from_parts(CalGridConfig::default(), Some(SeedKind::Sample), today);

        assert_eq!(ctx.store.events().len(), 4);
        assert!(parse_date("+262142-12-31").is_err());
    }

    #[test]
    fn seed_year_must_be_in_range() {
        let mut config = CalGridConfig::default();
        assert!(check_seed_year(&config).is_ok());

        config.seed.year = Some(2026);
        assert!(check_seed_year(&config).is_ok());

        config.seed.year = Some(300_000);
        assert!(check_seed_year(&config).is_err());
    }

    #[test]
    fn strict_flag_reaches_store() {
        let mut config = CalGridConfig::default();
        config.strict = true;

        let ctx = AppContext::from_parts(config, Some(SeedKind::Empty), date(2026, 1, 1));
        assert!(ctx.store.options().strict);
    }
}
