pub mod config;
pub mod day;
pub mod month;
pub mod shell;
pub mod year;

use anyhow::{Context, Result};
use calgrid_core::event::is_supported;
use chrono::NaiveDate;

/// Parse a YYYY-MM argument into the first day of that month.
pub fn parse_month_arg(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .ok()
        .filter(|date| is_supported(*date))
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_month() {
        assert_eq!(
            parse_month_arg("2026-06").unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
        );
    }

    #[test]
    fn rejects_other_forms() {
        assert!(parse_month_arg("2026-13").is_err());
        assert!(parse_month_arg("June").is_err());
        assert!(parse_month_arg("2026-06-15").is_err());
        assert!(parse_month_arg("+262142-12").is_err());
        assert!(parse_month_arg("0000-01").is_err());
    }
}
