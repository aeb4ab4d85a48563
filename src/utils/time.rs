//! Calendar helpers for forecast month handling
//!
//! Forecast months are held as `NaiveDate` values pinned to the first day of
//! the month, which keeps month arithmetic and label rendering trivial.

use chrono::{Datelike, Months, NaiveDate, Utc};

use crate::errors::AppResult;

/// First day of the current month (UTC)
pub fn current_month_start() -> NaiveDate {
    let today = Utc::now().date_naive();
    today.with_day(1).unwrap_or(today)
}

/// Parse a "YYYY-MM" string into the first day of that month
///
/// # Examples
/// ```
/// use mining_profit_calculator::utils::time::parse_month;
/// let date = parse_month("2025-03").unwrap();
/// assert_eq!(date.to_string(), "2025-03-01");
/// assert!(parse_month("2025-13").is_err());
/// assert!(parse_month("March 2025").is_err());
/// ```
pub fn parse_month(raw: &str) -> AppResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")?;
    Ok(date)
}

/// Add whole months to a date, saturating on (unreachable) overflow
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Render a forecast month label, "YYYY MonthName"
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use mining_profit_calculator::utils::time::month_label;
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(month_label(date), "2025 January");
/// ```
pub fn month_label(date: NaiveDate) -> String {
    date.format("%Y %B").to_string()
}
