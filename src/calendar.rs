use crate::errors::LedgerError;
use chrono::{Datelike, Duration, Local, NaiveDate};

/// Source of "today" for every operation that needs it.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Used for replay and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn yesterday(today: NaiveDate) -> Option<NaiveDate> {
    today.pred_opt()
}

/// `None` when the result falls outside the representable date range.
pub fn days_before(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(i64::from(days)))
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_iso(raw: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = raw.trim();
    // chrono accepts unpadded fields, the ledger keys do not.
    if trimmed.len() != 10 {
        return Err(LedgerError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

/// First and last day of a month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), LedgerError> {
    let no_such_month = || LedgerError::InvalidInput(format!("no such month: {year}-{month:02}"));
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(no_such_month)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(no_such_month)?;
    Ok((first, next - Duration::days(1)))
}

/// Empty cells before day 1 in a Sunday-first week grid.
pub fn leading_blanks(first_of_month: NaiveDate) -> u32 {
    first_of_month.weekday().num_days_from_sunday()
}
