use crate::calendar::{leading_blanks, month_bounds};
use crate::errors::LedgerError;
use crate::ledger::Participant;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    CheckedIn,
    Missed,
    NoData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub is_today: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

/// Month view of one participant's ledger.
///
/// A date in the check-in set is `CheckedIn` wherever it falls. Otherwise
/// dates in `[created_date, today)` are `Missed` and everything else,
/// including an unchecked today, is `NoData`.
pub fn participant_calendar(
    participant: &Participant,
    created_date: NaiveDate,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<CalendarMonth, LedgerError> {
    let (first, last) = month_bounds(year, month)?;

    let mut days = Vec::with_capacity(31);
    let mut date = first;
    while date <= last {
        days.push(CalendarDay {
            date,
            status: classify(participant, created_date, date, today),
            is_today: date == today,
        });
        date += Duration::days(1);
    }

    Ok(CalendarMonth {
        year,
        month,
        leading_blanks: leading_blanks(first),
        days,
    })
}

fn classify(
    participant: &Participant,
    created_date: NaiveDate,
    date: NaiveDate,
    today: NaiveDate,
) -> DayStatus {
    if participant.has_checked_in(date) {
        DayStatus::CheckedIn
    } else if date >= created_date && date < today {
        DayStatus::Missed
    } else {
        DayStatus::NoData
    }
}
