use crate::calendar::{Clock, FixedClock, SystemClock, days_before};
use crate::config::Config;
use crate::errors::AppError;
use crate::store::HabitStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<HabitStore>>,
    pub clock: Arc<dyn Clock>,
    pub check_in_window_days: Option<u32>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>, check_in_window_days: Option<u32>) -> Self {
        Self {
            store: Arc::new(Mutex::new(HabitStore::new())),
            clock,
            check_in_window_days,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let clock: Arc<dyn Clock> = match config.fixed_today {
            Some(date) => Arc::new(FixedClock(date)),
            None => Arc::new(SystemClock),
        };
        Self::new(clock, config.check_in_window_days)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Rejects check-in dates outside `[today - window, today]`. The ledger
    /// itself accepts any date.
    pub fn ensure_in_window(&self, date: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
        let Some(window) = self.check_in_window_days else {
            return Ok(());
        };
        // A window reaching past the first representable date has no lower bound.
        let too_old = days_before(today, window).is_some_and(|earliest| date < earliest);
        if too_old || date > today {
            return Err(AppError::bad_request(format!(
                "date {date} is outside the last {window} day(s) check-in window ending {today}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn state(window: Option<u32>) -> AppState {
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        AppState::new(Arc::new(FixedClock(today)), window)
    }

    #[test]
    fn default_window_allows_today_and_yesterday() {
        let state = state(Some(1));
        let today = state.today();
        assert!(state.ensure_in_window(today, today).is_ok());
        assert!(state.ensure_in_window(days_before(today, 1).unwrap(), today).is_ok());

        let err = state
            .ensure_in_window(days_before(today, 2).unwrap(), today)
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(state.ensure_in_window(today.succ_opt().unwrap(), today).is_err());
    }

    #[test]
    fn window_past_the_calendar_start_has_no_lower_bound() {
        let config = Config::from_lookup(|key| match key {
            "HABIT_TODAY" => Some("2024-01-03".to_string()),
            "HABIT_CHECKIN_WINDOW_DAYS" => Some("100000000".to_string()),
            _ => None,
        })
        .unwrap();
        let state = AppState::from_config(&config);
        let today = state.today();

        assert!(state.ensure_in_window(today, today).is_ok());
        assert!(state.ensure_in_window(NaiveDate::MIN, today).is_ok());
        assert!(state.ensure_in_window(today.succ_opt().unwrap(), today).is_err());
    }

    #[test]
    fn disabled_window_accepts_anything() {
        let state = state(None);
        let today = state.today();
        assert!(state.ensure_in_window(days_before(today, 400).unwrap(), today).is_ok());
        assert!(state.ensure_in_window(today.succ_opt().unwrap(), today).is_ok());
    }
}
