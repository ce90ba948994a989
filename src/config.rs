use crate::calendar::parse_iso;
use crate::errors::LedgerError;
use chrono::NaiveDate;
use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HABIT_TODAY: {0}")]
    Today(#[from] LedgerError),

    #[error("HABIT_CHECKIN_WINDOW_DAYS must be a non-negative integer or 'off', got '{0}'")]
    Window(String),
}

/// Startup configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Pins "today" instead of reading the system clock.
    pub fixed_today: Option<NaiveDate>,
    /// How many days back a check-in may be recorded or undone. `None`
    /// accepts any date.
    pub check_in_window_days: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            fixed_today: None,
            check_in_window_days: Some(1),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let fixed_today = match lookup("HABIT_TODAY") {
            Some(value) if !value.trim().is_empty() => Some(parse_iso(&value)?),
            _ => None,
        };

        let check_in_window_days = match lookup("HABIT_CHECKIN_WINDOW_DAYS") {
            None => defaults.check_in_window_days,
            Some(value) if value.trim().eq_ignore_ascii_case("off") => None,
            Some(value) => Some(
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::Window(value.clone()))?,
            ),
        };

        Ok(Self {
            port,
            fixed_today,
            check_in_window_days,
        })
    }
}
