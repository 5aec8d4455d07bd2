// Runtime configuration read from the environment, with an optional `.env` file.

use std::path::PathBuf;

use chrono::Duration;
use thiserror::Error;

use crate::modules::schedules::core::arrival::DEFAULT_GRACE_MINUTES;
use crate::shared::core::timezone_context::TimezoneContext;

pub const COMPANY_TIMEZONE_VAR: &str = "RECONCILE_COMPANY_TIMEZONE";
pub const USER_TIMEZONE_VAR: &str = "RECONCILE_USER_TIMEZONE";
pub const GRACE_MINUTES_VAR: &str = "RECONCILE_GRACE_MINUTES";
pub const SNAPSHOT_VAR: &str = "RECONCILE_SNAPSHOT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of minutes, got {value:?}")]
    InvalidGraceMinutes { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub timezones: TimezoneContext,
    pub grace_minutes: i64,
    pub snapshot: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let company = lookup(COMPANY_TIMEZONE_VAR).unwrap_or_else(utc);
        let user = lookup(USER_TIMEZONE_VAR).unwrap_or_else(utc);

        let grace_minutes = match lookup(GRACE_MINUTES_VAR) {
            None => DEFAULT_GRACE_MINUTES,
            Some(value) => match value.trim().parse::<i64>() {
                Ok(minutes) if minutes >= 0 => minutes,
                _ => {
                    return Err(ConfigError::InvalidGraceMinutes {
                        var: GRACE_MINUTES_VAR,
                        value,
                    });
                }
            },
        };

        Ok(Self {
            timezones: TimezoneContext::new(company, user),
            grace_minutes,
            snapshot: lookup(SNAPSHOT_VAR).map(PathBuf::from),
        })
    }

    pub fn grace(&self) -> Duration {
        Duration::minutes(self.grace_minutes)
    }
}

fn utc() -> String {
    "UTC".to_string()
}
