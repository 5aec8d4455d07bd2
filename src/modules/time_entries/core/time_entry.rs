// A clock-in/clock-out record as supplied by the entries store.
//
// Purpose
// - Carry the stored UTC instants and the calendar date the entry is attributed to.
//
// Notes
// - An entry without `end_utc` is open: the worker is still clocked in.
// - `id` and `user_id` are opaque keys owned by the persistence layer.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::shared::core::time_basis::{duration_hours, to_company_local_date};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    #[serde(alias = "start_time")]
    pub start_utc: DateTime<Utc>,
    #[serde(default, alias = "end_time")]
    pub end_utc: Option<DateTime<Utc>>,
    pub date: NaiveDate,
}

impl TimeEntry {
    /// Open entry attributed to the company-local date of `start_utc`.
    pub fn clock_in(
        id: impl Into<String>,
        user_id: impl Into<String>,
        start_utc: DateTime<Utc>,
        company_timezone: Tz,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            start_utc,
            end_utc: None,
            date: to_company_local_date(start_utc, company_timezone),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_utc.is_none()
    }

    /// Worked hours, using `now` as the end of an open entry.
    pub fn worked_hours(&self, now: DateTime<Utc>) -> f64 {
        duration_hours(self.start_utc, self.end_utc.unwrap_or(now))
    }
}
