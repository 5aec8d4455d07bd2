// One recurring weekly work window for an employee.
//
// Notes
// - Times are company-local wall-clock times without a date.
// - An end earlier than the start crosses midnight into the next day.

use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::shared::core::time_basis::{compose_on_date, duration_hours};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub employee_id: String,
    #[serde(alias = "start_time")]
    pub start_time_of_day: NaiveTime,
    #[serde(alias = "end_time")]
    pub end_time_of_day: NaiveTime,
    #[serde(alias = "days")]
    pub weekdays: Vec<Weekday>,
}

impl ScheduleBlock {
    pub fn applies_to(&self, day: Weekday) -> bool {
        self.weekdays.contains(&day)
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end_time_of_day < self.start_time_of_day
    }

    /// Length of the block when worked on `date` in `timezone`.
    pub fn duration_hours_on(&self, date: NaiveDate, timezone: Tz) -> f64 {
        let start = compose_on_date(date, self.start_time_of_day, timezone);
        let end_date = if self.crosses_midnight() {
            date + Duration::days(1)
        } else {
            date
        };
        let end = compose_on_date(end_date, self.end_time_of_day, timezone);
        duration_hours(start, end)
    }
}
