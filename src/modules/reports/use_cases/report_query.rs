use chrono::{DateTime, Utc};

use crate::modules::schedules::core::schedule_block::ScheduleBlock;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::timezone_context::TimezoneContext;

/// Inputs for one worker's report. `now` is taken once by the caller per refresh.
#[derive(Debug, Clone, Copy)]
pub struct ReportQuery<'a> {
    pub entries: &'a [TimeEntry],
    pub schedules: &'a [ScheduleBlock],
    pub timezones: &'a TimezoneContext,
    pub now: DateTime<Utc>,
}
