// Turns recurring schedule blocks into scheduled hours per weekday for one week.
//
// Responsibilities
// - Measure each block on the real date of its weekday within the reference
//   week, so a clock change inside that week is reflected.
// - Count a (weekday, start, end) window once, however many rows repeat it.
//
// Boundaries
// - No input or output. An empty block list yields a week of zeros.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::Serialize;

use crate::modules::schedules::core::schedule_block::ScheduleBlock;
use crate::shared::core::primitives::WeekdayHours;
use crate::shared::core::time_basis::week_bounds;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySchedule {
    pub week_start: NaiveDate,
    pub hours: WeekdayHours,
}

impl WeeklySchedule {
    pub fn hours_for(&self, day: Weekday) -> f64 {
        self.hours.get(day)
    }

    /// Scheduled hours for the weekday `date` falls on.
    pub fn hours_on(&self, date: NaiveDate) -> f64 {
        self.hours.get(date.weekday())
    }
}

pub fn build_weekly_schedule(
    blocks: &[ScheduleBlock],
    reference_monday: NaiveDate,
    company_timezone: Tz,
) -> WeeklySchedule {
    let (week_start, _) = week_bounds(reference_monday);
    let mut seen: HashSet<(Weekday, NaiveTime, NaiveTime)> = HashSet::new();
    let mut hours = WeekdayHours::new();

    for block in blocks {
        for &day in &block.weekdays {
            if !seen.insert((day, block.start_time_of_day, block.end_time_of_day)) {
                tracing::debug!(
                    employee_id = %block.employee_id,
                    weekday = %day,
                    start = %block.start_time_of_day,
                    end = %block.end_time_of_day,
                    "skipping duplicate schedule window"
                );
                continue;
            }
            let date = week_start + Duration::days(i64::from(day.num_days_from_monday()));
            hours.add(day, block.duration_hours_on(date, company_timezone));
        }
    }

    WeeklySchedule { week_start, hours }
}
