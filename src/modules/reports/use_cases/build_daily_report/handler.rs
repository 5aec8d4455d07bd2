// Today's elapsed versus remaining hours for one worker.
//
// Responsibilities
// - Resolve the company timezone, falling back to UTC with a warning.
// - Find "today" as the company-local date of `now`.
// - Merge the weekly schedule for today's weekday with today's worked hours.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::modules::reports::core::daily_summary::{DailySummary, build_daily_summary};
use crate::modules::reports::use_cases::report_query::ReportQuery;
use crate::modules::schedules::core::schedule_index::build_weekly_schedule;
use crate::modules::time_entries::core::aggregator::worked_hours_on;
use crate::shared::core::time_basis::{to_company_local_date, week_bounds, weekday_of};
use crate::shared::core::timezone_context::TimezoneWarning;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub scheduled_hours: f64,
    pub summary: DailySummary,
    pub warnings: Vec<TimezoneWarning>,
}

pub fn build_daily_report(query: ReportQuery<'_>) -> DailyReport {
    let resolved = query.timezones.resolve();
    let today = to_company_local_date(query.now, resolved.company);
    let (monday, _) = week_bounds(today);

    let schedule = build_weekly_schedule(query.schedules, monday, resolved.company);
    let scheduled_hours = schedule.hours_on(today);
    let worked_hours = worked_hours_on(query.entries, today, query.now);

    DailyReport {
        date: today,
        weekday: weekday_of(today),
        scheduled_hours,
        summary: build_daily_summary(scheduled_hours, worked_hours),
        warnings: resolved.warnings,
    }
}
