// This week's worked versus not-worked hours for one worker.
//
// Responsibilities
// - Take the ISO week (Monday to Sunday) containing today's company-local date.
// - Aggregate entries over the whole week, then keep Monday to Friday for the summary.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::modules::reports::core::weekly_summary::{WeeklySummary, build_weekly_summary};
use crate::modules::reports::use_cases::report_query::ReportQuery;
use crate::modules::schedules::core::schedule_index::build_weekly_schedule;
use crate::modules::time_entries::core::aggregator::worked_hours_per_weekday;
use crate::shared::core::time_basis::{to_company_local_date, week_bounds, weekday_of};
use crate::shared::core::timezone_context::TimezoneWarning;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    /// Weekday of today, for highlighting the current bar.
    pub current_weekday: Weekday,
    pub summary: WeeklySummary,
    pub worked_percent: f64,
    pub not_worked_percent: f64,
    pub axis_ceiling: f64,
    pub warnings: Vec<TimezoneWarning>,
}

impl WeeklyReport {
    pub(crate) fn new(
        week: (NaiveDate, NaiveDate),
        today: NaiveDate,
        summary: WeeklySummary,
        warnings: Vec<TimezoneWarning>,
    ) -> Self {
        Self {
            week_start: week.0,
            week_end: week.1,
            current_weekday: weekday_of(today),
            worked_percent: summary.worked_percent(),
            not_worked_percent: summary.not_worked_percent(),
            axis_ceiling: summary.axis_ceiling(),
            summary,
            warnings,
        }
    }
}

pub fn build_weekly_report(query: ReportQuery<'_>) -> WeeklyReport {
    let resolved = query.timezones.resolve();
    let today = to_company_local_date(query.now, resolved.company);
    let (week_start, week_end) = week_bounds(today);

    let schedule = build_weekly_schedule(query.schedules, week_start, resolved.company);
    let worked = worked_hours_per_weekday(query.entries, week_start, week_end, query.now);

    WeeklyReport::new(
        (week_start, week_end),
        today,
        build_weekly_summary(&schedule.hours, &worked),
        resolved.warnings,
    )
}
