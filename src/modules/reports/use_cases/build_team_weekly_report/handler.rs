// This week's average worked versus not-worked hours across a team.
//
// Responsibilities
// - Build each member's scheduled and worked week against the same `now`.
// - Average them per weekday, capping worked hours at scheduled hours.

use chrono::{DateTime, Utc};

use crate::modules::reports::core::weekly_summary::{MemberWeek, build_team_weekly_summary};
use crate::modules::reports::use_cases::build_weekly_report::handler::WeeklyReport;
use crate::modules::schedules::core::schedule_block::ScheduleBlock;
use crate::modules::schedules::core::schedule_index::build_weekly_schedule;
use crate::modules::time_entries::core::aggregator::worked_hours_per_weekday;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::time_basis::{to_company_local_date, week_bounds};
use crate::shared::core::timezone_context::TimezoneContext;

#[derive(Debug, Clone, Copy)]
pub struct TeamMember<'a> {
    pub entries: &'a [TimeEntry],
    pub schedules: &'a [ScheduleBlock],
}

pub fn build_team_weekly_report(
    members: &[TeamMember<'_>],
    timezones: &TimezoneContext,
    now: DateTime<Utc>,
) -> WeeklyReport {
    let resolved = timezones.resolve();
    let today = to_company_local_date(now, resolved.company);
    let (week_start, week_end) = week_bounds(today);

    let weeks: Vec<MemberWeek> = members
        .iter()
        .map(|member| {
            let schedule = build_weekly_schedule(member.schedules, week_start, resolved.company);
            MemberWeek {
                scheduled: schedule.hours,
                worked: worked_hours_per_weekday(member.entries, week_start, week_end, now),
            }
        })
        .collect();

    WeeklyReport::new(
        (week_start, week_end),
        today,
        build_team_weekly_summary(&weeks),
        resolved.warnings,
    )
}
