// End-to-end runs of the report and edit use cases for one New York worker
// in the week of Monday 2025-06-09, with "today" on Wednesday 2025-06-11.

use crate::modules::reports::use_cases::build_daily_report::handler::build_daily_report;
use crate::modules::reports::use_cases::build_weekly_report::handler::build_weekly_report;
use crate::modules::reports::use_cases::report_query::ReportQuery;
use crate::modules::schedules::core::schedule_block::ScheduleBlock;
use crate::modules::schedules::core::schedule_index::build_weekly_schedule;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::edit_time_entry::decide::propose_edit;
use crate::modules::time_entries::use_cases::edit_time_entry::decision::DecideError;
use crate::modules::time_entries::use_cases::edit_time_entry::handler::{EditSession, SessionError};
use crate::shared::core::primitives::WORK_WEEK;
use crate::shared::core::timezone_context::TimezoneContext;
use crate::tests::fixtures::schedule_block::ScheduleBlockBuilder;
use crate::tests::fixtures::time_entry::{FIXTURE_TIMEZONE, TimeEntryBuilder, fixture_date, local};
use chrono::{DateTime, Duration, NaiveDate, Utc, Weekday};
use rstest::{fixture, rstest};

#[fixture]
fn timezones() -> TimezoneContext {
    TimezoneContext::new("America/New_York", "America/New_York")
}

#[fixture]
fn nine_to_five() -> Vec<ScheduleBlock> {
    vec![ScheduleBlockBuilder::new().build()]
}

fn monday() -> NaiveDate {
    fixture_date() - Duration::days(2)
}

fn today_at(hour: u32, minute: u32) -> DateTime<Utc> {
    local(fixture_date(), hour, minute, FIXTURE_TIMEZONE)
}

fn query<'a>(
    entries: &'a [TimeEntry],
    schedules: &'a [ScheduleBlock],
    timezones: &'a TimezoneContext,
    now: DateTime<Utc>,
) -> ReportQuery<'a> {
    ReportQuery {
        entries,
        schedules,
        timezones,
        now,
    }
}

#[rstest]
fn closed_morning_leaves_half_the_day_remaining(
    timezones: TimezoneContext,
    nine_to_five: Vec<ScheduleBlock>,
) {
    let entries = vec![TimeEntryBuilder::new().build()];

    let report = build_daily_report(query(&entries, &nine_to_five, &timezones, today_at(14, 0)));

    assert_eq!(report.summary.hours_elapsed, 4.0);
    assert_eq!(report.summary.hours_remaining, 4.0);
}

#[rstest]
fn open_entry_counts_up_to_now(timezones: TimezoneContext, nine_to_five: Vec<ScheduleBlock>) {
    let entries = vec![
        TimeEntryBuilder::new()
            .start_utc(today_at(9, 0))
            .open()
            .build(),
    ];

    let report = build_daily_report(query(&entries, &nine_to_five, &timezones, today_at(11, 30)));

    assert_eq!(report.summary.hours_elapsed, 2.5);
    assert_eq!(report.summary.hours_remaining, 5.5);
}

#[rstest]
fn duplicate_schedule_rows_count_once() {
    let duplicated = vec![
        ScheduleBlockBuilder::new()
            .weekdays(&[Weekday::Mon])
            .build(),
        ScheduleBlockBuilder::new()
            .weekdays(&[Weekday::Mon])
            .build(),
    ];

    let schedule = build_weekly_schedule(&duplicated, monday(), FIXTURE_TIMEZONE);

    assert_eq!(schedule.hours_for(Weekday::Mon), 8.0);
    assert_eq!(schedule.hours.total(), 8.0);
}

#[rstest]
fn reversed_edit_is_rejected_and_leaves_the_entry_alone() {
    let entry = TimeEntryBuilder::new().build();
    let before = entry.clone();

    let decision = propose_edit(&entry, "10:00", "09:30", FIXTURE_TIMEZONE);
    assert!(matches!(
        decision,
        Err(DecideError::InvalidTimeRange { .. })
    ));
    assert_eq!(entry, before);

    let mut session = EditSession::new(entry, FIXTURE_TIMEZONE);
    session.begin();
    assert!(matches!(
        session.submit("10:00", "09:30"),
        Err(SessionError::Rejected(DecideError::InvalidTimeRange { .. }))
    ));
    assert_eq!(session.entry(), &before);
}

#[rstest]
fn empty_week_is_all_not_worked(timezones: TimezoneContext, nine_to_five: Vec<ScheduleBlock>) {
    let report = build_weekly_report(query(&[], &nine_to_five, &timezones, today_at(12, 0)));

    let days = &report.summary.days;
    let weekdays: Vec<Weekday> = days.iter().map(|bucket| bucket.weekday).collect();
    assert_eq!(weekdays, WORK_WEEK.to_vec());
    for bucket in &report.summary.days {
        assert_eq!(bucket.worked_hours, 0.0);
        assert_eq!(bucket.not_worked_hours, 8.0);
    }
    assert_eq!(report.worked_percent, 0.0);
    assert_eq!(report.not_worked_percent, 100.0);
}

#[rstest]
fn saturday_work_stays_out_of_the_weekly_summary(
    timezones: TimezoneContext,
    nine_to_five: Vec<ScheduleBlock>,
) {
    let saturday = monday() + Duration::days(5);
    let entries = vec![
        TimeEntryBuilder::new()
            .local_span(saturday, (10, 0), (16, 0), FIXTURE_TIMEZONE)
            .build(),
    ];
    let now = local(saturday, 18, 0, FIXTURE_TIMEZONE);

    let report = build_weekly_report(query(&entries, &nine_to_five, &timezones, now));

    assert_eq!(report.current_weekday, Weekday::Sat);
    assert!(report.summary.bucket(Weekday::Sat).is_none());
    assert_eq!(report.summary.total_worked(), 0.0);
}

#[rstest]
fn late_evening_entry_belongs_to_its_company_local_day(
    timezones: TimezoneContext,
    nine_to_five: Vec<ScheduleBlock>,
) {
    // 22:00-23:30 in New York is already Thursday in UTC.
    let entry = TimeEntry::clock_in("te-late", "user-1", today_at(22, 0), FIXTURE_TIMEZONE);
    assert_eq!(entry.date, fixture_date());
    let entries = vec![TimeEntryBuilder::from(entry).end_utc(today_at(23, 30)).build()];

    let report = build_weekly_report(query(&entries, &nine_to_five, &timezones, today_at(23, 45)));

    assert_eq!(
        report.summary.bucket(Weekday::Wed).unwrap().worked_hours,
        1.5
    );
    assert_eq!(
        report.summary.bucket(Weekday::Thu).unwrap().worked_hours,
        0.0
    );
}
