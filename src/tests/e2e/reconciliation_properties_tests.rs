// Properties that hold across many inputs, checked over hand-picked grids.

use crate::modules::reports::core::daily_summary::build_daily_summary;
use crate::modules::time_entries::core::aggregator::worked_hours_on;
use crate::shared::core::time_basis::{compose_on_date, time_of_day_in};
use crate::tests::fixtures::time_entry::{FIXTURE_TIMEZONE, TimeEntryBuilder, fixture_date, local};
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use rstest::rstest;

#[rstest]
fn adding_closed_entries_never_lowers_worked_hours() {
    let now = local(fixture_date(), 23, 0, FIXTURE_TIMEZONE);
    let spans = [
        ((6, 0), (7, 15)),
        ((8, 0), (8, 0)),
        ((9, 0), (12, 30)),
        ((13, 0), (12, 0)),
        ((14, 0), (18, 45)),
    ];

    let mut entries = Vec::new();
    let mut previous = worked_hours_on(&entries, fixture_date(), now);
    for (index, (start, end)) in spans.into_iter().enumerate() {
        entries.push(
            TimeEntryBuilder::new()
                .id(format!("te-{index}"))
                .local_span(fixture_date(), start, end, FIXTURE_TIMEZONE)
                .build(),
        );
        let current = worked_hours_on(&entries, fixture_date(), now);
        assert!(
            current >= previous,
            "{current} < {previous} after entry {index}"
        );
        previous = current;
    }
}

#[rstest]
fn daily_summary_is_never_negative(
    #[values(-4.0, 0.0, 0.5, 8.0, 24.0)] scheduled: f64,
    #[values(-1.0, 0.0, 3.25, 8.0, 12.0)] worked: f64,
) {
    let summary = build_daily_summary(scheduled, worked);
    assert!(summary.hours_elapsed >= 0.0);
    assert!(summary.hours_remaining >= 0.0);
}

#[rstest]
fn composing_then_reading_back_keeps_the_wall_clock(
    #[values(
        Tz::UTC,
        Tz::America__New_York,
        Tz::Europe__Berlin,
        Tz::Asia__Kolkata,
        Tz::Australia__Lord_Howe
    )]
    timezone: Tz,
    #[values((0, 0, 0), (1, 30, 0), (9, 15, 42), (23, 59, 59))] wall_clock: (u32, u32, u32),
    #[values((2025, 6, 11), (2025, 11, 2), (2025, 12, 31))] calendar_day: (i32, u32, u32),
) {
    let (year, month, day) = calendar_day;
    let (hour, minute, second) = wall_clock;
    let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
    let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap();

    let instant = compose_on_date(date, time, timezone);

    assert_eq!(time_of_day_in(instant, timezone), time);
}
