// Worked hours per calendar date and per weekday.
//
// Responsibilities
// - Sum closed entries by their attributed `date`.
// - Count an open entry up to the caller-supplied `now`, never below zero.
// - Tolerate upstream anomalies: several open entries on one date are all
//   counted and logged, never rejected.
//
// Boundaries
// - Pure. `now` is passed in so every figure of one refresh uses the same instant.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::primitives::WeekdayHours;
use crate::shared::core::time_basis::weekday_of;

pub fn worked_hours_on(entries: &[TimeEntry], date: NaiveDate, now: DateTime<Utc>) -> f64 {
    sum_for_date(entries.iter().filter(|entry| entry.date == date), date, now)
}

/// Worked hours per weekday for entries dated within `[week_start, week_end]`.
pub fn worked_hours_per_weekday(
    entries: &[TimeEntry],
    week_start: NaiveDate,
    week_end: NaiveDate,
    now: DateTime<Utc>,
) -> WeekdayHours {
    let mut by_date: BTreeMap<NaiveDate, Vec<&TimeEntry>> = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|entry| entry.date >= week_start && entry.date <= week_end)
    {
        by_date.entry(entry.date).or_default().push(entry);
    }

    let mut per_weekday = WeekdayHours::new();
    for (date, dated) in by_date {
        per_weekday.add(weekday_of(date), sum_for_date(dated.into_iter(), date, now));
    }
    per_weekday
}

fn sum_for_date<'a>(
    entries: impl Iterator<Item = &'a TimeEntry>,
    date: NaiveDate,
    now: DateTime<Utc>,
) -> f64 {
    let mut total = 0.0;
    let mut open_entries = 0usize;
    for entry in entries {
        if entry.is_open() {
            open_entries += 1;
        }
        total += entry.worked_hours(now);
    }
    if open_entries > 1 {
        tracing::warn!(
            %date,
            open_entries,
            "more than one open entry on one date; counting all of them"
        );
    }
    total
}
