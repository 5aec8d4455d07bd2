// Timezone-aware conversions between stored UTC instants, company-local
// calendar dates and wall-clock times.
//
// Purpose
// - Single place for timezone math. Schedules, aggregation and the edit pipeline
//   call into this module instead of converting on their own.
//
// Boundaries
// - No input or output. Timezone rules come from the IANA database shipped with chrono-tz.
//
// Testing guidance
// - Composing a wall-clock time on a date and reading it back in the same zone
//   should give the original time of day.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc,
    Weekday,
};
use chrono_tz::Tz;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TimeBasisError {
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("invalid time of day: {0}")]
    InvalidTimeOfDay(String),
}

/// A wall-clock time typed by a user. Remembers whether seconds were given so
/// callers can carry over the seconds of a stored value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub time: NaiveTime,
    pub explicit_seconds: bool,
}

impl WallClock {
    pub fn with_seconds_from(&self, reference: NaiveTime) -> NaiveTime {
        if self.explicit_seconds {
            return self.time;
        }
        NaiveTime::from_hms_opt(self.time.hour(), self.time.minute(), reference.second())
            .unwrap_or(self.time)
    }
}

pub fn parse_timezone(identifier: &str) -> Result<Tz, TimeBasisError> {
    identifier
        .trim()
        .parse::<Tz>()
        .map_err(|_| TimeBasisError::InvalidTimezone(identifier.to_string()))
}

/// The calendar date `instant` falls on when observed in `timezone`.
pub fn to_company_local_date(instant: DateTime<Utc>, timezone: Tz) -> NaiveDate {
    instant.with_timezone(&timezone).date_naive()
}

pub fn weekday_of(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Combine a calendar date and a wall-clock time in `timezone` into an instant.
///
/// Ambiguous wall-clock times (clocks turned back) resolve to the earlier
/// instant. Times skipped by a forward transition move past the gap.
pub fn compose_on_date(date: NaiveDate, time_of_day: NaiveTime, timezone: Tz) -> DateTime<Utc> {
    let naive = date.and_time(time_of_day);
    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => timezone
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|instant| instant.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
    }
}

/// Wall-clock time of `instant` in `timezone`.
pub fn time_of_day_in(instant: DateTime<Utc>, timezone: Tz) -> NaiveTime {
    instant.with_timezone(&timezone).time()
}

/// Elapsed hours between two instants, never negative.
pub fn duration_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let millis = (end - start).num_milliseconds() as f64;
    (millis / 3_600_000.0).max(0.0)
}

/// Monday and Sunday of the ISO week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(6))
}

/// Parse `HH:MM`, `HH:MM:SS`, `HHMM` or `HMM` (left-padded to `0HMM`).
pub fn parse_wall_clock(input: &str) -> Result<WallClock, TimeBasisError> {
    let invalid = || TimeBasisError::InvalidTimeOfDay(input.to_string());
    let trimmed = input.trim();

    let (parts, explicit_seconds): (Vec<&str>, bool) = if trimmed.contains(':') {
        let parts: Vec<&str> = trimmed.split(':').collect();
        let explicit_seconds = parts.len() == 3;
        (parts, explicit_seconds)
    } else if (trimmed.len() == 3 || trimmed.len() == 4) && trimmed.is_ascii() {
        let split_at = trimmed.len() - 2;
        (vec![&trimmed[..split_at], &trimmed[split_at..]], false)
    } else {
        return Err(invalid());
    };

    let well_formed = |part: &&str| {
        !part.is_empty() && part.len() <= 2 && part.chars().all(|c| c.is_ascii_digit())
    };
    if !(2..=3).contains(&parts.len()) || !parts.iter().all(well_formed) {
        return Err(invalid());
    }

    let mut numbers = parts.iter().map(|part| part.parse::<u32>());
    let hours = numbers.next().and_then(Result::ok).ok_or_else(invalid)?;
    let minutes = numbers.next().and_then(Result::ok).ok_or_else(invalid)?;
    let seconds = match numbers.next() {
        Some(parsed) => parsed.map_err(|_| invalid())?,
        None => 0,
    };

    let time = NaiveTime::from_hms_opt(hours, minutes, seconds).ok_or_else(invalid)?;
    Ok(WallClock {
        time,
        explicit_seconds,
    })
}
