// Pure decision function for correcting an entry.
//
// Purpose
// - Turn two wall-clock strings typed in the user's timezone into a validated UTC span.
//
// Responsibilities
// - Compose both times on the date the entry starts on as the user sees it,
//   which can differ from the company-local `date` the entry is bucketed under.
// - Reject a span whose end is not after its start. Nothing is silently corrected.
// - Decide `changed` by comparing instants, not display strings.
// - Never perform input or output.

use chrono::NaiveTime;
use chrono_tz::Tz;

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::modules::time_entries::use_cases::edit_time_entry::decision::{DecideError, EditProposal};
use crate::shared::core::time_basis::{
    WallClock, compose_on_date, parse_wall_clock, time_of_day_in, to_company_local_date,
};

pub fn decide_edit(
    entry: &TimeEntry,
    command: EditTimeEntry,
    user_timezone: Tz,
) -> Result<EditProposal, DecideError> {
    if command.entry_id != entry.id {
        return Err(DecideError::EntryMismatch {
            expected: entry.id.clone(),
            actual: command.entry_id,
        });
    }

    let start_clock = parse_input(&command.new_start_local)?;
    let end_clock = parse_input(&command.new_end_local)?;

    // Without typed seconds, keep the seconds already stored so an untouched
    // field does not register as a change.
    let start_time = start_clock.with_seconds_from(time_of_day_in(entry.start_utc, user_timezone));
    let end_time = end_clock.with_seconds_from(
        entry
            .end_utc
            .map(|end| time_of_day_in(end, user_timezone))
            .unwrap_or(NaiveTime::MIN),
    );

    let edit_date = to_company_local_date(entry.start_utc, user_timezone);
    let start_utc = compose_on_date(edit_date, start_time, user_timezone);
    let end_utc = compose_on_date(edit_date, end_time, user_timezone);
    if end_utc <= start_utc {
        return Err(DecideError::InvalidTimeRange {
            start: start_utc,
            end: end_utc,
        });
    }

    Ok(EditProposal {
        changed: start_utc != entry.start_utc || entry.end_utc != Some(end_utc),
        entry_id: command.entry_id,
        proposed_start_local: command.new_start_local,
        proposed_end_local: command.new_end_local,
        start_utc,
        end_utc,
    })
}

/// Convenience wrapper for a one-off edit of `entry`.
pub fn propose_edit(
    entry: &TimeEntry,
    new_start_local: &str,
    new_end_local: &str,
    user_timezone: Tz,
) -> Result<EditProposal, DecideError> {
    decide_edit(
        entry,
        EditTimeEntry::new(entry.id.clone(), new_start_local, new_end_local),
        user_timezone,
    )
}

fn parse_input(input: &str) -> Result<WallClock, DecideError> {
    parse_wall_clock(input)
        .map_err(|_| DecideError::InvalidTimeOfDay(input.to_string()))
}
