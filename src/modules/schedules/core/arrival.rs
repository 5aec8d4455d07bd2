// Classifies a clock-in against the earliest scheduled start of its day.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::modules::schedules::core::schedule_block::ScheduleBlock;
use crate::shared::core::time_basis::{compose_on_date, to_company_local_date, weekday_of};

pub const DEFAULT_GRACE_MINUTES: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalStatus {
    /// At or before the scheduled start.
    Early,
    /// After the start but inside the grace window.
    OnTime,
    Late,
    /// No block applies to that weekday.
    Unscheduled,
}

pub fn arrival_status(
    blocks: &[ScheduleBlock],
    clock_in: DateTime<Utc>,
    company_timezone: Tz,
    grace: Duration,
) -> ArrivalStatus {
    let date = to_company_local_date(clock_in, company_timezone);
    let day = weekday_of(date);
    let Some(earliest_start) = blocks
        .iter()
        .filter(|block| block.applies_to(day))
        .map(|block| block.start_time_of_day)
        .min()
    else {
        return ArrivalStatus::Unscheduled;
    };

    let scheduled_start = compose_on_date(date, earliest_start, company_timezone);
    if clock_in <= scheduled_start {
        ArrivalStatus::Early
    } else if clock_in <= scheduled_start + grace {
        ArrivalStatus::OnTime
    } else {
        ArrivalStatus::Late
    }
}
