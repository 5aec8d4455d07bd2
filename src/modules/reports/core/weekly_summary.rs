// Worked versus not-worked hours for the Monday-Friday work week.
//
// Notes
// - Weekends never get a bucket, whatever the schedule or entries say.
// - Percentages and the axis ceiling are derived on demand for chart consumers.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::{WORK_WEEK, WeekdayHours, round_hours};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekdayBucket {
    pub weekday: Weekday,
    pub scheduled_hours: f64,
    pub worked_hours: f64,
    pub not_worked_hours: f64,
}

impl WeekdayBucket {
    /// Chart values, each rounded to two decimals.
    fn new(weekday: Weekday, scheduled_hours: f64, worked_hours: f64) -> Self {
        Self {
            weekday,
            scheduled_hours: round_hours(scheduled_hours),
            worked_hours: round_hours(worked_hours),
            not_worked_hours: round_hours((scheduled_hours - worked_hours).max(0.0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub days: [WeekdayBucket; 5],
}

impl WeeklySummary {
    pub fn bucket(&self, day: Weekday) -> Option<&WeekdayBucket> {
        self.days.iter().find(|bucket| bucket.weekday == day)
    }

    pub fn total_worked(&self) -> f64 {
        self.days.iter().map(|bucket| bucket.worked_hours).sum()
    }

    pub fn total_scheduled(&self) -> f64 {
        self.days.iter().map(|bucket| bucket.scheduled_hours).sum()
    }

    /// Share of scheduled hours worked, rounded to a whole percent. Zero when nothing is scheduled.
    pub fn worked_percent(&self) -> f64 {
        let scheduled = self.total_scheduled();
        if scheduled <= 0.0 {
            return 0.0;
        }
        (self.total_worked() / scheduled * 100.0).round()
    }

    pub fn not_worked_percent(&self) -> f64 {
        if self.total_scheduled() <= 0.0 {
            return 0.0;
        }
        (100.0 - self.worked_percent()).max(0.0)
    }

    /// Whole-hour ceiling of the busiest scheduled weekday.
    pub fn axis_ceiling(&self) -> f64 {
        self.days
            .iter()
            .map(|bucket| bucket.scheduled_hours)
            .fold(0.0, f64::max)
            .ceil()
    }
}

pub fn build_weekly_summary(
    scheduled_per_weekday: &WeekdayHours,
    worked_per_weekday: &WeekdayHours,
) -> WeeklySummary {
    WeeklySummary {
        days: WORK_WEEK.map(|day| {
            WeekdayBucket::new(
                day,
                scheduled_per_weekday.get(day),
                worked_per_weekday.get(day).max(0.0),
            )
        }),
    }
}

/// Per-member scheduled and worked hours feeding a team average.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemberWeek {
    pub scheduled: WeekdayHours,
    pub worked: WeekdayHours,
}

/// Average week across members. Worked hours are capped at scheduled hours per weekday.
pub fn build_team_weekly_summary(members: &[MemberWeek]) -> WeeklySummary {
    let count = members.len().max(1) as f64;
    WeeklySummary {
        days: WORK_WEEK.map(|day| {
            let scheduled = members
                .iter()
                .map(|member| member.scheduled.get(day))
                .sum::<f64>()
                / count;
            let worked = members
                .iter()
                .map(|member| member.worked.get(day).max(0.0))
                .sum::<f64>()
                / count;
            WeekdayBucket::new(day, scheduled, worked.min(scheduled))
        }),
    }
}
