use serde::{Deserialize, Serialize};

/// Elapsed versus remaining hours for one calendar date. Both are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub hours_elapsed: f64,
    pub hours_remaining: f64,
}

/// A worker without a schedule for the day shows what they worked and nothing remaining.
pub fn build_daily_summary(scheduled_hours_today: f64, worked_hours_today: f64) -> DailySummary {
    let hours_elapsed = worked_hours_today.max(0.0);
    DailySummary {
        hours_elapsed,
        hours_remaining: (scheduled_hours_today - hours_elapsed).max(0.0),
    }
}
