// Small value types shared by the schedule, aggregation and report modules.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The five weekday buckets charted by weekly reports.
pub const WORK_WEEK: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Hours per ISO weekday. A weekday nobody touched reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekdayHours {
    hours: [f64; 7],
}

impl WeekdayHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Weekday) -> f64 {
        self.hours[day.num_days_from_monday() as usize]
    }

    pub fn add(&mut self, day: Weekday, hours: f64) {
        self.hours[day.num_days_from_monday() as usize] += hours;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        self.hours
            .iter()
            .enumerate()
            .map(|(index, hours)| (weekday_from_index(index), *hours))
    }

    pub fn total(&self) -> f64 {
        self.hours.iter().sum()
    }
}

fn weekday_from_index(index: usize) -> Weekday {
    match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// Round to two decimals, the precision reports are displayed with.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Render fractional hours as `HH:MM:SS`, flooring each component.
pub fn format_hours(hours: f64) -> String {
    let hours = hours.max(0.0);
    let whole_hours = hours.floor();
    let fractional_minutes = (hours - whole_hours) * 60.0;
    let whole_minutes = fractional_minutes.floor();
    let whole_seconds = ((fractional_minutes - whole_minutes) * 60.0).floor();
    format!(
        "{:02}:{:02}:{:02}",
        whole_hours as u64, whole_minutes as u64, whole_seconds as u64
    )
}
