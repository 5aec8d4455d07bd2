// Shared test fixture for ScheduleBlock: a Monday-Friday 09:00-17:00 block by default.

use crate::modules::schedules::core::schedule_block::ScheduleBlock;
use crate::shared::core::primitives::WORK_WEEK;
use chrono::{NaiveTime, Weekday};

pub struct ScheduleBlockBuilder {
    inner: ScheduleBlock,
}

impl Default for ScheduleBlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduleBlockBuilder {
    pub fn new() -> Self {
        Self {
            inner: ScheduleBlock {
                employee_id: "employee-fixed-0001".to_string(),
                start_time_of_day: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time_of_day: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                weekdays: WORK_WEEK.to_vec(),
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn hours(mut self, (start_h, start_m): (u32, u32), (end_h, end_m): (u32, u32)) -> Self {
        self.inner.start_time_of_day = NaiveTime::from_hms_opt(start_h, start_m, 0).unwrap();
        self.inner.end_time_of_day = NaiveTime::from_hms_opt(end_h, end_m, 0).unwrap();
        self
    }

    pub fn weekdays(mut self, v: &[Weekday]) -> Self {
        self.inner.weekdays = v.to_vec();
        self
    }

    pub fn build(self) -> ScheduleBlock {
        self.inner
    }
}
