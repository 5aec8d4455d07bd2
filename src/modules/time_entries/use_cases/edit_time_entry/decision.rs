use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("edit targets entry {actual} but the session holds entry {expected}")]
    EntryMismatch { expected: String, actual: String },

    #[error("invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("end time must be after start time (start {start}, end {end})")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// A validated correction, ready for the persistence layer's update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditProposal {
    pub entry_id: String,
    pub proposed_start_local: String,
    pub proposed_end_local: String,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    pub changed: bool,
}
