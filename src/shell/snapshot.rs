// Input snapshot read by the binary: the entries and schedule blocks of one
// worker, plus an optional fixed `now` and timezone override.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::modules::schedules::core::schedule_block::ScheduleBlock;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::timezone_context::TimezoneContext;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
    #[serde(default, alias = "blocks")]
    pub schedules: Vec<ScheduleBlock>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
    #[serde(default)]
    pub timezones: Option<TimezoneContext>,
}

impl Snapshot {
    pub fn parse(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::parse(&json)?;
        tracing::info!(
            path = %path.display(),
            entries = snapshot.entries.len(),
            schedules = snapshot.schedules.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// The snapshot's timezones win over the configured ones.
    pub fn timezones_or(&self, configured: &TimezoneContext) -> TimezoneContext {
        self.timezones.clone().unwrap_or_else(|| configured.clone())
    }
}
