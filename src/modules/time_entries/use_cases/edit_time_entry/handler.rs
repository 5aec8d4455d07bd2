// Drives one edit session: folds session events and runs the decider on submit.
//
// Boundaries
// - Holds a snapshot of the entry. Persisting an accepted proposal is the caller's job.
// - One session per entry; nothing here locks the entry against other sessions.

use chrono_tz::Tz;
use thiserror::Error;

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::modules::time_entries::use_cases::edit_time_entry::decide::decide_edit;
use crate::modules::time_entries::use_cases::edit_time_entry::decision::{DecideError, EditProposal};
use crate::modules::time_entries::use_cases::edit_time_entry::session::events::EditSessionEvent;
use crate::modules::time_entries::use_cases::edit_time_entry::session::evolve::evolve;
use crate::modules::time_entries::use_cases::edit_time_entry::session::state::EditSessionState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("the session is not in editing mode")]
    NotEditing,

    #[error("edit rejected: {0}")]
    Rejected(#[from] DecideError),
}

pub struct EditSession {
    entry: TimeEntry,
    user_timezone: Tz,
    state: EditSessionState,
}

impl EditSession {
    pub fn new(entry: TimeEntry, user_timezone: Tz) -> Self {
        Self {
            entry,
            user_timezone,
            state: EditSessionState::default(),
        }
    }

    pub fn entry(&self) -> &TimeEntry {
        &self.entry
    }

    pub fn state(&self) -> &EditSessionState {
        &self.state
    }

    pub fn begin(&mut self) {
        self.apply(EditSessionEvent::EditStarted);
    }

    pub fn cancel(&mut self) {
        self.apply(EditSessionEvent::Cancelled);
    }

    pub fn submit(
        &mut self,
        new_start_local: impl Into<String>,
        new_end_local: impl Into<String>,
    ) -> Result<EditProposal, SessionError> {
        if !matches!(self.state, EditSessionState::Editing { .. }) {
            return Err(SessionError::NotEditing);
        }

        let command = EditTimeEntry::new(self.entry.id.clone(), new_start_local, new_end_local);
        self.apply(EditSessionEvent::Submitted {
            start_local: command.new_start_local.clone(),
            end_local: command.new_end_local.clone(),
        });

        match decide_edit(&self.entry, command, self.user_timezone) {
            Ok(proposal) => {
                self.apply(EditSessionEvent::ValidationPassed(proposal.clone()));
                Ok(proposal)
            }
            Err(error) => {
                self.apply(EditSessionEvent::ValidationFailed(error.clone()));
                Err(SessionError::Rejected(error))
            }
        }
    }

    fn apply(&mut self, event: EditSessionEvent) {
        let current = std::mem::take(&mut self.state);
        self.state = evolve(current, event);
        tracing::debug!(
            entry_id = %self.entry.id,
            state = ?self.state,
            "edit session transition"
        );
    }
}
