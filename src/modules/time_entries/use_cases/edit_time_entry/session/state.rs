// Lifecycle of one edit session on one entry.
//
// Viewing -> Editing -> Validating -> Viewing (accepted)
//                                  -> Editing (rejected, error kept for display)
//            Editing -> Viewing (cancelled, nothing kept)

use crate::modules::time_entries::use_cases::edit_time_entry::decision::{DecideError, EditProposal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSessionState {
    Viewing {
        accepted: Option<EditProposal>,
    },
    Editing {
        last_error: Option<DecideError>,
    },
    Validating {
        start_local: String,
        end_local: String,
    },
}

impl Default for EditSessionState {
    fn default() -> Self {
        EditSessionState::Viewing { accepted: None }
    }
}
