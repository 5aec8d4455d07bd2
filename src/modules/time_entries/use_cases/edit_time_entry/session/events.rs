use crate::modules::time_entries::use_cases::edit_time_entry::decision::{DecideError, EditProposal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSessionEvent {
    EditStarted,
    Submitted {
        start_local: String,
        end_local: String,
    },
    ValidationPassed(EditProposal),
    ValidationFailed(DecideError),
    Cancelled,
}
