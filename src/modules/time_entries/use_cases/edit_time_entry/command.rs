// Command data type for correcting a stored time entry.
//
// Purpose
// - Express the user's intent to move an entry's start and end to new
//   wall-clock times, typed in the user's own timezone.
//
// Responsibilities
// - Carry raw input for the decider to parse, convert and validate.
// - Stay independent of how the values were collected (form, API, script).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTimeEntry {
    pub entry_id: String,
    pub new_start_local: String,
    pub new_end_local: String,
}

impl EditTimeEntry {
    pub fn new(
        entry_id: impl Into<String>,
        new_start_local: impl Into<String>,
        new_end_local: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            new_start_local: new_start_local.into(),
            new_end_local: new_end_local.into(),
        }
    }
}
