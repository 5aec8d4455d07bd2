// Evolve function: combine the current session state with an event to produce the next state.
//
// Boundaries
// - No input or output. No side effects.
// - Events that make no sense in the current state leave it unchanged.

use crate::modules::time_entries::use_cases::edit_time_entry::session::events::EditSessionEvent;
use crate::modules::time_entries::use_cases::edit_time_entry::session::state::EditSessionState;

pub fn evolve(state: EditSessionState, event: EditSessionEvent) -> EditSessionState {
    match (state, event) {
        (EditSessionState::Viewing { .. }, EditSessionEvent::EditStarted) => {
            EditSessionState::Editing { last_error: None }
        }
        (
            EditSessionState::Editing { .. },
            EditSessionEvent::Submitted {
                start_local,
                end_local,
            },
        ) => EditSessionState::Validating {
            start_local,
            end_local,
        },
        (EditSessionState::Editing { .. }, EditSessionEvent::Cancelled) => {
            EditSessionState::Viewing { accepted: None }
        }
        (EditSessionState::Validating { .. }, EditSessionEvent::ValidationPassed(proposal)) => {
            EditSessionState::Viewing {
                accepted: Some(proposal),
            }
        }
        (EditSessionState::Validating { .. }, EditSessionEvent::ValidationFailed(error)) => {
            EditSessionState::Editing {
                last_error: Some(error),
            }
        }
        (state, _) => state,
    }
}
