use crate::ui::mvi::Reducer;

use super::error::FlowError;
use super::intent::CredentialIntent;
use super::state::{CredentialState, FlowStatus};

/// State transitions of the credential form.
///
/// ```text
/// Idle ──submit──→ Submitting ──ok──→ Succeeded
///  │                   │
///  └─mismatch─→ Failed ←──error──┘
///                 │
///                 └──submit──→ Submitting
/// ```
pub struct CredentialReducer;

impl Reducer for CredentialReducer {
    type State = CredentialState;
    type Intent = CredentialIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CredentialIntent::PasswordChanged(_) | CredentialIntent::ConfirmPasswordChanged(_)
                if state.fields_disabled() =>
            {
                state
            }

            CredentialIntent::PasswordChanged(password) => {
                let mut state = state;
                state.form.password = password;
                state
            }

            CredentialIntent::ConfirmPasswordChanged(confirm_password) => {
                let mut state = state;
                state.form.confirm_password = confirm_password;
                state
            }

            CredentialIntent::SubmitRequested if !state.can_submit() => state,

            CredentialIntent::SubmitRequested => {
                let status = if state.form.passwords_match() {
                    FlowStatus::Submitting
                } else {
                    FlowStatus::Failed {
                        errors: FlowError::PasswordMismatch.into_form_errors(),
                    }
                };
                CredentialState { status, ..state }
            }

            CredentialIntent::ServiceSucceeded if state.is_submitting() => CredentialState {
                status: FlowStatus::Succeeded,
                ..state
            },

            CredentialIntent::ServiceFailed(error) if state.is_submitting() => CredentialState {
                status: FlowStatus::Failed {
                    errors: error.into_form_errors(),
                },
                ..state
            },

            // A response without a request in flight has nothing to update.
            CredentialIntent::ServiceSucceeded | CredentialIntent::ServiceFailed(_) => state,
        }
    }
}
