//! Intents for the credential form.

use crate::ui::mvi::Intent;

use super::error::FlowError;

#[derive(Debug, Clone)]
pub enum CredentialIntent {
    PasswordChanged(String),
    ConfirmPasswordChanged(String),

    /// User submitted the form. Runs the local match check.
    SubmitRequested,

    /// Account service accepted the request.
    ServiceSucceeded,

    /// Account service failed or rejected the request.
    ServiceFailed(FlowError),
}

impl Intent for CredentialIntent {}
