//! Why a credential submit attempt did not go through.

use thiserror::Error;

use crate::account::{AccountFault, FormError};

/// Message shown when the two password fields differ.
pub const PASSWORD_MISMATCH: &str = "Passwords don't match";

/// Failure of one submit attempt.
///
/// All kinds end up as [`FormError`]s for display. The distinction only
/// matters for sequencing: a mismatch never reaches the account service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowError {
    /// Local check failed before any service call.
    #[error("Passwords don't match")]
    PasswordMismatch,

    /// The service call itself failed.
    #[error(transparent)]
    Service(#[from] AccountFault),

    /// The service answered but rejected the request.
    #[error("Account service reported {} error(s)", .0.len())]
    Application(Vec<FormError>),
}

impl FlowError {
    pub fn into_form_errors(self) -> Vec<FormError> {
        match self {
            FlowError::PasswordMismatch => vec![FormError::new(PASSWORD_MISMATCH)],
            FlowError::Service(fault) => vec![FormError::new(fault.to_string())],
            FlowError::Application(errors) => errors,
        }
    }
}
