//! State of the password change / reset form.

use crate::account::FormError;
use crate::auth::{AuthGuard, AuthStatus};
use crate::config::RoutesConfig;
use crate::router::RouteQuery;
use crate::ui::mvi::UiState;

/// Which credential operation the form performs. Fixed for the lifetime
/// of a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowMode {
    /// Signed-in customer changes their password.
    Change,
    /// Signed-out visitor sets a new password through a one-time token.
    Reset { reset_url: String },
}

impl FlowMode {
    /// Reset when the route carries a reset token, Change otherwise.
    pub fn from_query(query: &RouteQuery) -> Self {
        match query.reset_token() {
            Some(token) => FlowMode::Reset {
                reset_url: token.to_string(),
            },
            None => FlowMode::Change,
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, FlowMode::Reset { .. })
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FlowMode::Change => "Change password",
            FlowMode::Reset { .. } => "Reset password",
        }
    }

    /// Reset is for signed-out visitors only (others go to their account);
    /// Change is for signed-in customers only (others go to sign in).
    pub fn guard(&self, routes: &RoutesConfig) -> AuthGuard {
        match self {
            FlowMode::Change => {
                AuthGuard::new(AuthStatus::Authenticated, routes.account_login_url.clone())
            }
            FlowMode::Reset { .. } => {
                AuthGuard::new(AuthStatus::Unauthenticated, routes.account_url.clone())
            }
        }
    }
}

/// Field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialForm {
    pub password: String,
    pub confirm_password: String,
}

impl CredentialForm {
    pub fn new(password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.password.is_empty() && !self.confirm_password.is_empty()
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

/// Request lifecycle of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Last attempt failed. The form can be submitted again.
    Failed { errors: Vec<FormError> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialState {
    pub form: CredentialForm,
    pub status: FlowStatus,
}

impl UiState for CredentialState {}

impl CredentialState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FlowStatus::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self.status, FlowStatus::Succeeded)
    }

    /// Inputs are locked while a request is in flight.
    pub fn fields_disabled(&self) -> bool {
        self.is_submitting()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.is_succeeded() && self.form.is_complete()
    }

    pub fn errors(&self) -> &[FormError] {
        match &self.status {
            FlowStatus::Failed { errors } => errors.as_slice(),
            _ => &[],
        }
    }

    /// Inputs are marked invalid while errors are shown.
    pub fn is_invalid(&self) -> bool {
        !self.errors().is_empty()
    }
}
