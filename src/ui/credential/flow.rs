//! Driver that runs the credential form against the account service.
//!
//! [`CredentialFlow`] is a cloneable handle. The rendering layer keeps one
//! clone to read state and call [`CredentialFlow::teardown`]; a submit
//! running elsewhere holds another. Once torn down, a late service
//! response is dropped: no state change and no navigation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::account::{AccountService, FormError, ResetPassword, UpdateCustomer};
use crate::auth::AuthGuard;
use crate::config::RoutesConfig;
use crate::router::{NavigationIntent, RouteQuery};
use crate::ui::mvi::Reducer;

use super::error::FlowError;
use super::intent::CredentialIntent;
use super::reducer::CredentialReducer;
use super::state::{CredentialState, FlowMode, FlowStatus};

/// Result of one call to [`CredentialFlow::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit was not allowed in the current state. Nothing happened.
    Ineligible,
    /// The attempt failed; the errors are now shown on the form.
    Failed(Vec<FormError>),
    /// The password was updated. The caller should navigate.
    Succeeded(NavigationIntent),
    /// The flow was torn down; any result was dropped.
    Discarded,
}

#[derive(Clone)]
pub struct CredentialFlow {
    inner: Arc<FlowInner>,
}

struct FlowInner {
    mode: FlowMode,
    guard: AuthGuard,
    login_url: String,
    service: Arc<dyn AccountService>,
    state: Mutex<CredentialState>,
    live: AtomicBool,
}

impl CredentialFlow {
    pub fn new(mode: FlowMode, routes: &RoutesConfig, service: Arc<dyn AccountService>) -> Self {
        let guard = mode.guard(routes);
        Self {
            inner: Arc::new(FlowInner {
                mode,
                guard,
                login_url: routes.account_login_url.clone(),
                service,
                state: Mutex::new(CredentialState::default()),
                live: AtomicBool::new(true),
            }),
        }
    }

    /// Start a flow for the current route: Reset when it carries a reset
    /// token, Change otherwise.
    pub fn from_query(query: &RouteQuery, routes: &RoutesConfig, service: Arc<dyn AccountService>) -> Self {
        Self::new(FlowMode::from_query(query), routes, service)
    }

    pub fn mode(&self) -> &FlowMode {
        &self.inner.mode
    }

    pub fn heading(&self) -> &'static str {
        self.inner.mode.heading()
    }

    /// Access rule to evaluate before showing the form.
    pub fn guard(&self) -> &AuthGuard {
        &self.inner.guard
    }

    /// Snapshot of the current form state.
    pub fn state(&self) -> CredentialState {
        self.inner.state.lock().clone()
    }

    pub fn can_submit(&self) -> bool {
        self.inner.state.lock().can_submit()
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.dispatch(CredentialIntent::PasswordChanged(password.into()));
    }

    pub fn set_confirm_password(&self, confirm_password: impl Into<String>) {
        self.dispatch(CredentialIntent::ConfirmPasswordChanged(confirm_password.into()));
    }

    pub fn is_live(&self) -> bool {
        self.inner.live.load(Ordering::SeqCst)
    }

    /// Mark the flow as discarded. Pending and future results are ignored.
    pub fn teardown(&self) {
        let _state = self.inner.state.lock();
        if self.inner.live.swap(false, Ordering::SeqCst) {
            tracing::debug!(mode = self.mode_name(), "credential flow torn down");
        }
    }

    /// Submit the form.
    ///
    /// A password mismatch fails without contacting the account service.
    /// Otherwise the service is called once and its answer decides between
    /// `Succeeded` (with navigation to the sign-in page) and `Failed`.
    pub async fn submit(&self) -> SubmitOutcome {
        let password = {
            let mut state = self.inner.state.lock();
            if !self.is_live() || !state.can_submit() {
                return SubmitOutcome::Ineligible;
            }

            *state = CredentialReducer::reduce(state.clone(), CredentialIntent::SubmitRequested);
            match &state.status {
                FlowStatus::Submitting => state.form.password.clone(),
                FlowStatus::Failed { errors } => {
                    tracing::debug!(mode = self.mode_name(), "password confirmation mismatch");
                    return SubmitOutcome::Failed(errors.clone());
                }
                _ => return SubmitOutcome::Ineligible,
            }
        };

        tracing::info!(mode = self.mode_name(), "submitting credential update");
        let result = self.call_service(password).await;

        let mut state = self.inner.state.lock();
        if !self.is_live() {
            tracing::trace!(mode = self.mode_name(), "dropping credential result after teardown");
            return SubmitOutcome::Discarded;
        }

        let intent = match result {
            Ok(()) => CredentialIntent::ServiceSucceeded,
            Err(error) => {
                tracing::warn!(mode = self.mode_name(), error = %error, "credential update failed");
                CredentialIntent::ServiceFailed(error)
            }
        };
        *state = CredentialReducer::reduce(state.clone(), intent);

        match &state.status {
            FlowStatus::Succeeded => {
                tracing::info!(mode = self.mode_name(), "credential update succeeded");
                SubmitOutcome::Succeeded(NavigationIntent::push(self.inner.login_url.clone()))
            }
            FlowStatus::Failed { errors } => SubmitOutcome::Failed(errors.clone()),
            _ => SubmitOutcome::Discarded,
        }
    }

    fn dispatch(&self, intent: CredentialIntent) {
        let mut state = self.inner.state.lock();
        *state = CredentialReducer::reduce(state.clone(), intent);
    }

    async fn call_service(&self, password: String) -> Result<(), FlowError> {
        let service = &self.inner.service;
        let response = match &self.inner.mode {
            FlowMode::Reset { reset_url } => {
                service
                    .reset_password(ResetPassword {
                        reset_url: reset_url.clone(),
                        password,
                    })
                    .await?
            }
            FlowMode::Change => {
                service
                    .update_customer(UpdateCustomer {
                        new_password: password,
                    })
                    .await?
            }
        };

        match response.into_errors() {
            Some(errors) => Err(FlowError::Application(errors)),
            None => Ok(()),
        }
    }

    fn mode_name(&self) -> &'static str {
        if self.inner.mode.is_reset() {
            "reset"
        } else {
            "change"
        }
    }
}
