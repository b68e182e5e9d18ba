//! Customer account service collaborator.
//!
//! Only the contract is defined here. Transport, serialization and
//! timeouts belong to whoever implements [`AccountService`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user-facing form error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormError {
    pub message: String,
}

impl FormError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Payload for changing the password of the signed-in customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub new_password: String,
}

/// Payload for resetting a password through a one-time token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetPassword {
    pub reset_url: String,
    pub password: String,
}

/// Successful service response.
///
/// `errors` carries domain-level rejections such as a weak password.
/// `None` and an empty list both mean the operation went through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountResponse {
    #[serde(default)]
    pub errors: Option<Vec<FormError>>,
}

impl AccountResponse {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn with_errors(errors: Vec<FormError>) -> Self {
        Self {
            errors: Some(errors),
        }
    }

    /// The reported errors, if there are any.
    pub fn into_errors(self) -> Option<Vec<FormError>> {
        self.errors.filter(|errors| !errors.is_empty())
    }
}

/// The service call itself failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountFault {
    #[error("{0}")]
    Request(String),

    #[error("Account service unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait AccountService: Send + Sync {
    async fn update_customer(&self, input: UpdateCustomer) -> Result<AccountResponse, AccountFault>;

    async fn reset_password(&self, input: ResetPassword) -> Result<AccountResponse, AccountFault>;
}
