//! Session-based access gating for account pages.
//!
//! The guard is a pure predicate over the current session status. It is
//! evaluated before a page's content is entered and answers either
//! "render" or "redirect to `url`".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether the current visitor is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authenticated => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authenticated" => Ok(Self::Authenticated),
            "unauthenticated" => Ok(Self::Unauthenticated),
            other => Err(format!("Unknown auth status '{}'", other)),
        }
    }
}

/// Outcome of evaluating an [`AuthGuard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "url", rename_all = "lowercase")]
pub enum GuardDecision {
    Render,
    Redirect(String),
}

/// Access rule for a page: who may see it and where everyone else goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGuard {
    pub allowed_auth_status: AuthStatus,
    pub redirect_url: String,
}

impl AuthGuard {
    pub fn new(allowed_auth_status: AuthStatus, redirect_url: impl Into<String>) -> Self {
        Self {
            allowed_auth_status,
            redirect_url: redirect_url.into(),
        }
    }

    pub fn evaluate(&self, session: AuthStatus) -> GuardDecision {
        if session == self.allowed_auth_status {
            GuardDecision::Render
        } else {
            tracing::debug!(
                allowed = %self.allowed_auth_status,
                session = %session,
                redirect = %self.redirect_url,
                "auth guard redirect"
            );
            GuardDecision::Redirect(self.redirect_url.clone())
        }
    }
}
