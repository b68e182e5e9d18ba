//! Router collaborator: current location and navigation intents.
//!
//! Core logic never navigates by itself. It produces a [`NavigationIntent`]
//! and the caller hands it to whatever implements [`Router`].

mod query;

use std::collections::BTreeMap;

use serde::Serialize;

pub use query::{RouteQuery, PAGE_PARAM, RESET_TOKEN_PARAM};

/// A described route change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Navigate to another page.
    Push { destination: String },
    /// Replace the query of the current path without a full page load.
    ShallowQuery {
        pathname: String,
        query: BTreeMap<String, String>,
        shallow: bool,
    },
}

impl NavigationIntent {
    pub fn push(destination: impl Into<String>) -> Self {
        Self::Push {
            destination: destination.into(),
        }
    }

    /// Shallow update that sets `page` on the current path.
    pub fn page(pathname: impl Into<String>, page: usize) -> Self {
        let mut query = BTreeMap::new();
        query.insert(PAGE_PARAM.to_string(), page.to_string());
        Self::ShallowQuery {
            pathname: pathname.into(),
            query,
            shallow: true,
        }
    }

    /// Destination path of this intent.
    pub fn pathname(&self) -> &str {
        match self {
            Self::Push { destination } => destination,
            Self::ShallowQuery { pathname, .. } => pathname,
        }
    }
}

/// Router provided by the rendering layer.
pub trait Router {
    /// Current path, without the query string.
    fn pathname(&self) -> &str;

    /// Current query parameters.
    fn query(&self) -> &RouteQuery;

    /// Carry out a navigation intent.
    fn push(&mut self, intent: NavigationIntent);
}
