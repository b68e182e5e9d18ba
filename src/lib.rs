//! View-state and form-flow logic for storefront page sections.
//!
//! - [`ui::grid`]: sortable, paginated product grid
//! - [`ui::credential`]: password change / reset form
//!
//! Rendering, networking and routing are left to the host application,
//! which plugs in through the [`account::AccountService`],
//! [`analytics::ImpressionTracker`] and [`router::Router`] traits.

pub mod account;
pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod router;
pub mod ui;
