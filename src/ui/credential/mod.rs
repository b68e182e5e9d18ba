//! Password change / reset form.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Mode, form fields and request status
//! - `intent.rs` - User input and service responses
//! - `reducer.rs` - State transitions
//! - `flow.rs` - Async driver talking to the account service
//! - `error.rs` - Failure kinds of a submit attempt

mod error;
mod flow;
mod intent;
mod reducer;
mod state;

pub use error::{FlowError, PASSWORD_MISMATCH};
pub use flow::{CredentialFlow, SubmitOutcome};
pub use intent::CredentialIntent;
pub use reducer::CredentialReducer;
pub use state::{CredentialForm, CredentialState, FlowMode, FlowStatus};
