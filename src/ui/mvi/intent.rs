//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing, selecting a sort order, submitting a form)
/// - System events (account service responses)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
