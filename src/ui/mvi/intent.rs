//! Marker trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user gestures (toggle a column, click refresh) or
/// notifications from the owning page (a mutation started or resolved).
/// Reducers consume them to produce the next state.
pub trait Intent: Send + 'static {}
