//! Marker trait for view state.

/// Marker trait for view state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and default to their resting variant (`Idle`, all columns visible).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
