//! Model-View-Intent primitives shared by the grid and the mutation flow.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Frame ──→ ratatui
//!    ↑                                          │
//!    └──────────────── key / resize ────────────┘
//! ```
//!
//! - **State**: value owned by one page instance, never global
//! - **Intent**: a user gesture or a caller notification
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
