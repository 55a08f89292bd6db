//! Entity mutation flow: confirm → process → succeed.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `MutationFlowState` (Idle, Confirming*, Processing, Success)
//! - `intent.rs` - caller notifications and user acknowledgements
//! - `reducer.rs` - transitions and the rules that reject caller bugs
//! - `coordinator.rs` - `MutationFlow`, the object pages call into
//! - `modal.rs` - dialog precedence (Success > Processing > Confirmation)
//! - `messages.rs` - per-flow dialog texts

mod coordinator;
mod intent;
mod messages;
mod modal;
mod reducer;
mod state;

pub use coordinator::{FlowTicket, MutationFlow, Transition};
pub use intent::FlowIntent;
pub use messages::FlowMessages;
pub use modal::{ActiveModal, Confirmation, ConfirmationKind, ModalFlags, ModalSet};
pub use reducer::{FlowReducer, FlowRejection};
pub use state::{FlowKind, MutationFlowState};
