//! Intents for the mutation flow.

use crate::ui::mvi::Intent;

use super::state::FlowKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowIntent {
    /// Ask the user before deactivating a record.
    ShowInactivateConfirmation { title: String, description: String },

    /// Ask the user before reactivating a record.
    ShowReactivateConfirmation { title: String, description: String },

    /// The caller began the asynchronous mutation.
    Start { kind: FlowKind, message: String },

    /// The mutation resolved successfully.
    Complete { kind: FlowKind, message: String },

    /// Error or cancellation: drop every dialog.
    HideAll,

    /// The user acknowledged the success dialog.
    SuccessConfirmed,
}

impl Intent for FlowIntent {}
