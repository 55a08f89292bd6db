//! State of one entity's mutation flow.

use std::fmt;

use crate::ui::mvi::UiState;

use super::modal::{Confirmation, ConfirmationKind, ModalSet};

/// Which mutation a flow performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Create,
    Edit,
    Inactivate,
    Reactivate,
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Inactivate => "inactivate",
            Self::Reactivate => "reactivate",
        })
    }
}

/// Confirm → process → succeed, one variant at a time.
///
/// Owned by the page that runs the mutation. Two concurrent mutations need
/// two instances.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationFlowState {
    #[default]
    Idle,

    ConfirmingInactivate {
        title: String,
        description: String,
    },

    ConfirmingReactivate {
        title: String,
        description: String,
    },

    /// The caller has started the asynchronous mutation.
    Processing { kind: FlowKind, message: String },

    /// The mutation resolved; waiting for the user to acknowledge.
    Success { kind: FlowKind, message: String },
}

impl UiState for MutationFlowState {}

impl MutationFlowState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_confirming(&self) -> bool {
        matches!(
            self,
            Self::ConfirmingInactivate { .. } | Self::ConfirmingReactivate { .. }
        )
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The flow kind in flight or just finished.
    pub fn kind(&self) -> Option<FlowKind> {
        match self {
            Self::Processing { kind, .. } | Self::Success { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Short name used in logs and rejection messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ConfirmingInactivate { .. } => "confirming-inactivate",
            Self::ConfirmingReactivate { .. } => "confirming-reactivate",
            Self::Processing { .. } => "processing",
            Self::Success { .. } => "success",
        }
    }

    /// The dialogs this state asks for.
    pub fn modals(&self) -> ModalSet {
        match self {
            Self::Idle => ModalSet::default(),
            Self::ConfirmingInactivate { title, description } => ModalSet {
                confirmation: Some(Confirmation {
                    kind: ConfirmationKind::Inactivate,
                    title: title.clone(),
                    description: description.clone(),
                }),
                ..ModalSet::default()
            },
            Self::ConfirmingReactivate { title, description } => ModalSet {
                confirmation: Some(Confirmation {
                    kind: ConfirmationKind::Reactivate,
                    title: title.clone(),
                    description: description.clone(),
                }),
                ..ModalSet::default()
            },
            Self::Processing { message, .. } => ModalSet {
                processing: Some(message.clone()),
                ..ModalSet::default()
            },
            Self::Success { message, .. } => ModalSet {
                success: Some(message.clone()),
                ..ModalSet::default()
            },
        }
    }
}
