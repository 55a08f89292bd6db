//! Reducer for the mutation flow.

use thiserror::Error;

use crate::ui::mvi::Reducer;

use super::intent::FlowIntent;
use super::state::{FlowKind, MutationFlowState};

/// Why a transition was not applied. All of these are caller bugs; the
/// state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowRejection {
    #[error("confirmation requested while {state}")]
    NotIdle { state: &'static str },

    #[error("{requested} flow started while {active} is processing")]
    Busy {
        active: FlowKind,
        requested: FlowKind,
    },

    #[error("{kind} completed while {state}")]
    NotProcessing {
        kind: FlowKind,
        state: &'static str,
    },

    #[error("{completed} completed while {active} is processing")]
    KindMismatch {
        active: FlowKind,
        completed: FlowKind,
    },

    #[error("success acknowledged while {state}")]
    NotSucceeded { state: &'static str },
}

pub struct FlowReducer;

impl FlowReducer {
    /// Whether `intent` is a legal transition out of `state`.
    ///
    /// Starting a flow while a different kind is processing is rejected
    /// rather than overwritten; restarting the same kind is accepted and
    /// leaves the state as is.
    pub fn admits(state: &MutationFlowState, intent: &FlowIntent) -> Result<(), FlowRejection> {
        match intent {
            FlowIntent::ShowInactivateConfirmation { .. }
            | FlowIntent::ShowReactivateConfirmation { .. } => {
                if state.is_idle() {
                    Ok(())
                } else {
                    Err(FlowRejection::NotIdle { state: state.name() })
                }
            }
            FlowIntent::Start { kind, .. } => match state {
                MutationFlowState::Processing { kind: active, .. } if active != kind => {
                    Err(FlowRejection::Busy {
                        active: *active,
                        requested: *kind,
                    })
                }
                _ => Ok(()),
            },
            FlowIntent::Complete { kind, .. } => match state {
                MutationFlowState::Processing { kind: active, .. } if active == kind => Ok(()),
                MutationFlowState::Processing { kind: active, .. } => {
                    Err(FlowRejection::KindMismatch {
                        active: *active,
                        completed: *kind,
                    })
                }
                other => Err(FlowRejection::NotProcessing {
                    kind: *kind,
                    state: other.name(),
                }),
            },
            FlowIntent::HideAll => Ok(()),
            FlowIntent::SuccessConfirmed => {
                if state.is_success() {
                    Ok(())
                } else {
                    Err(FlowRejection::NotSucceeded { state: state.name() })
                }
            }
        }
    }
}

impl Reducer for FlowReducer {
    type State = MutationFlowState;
    type Intent = FlowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if Self::admits(&state, &intent).is_err() {
            return state;
        }
        match intent {
            FlowIntent::ShowInactivateConfirmation { title, description } => {
                MutationFlowState::ConfirmingInactivate { title, description }
            }
            FlowIntent::ShowReactivateConfirmation { title, description } => {
                MutationFlowState::ConfirmingReactivate { title, description }
            }
            FlowIntent::Start { kind, message } => match state {
                // Same kind already running: keep the original message.
                MutationFlowState::Processing { .. } => state,
                _ => MutationFlowState::Processing { kind, message },
            },
            FlowIntent::Complete { kind, message } => MutationFlowState::Success { kind, message },
            FlowIntent::HideAll | FlowIntent::SuccessConfirmed => MutationFlowState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(kind: FlowKind) -> FlowIntent {
        FlowIntent::Start {
            kind,
            message: format!("{kind}..."),
        }
    }

    fn complete(kind: FlowKind) -> FlowIntent {
        FlowIntent::Complete {
            kind,
            message: format!("{kind} done"),
        }
    }

    fn confirm_inactivate() -> FlowIntent {
        FlowIntent::ShowInactivateConfirmation {
            title: "Deactivate".into(),
            description: "Are you sure?".into(),
        }
    }

    #[test]
    fn confirmation_only_from_idle() {
        let state = FlowReducer::reduce(MutationFlowState::Idle, confirm_inactivate());
        assert!(state.is_confirming());

        let processing = FlowReducer::reduce(MutationFlowState::Idle, start(FlowKind::Edit));
        assert_eq!(
            FlowReducer::admits(&processing, &confirm_inactivate()),
            Err(FlowRejection::NotIdle { state: "processing" })
        );
        assert_eq!(FlowReducer::reduce(processing.clone(), confirm_inactivate()), processing);
    }

    #[test]
    fn start_from_confirmation_moves_to_processing() {
        let state = FlowReducer::reduce(MutationFlowState::Idle, confirm_inactivate());
        let state = FlowReducer::reduce(state, start(FlowKind::Inactivate));
        assert_eq!(state.kind(), Some(FlowKind::Inactivate));
        assert!(state.is_processing());
    }

    #[test]
    fn start_of_other_kind_while_processing_is_rejected() {
        let state = FlowReducer::reduce(MutationFlowState::Idle, start(FlowKind::Inactivate));
        let next = FlowReducer::reduce(state.clone(), start(FlowKind::Edit));
        assert_eq!(next, state);
    }

    #[test]
    fn restart_of_same_kind_keeps_message() {
        let state = FlowReducer::reduce(MutationFlowState::Idle, start(FlowKind::Create));
        let next = FlowReducer::reduce(
            state.clone(),
            FlowIntent::Start {
                kind: FlowKind::Create,
                message: "other".into(),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn complete_requires_matching_kind() {
        let state = FlowReducer::reduce(MutationFlowState::Idle, start(FlowKind::Edit));
        assert_eq!(
            FlowReducer::admits(&state, &complete(FlowKind::Create)),
            Err(FlowRejection::KindMismatch {
                active: FlowKind::Edit,
                completed: FlowKind::Create,
            })
        );
        let done = FlowReducer::reduce(state, complete(FlowKind::Edit));
        assert!(done.is_success());
    }

    #[test]
    fn complete_from_idle_is_ignored() {
        let state = FlowReducer::reduce(MutationFlowState::Idle, complete(FlowKind::Edit));
        assert!(state.is_idle());
    }

    #[test]
    fn hide_all_from_anywhere_returns_to_idle() {
        let state = FlowReducer::reduce(MutationFlowState::Idle, start(FlowKind::Reactivate));
        assert!(FlowReducer::reduce(state, FlowIntent::HideAll).is_idle());
    }

    #[test]
    fn success_confirm_only_from_success() {
        let state = FlowReducer::reduce(MutationFlowState::Idle, confirm_inactivate());
        let same = FlowReducer::reduce(state.clone(), FlowIntent::SuccessConfirmed);
        assert_eq!(same, state);
    }
}
