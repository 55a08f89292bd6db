//! The flow object a page owns and calls into.

use tracing::{debug, warn};

use crate::ui::mvi::Reducer;

use super::intent::FlowIntent;
use super::messages::FlowMessages;
use super::modal::{ActiveModal, ModalFlags};
use super::reducer::{FlowReducer, FlowRejection};
use super::state::{FlowKind, MutationFlowState};

/// Identifies one start of a flow.
///
/// Asynchronous mutations carry the ticket that was current when they
/// began; a result whose ticket is no longer current (the user cancelled, or
/// a newer flow started) must be dropped instead of completing the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlowTicket(u64);

/// Outcome of a transition call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(FlowRejection),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Confirm → process → succeed coordinator for one entity screen.
///
/// Construct one per page. It has no asynchronous behavior: the page calls
/// `start_*` when its mutation begins, `complete_*` when it resolves and
/// [`hide_all_modals`](Self::hide_all_modals) when it fails.
#[derive(Debug, Clone)]
pub struct MutationFlow {
    state: MutationFlowState,
    messages: FlowMessages,
    entity: String,
    ticket: u64,
}

impl MutationFlow {
    pub fn new(entity: impl Into<String>, messages: FlowMessages) -> Self {
        Self {
            state: MutationFlowState::Idle,
            messages,
            entity: entity.into(),
            ticket: 0,
        }
    }

    pub fn state(&self) -> &MutationFlowState {
        &self.state
    }

    pub fn ticket(&self) -> FlowTicket {
        FlowTicket(self.ticket)
    }

    pub fn is_current(&self, ticket: FlowTicket) -> bool {
        ticket.0 == self.ticket
    }

    pub fn flags(&self) -> ModalFlags {
        self.state.modals().flags()
    }

    pub fn active_modal(&self) -> Option<ActiveModal> {
        self.state.modals().resolve()
    }

    /// Ask before deactivating. `None` falls back to the configured text.
    pub fn show_inactivate_confirmation(
        &mut self,
        title: Option<String>,
        description: Option<String>,
    ) -> Transition {
        let (default_title, default_description) =
            self.messages.inactivate_confirmation(&self.entity);
        self.dispatch(FlowIntent::ShowInactivateConfirmation {
            title: title.unwrap_or(default_title),
            description: description.unwrap_or(default_description),
        })
    }

    pub fn show_reactivate_confirmation(
        &mut self,
        title: Option<String>,
        description: Option<String>,
    ) -> Transition {
        let (default_title, default_description) =
            self.messages.reactivate_confirmation(&self.entity);
        self.dispatch(FlowIntent::ShowReactivateConfirmation {
            title: title.unwrap_or(default_title),
            description: description.unwrap_or(default_description),
        })
    }

    pub fn start_create_flow(&mut self) -> Transition {
        self.start(FlowKind::Create)
    }

    pub fn start_edit_flow(&mut self) -> Transition {
        self.start(FlowKind::Edit)
    }

    pub fn start_inactivate_flow(&mut self) -> Transition {
        self.start(FlowKind::Inactivate)
    }

    pub fn start_reactivate_flow(&mut self) -> Transition {
        self.start(FlowKind::Reactivate)
    }

    pub fn complete_create_flow(&mut self) -> Transition {
        self.complete(FlowKind::Create)
    }

    pub fn complete_edit_flow(&mut self) -> Transition {
        self.complete(FlowKind::Edit)
    }

    pub fn complete_inactivate_flow(&mut self) -> Transition {
        self.complete(FlowKind::Inactivate)
    }

    pub fn complete_reactivate_flow(&mut self) -> Transition {
        self.complete(FlowKind::Reactivate)
    }

    /// Complete `kind` only if `ticket` still identifies the running flow.
    pub fn complete_if_current(&mut self, ticket: FlowTicket, kind: FlowKind) -> Transition {
        if !self.is_current(ticket) {
            debug!(?ticket, current = self.ticket, %kind, "dropping stale mutation result");
            return Transition::Ignored(FlowRejection::NotProcessing {
                kind,
                state: "stale",
            });
        }
        self.complete(kind)
    }

    /// Back to idle from anywhere. Any mutation still in flight is orphaned:
    /// its ticket stops being current.
    pub fn hide_all_modals(&mut self) -> Transition {
        if !self.state.is_idle() {
            self.ticket += 1;
        }
        self.dispatch(FlowIntent::HideAll)
    }

    /// The user acknowledged the success dialog. When this returns
    /// `Applied` the page closes its form and clears its selection.
    pub fn on_success_confirm(&mut self) -> Transition {
        self.dispatch(FlowIntent::SuccessConfirmed)
    }

    fn start(&mut self, kind: FlowKind) -> Transition {
        let already_running = self.state.is_processing();
        let message = self.messages.processing(kind, &self.entity);
        let transition = self.dispatch(FlowIntent::Start { kind, message });
        if transition.is_applied() && !already_running {
            self.ticket += 1;
        }
        transition
    }

    fn complete(&mut self, kind: FlowKind) -> Transition {
        let message = self.messages.success(kind, &self.entity);
        self.dispatch(FlowIntent::Complete { kind, message })
    }

    fn dispatch(&mut self, intent: FlowIntent) -> Transition {
        if let Err(rejection) = FlowReducer::admits(&self.state, &intent) {
            warn!(entity = %self.entity, %rejection, "flow transition ignored");
            return Transition::Ignored(rejection);
        }
        let from = self.state.name();
        self.state = FlowReducer::reduce(std::mem::take(&mut self.state), intent);
        debug!(entity = %self.entity, from, to = self.state.name(), "flow transition");
        Transition::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> MutationFlow {
        MutationFlow::new("agency", FlowMessages::default())
    }

    #[test]
    fn confirmation_uses_default_text() {
        let mut flow = flow();
        assert!(flow.show_inactivate_confirmation(None, None).is_applied());
        match flow.active_modal() {
            Some(ActiveModal::Confirmation(c)) => assert_eq!(c.title, "Deactivate agency?"),
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn explicit_title_overrides_default() {
        let mut flow = flow();
        flow.show_reactivate_confirmation(Some("Bring back Sede?".into()), None);
        match flow.active_modal() {
            Some(ActiveModal::Confirmation(c)) => {
                assert_eq!(c.title, "Bring back Sede?");
                assert_eq!(c.description, "The agency will be available again.");
            }
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn hide_all_invalidates_running_ticket() {
        let mut flow = flow();
        flow.start_edit_flow();
        let ticket = flow.ticket();
        flow.hide_all_modals();
        assert!(!flow.is_current(ticket));
        assert!(!flow
            .complete_if_current(ticket, FlowKind::Edit)
            .is_applied());
        assert!(flow.state().is_idle());
    }

    #[test]
    fn restarting_same_kind_keeps_ticket() {
        let mut flow = flow();
        flow.start_create_flow();
        let ticket = flow.ticket();
        assert!(flow.start_create_flow().is_applied());
        assert!(flow.is_current(ticket));
    }

    #[test]
    fn success_message_names_entity() {
        let mut flow = flow();
        flow.start_create_flow();
        flow.complete_create_flow();
        assert_eq!(
            flow.active_modal(),
            Some(ActiveModal::Success {
                message: "The agency was created successfully.".into()
            })
        );
        assert!(flow.on_success_confirm().is_applied());
        assert!(flow.state().is_idle());
    }
}
