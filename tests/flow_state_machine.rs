use admin_grid::flow::{
    ActiveModal, Confirmation, ConfirmationKind, FlowKind, FlowMessages, FlowRejection,
    ModalSet, MutationFlow, MutationFlowState, Transition,
};

fn flow() -> MutationFlow {
    MutationFlow::new("agency", FlowMessages::default())
}

#[test]
fn inactivate_flow_runs_confirm_process_succeed() {
    let mut flow = flow();
    assert!(flow.show_inactivate_confirmation(None, None).is_applied());
    assert_eq!(
        flow.active_modal(),
        Some(ActiveModal::Confirmation(Confirmation {
            kind: ConfirmationKind::Inactivate,
            title: "Deactivate agency?".into(),
            description:
                "The agency will no longer be offered for new records. You can reactivate it later."
                    .into(),
        }))
    );

    assert!(flow.start_inactivate_flow().is_applied());
    assert_eq!(
        flow.active_modal(),
        Some(ActiveModal::Processing {
            message: "Deactivating agency...".into()
        })
    );

    assert!(flow.complete_inactivate_flow().is_applied());
    assert_eq!(
        flow.active_modal(),
        Some(ActiveModal::Success {
            message: "The agency was deactivated.".into()
        })
    );

    assert!(flow.on_success_confirm().is_applied());
    assert!(flow.state().is_idle());
    assert_eq!(flow.active_modal(), None);
}

#[test]
fn create_flow_skips_confirmation() {
    let mut flow = flow();
    assert!(flow.start_create_flow().is_applied());
    assert_eq!(flow.state().kind(), Some(FlowKind::Create));
    assert!(flow.complete_create_flow().is_applied());
    assert!(flow.state().is_success());
}

#[test]
fn at_most_one_dialog_is_flagged_in_every_state() {
    let mut flow = flow();
    assert!(flow.flags().none());

    flow.show_reactivate_confirmation(Some("Bring it back?".into()), None);
    assert_eq!(flow.flags().count(), 1);
    assert!(flow.flags().confirmation);

    flow.start_reactivate_flow();
    assert_eq!(flow.flags().count(), 1);
    assert!(flow.flags().processing);

    flow.complete_reactivate_flow();
    assert_eq!(flow.flags().count(), 1);
    assert!(flow.flags().success);
}

#[test]
fn custom_confirmation_text_wins() {
    let mut flow = flow();
    flow.show_reactivate_confirmation(Some("Bring it back?".into()), Some("Sure?".into()));
    let Some(ActiveModal::Confirmation(confirmation)) = flow.active_modal() else {
        panic!("expected a confirmation");
    };
    assert_eq!(confirmation.title, "Bring it back?");
    assert_eq!(confirmation.description, "Sure?");
}

#[test]
fn success_outranks_processing_outranks_confirmation() {
    let confirmation = Confirmation {
        kind: ConfirmationKind::Inactivate,
        title: "t".into(),
        description: "d".into(),
    };
    let all = ModalSet {
        confirmation: Some(confirmation.clone()),
        processing: Some("working".into()),
        success: Some("done".into()),
    };
    assert_eq!(
        all.resolve(),
        Some(ActiveModal::Success {
            message: "done".into()
        })
    );

    let no_success = ModalSet {
        confirmation: Some(confirmation.clone()),
        processing: Some("working".into()),
        success: None,
    };
    assert_eq!(
        no_success.resolve(),
        Some(ActiveModal::Processing {
            message: "working".into()
        })
    );

    let only_confirmation = ModalSet {
        confirmation: Some(confirmation.clone()),
        ..ModalSet::default()
    };
    assert_eq!(
        only_confirmation.resolve(),
        Some(ActiveModal::Confirmation(confirmation))
    );
    assert_eq!(ModalSet::default().resolve(), None);
}

#[test]
fn different_kind_while_processing_is_rejected() {
    let mut flow = flow();
    flow.start_edit_flow();
    let transition = flow.start_create_flow();
    assert!(matches!(
        transition,
        Transition::Ignored(FlowRejection::Busy { .. })
    ));
    assert_eq!(flow.state().kind(), Some(FlowKind::Edit));
}

#[test]
fn same_kind_restart_keeps_ticket() {
    let mut flow = flow();
    flow.start_edit_flow();
    let ticket = flow.ticket();
    assert!(flow.start_edit_flow().is_applied());
    assert_eq!(flow.ticket(), ticket);
}

#[test]
fn completing_other_kind_is_ignored() {
    let mut flow = flow();
    flow.start_edit_flow();
    assert!(!flow.complete_create_flow().is_applied());
    assert!(flow.state().is_processing());
}

#[test]
fn complete_without_start_is_ignored() {
    let mut flow = flow();
    assert!(!flow.complete_edit_flow().is_applied());
    assert_eq!(flow.state(), &MutationFlowState::Idle);
}

#[test]
fn hide_all_from_any_state_returns_to_idle() {
    let mut flow = flow();
    flow.show_inactivate_confirmation(None, None);
    flow.hide_all_modals();
    assert!(flow.state().is_idle());

    flow.start_create_flow();
    flow.hide_all_modals();
    assert!(flow.state().is_idle());

    flow.start_create_flow();
    flow.complete_create_flow();
    flow.hide_all_modals();
    assert!(flow.state().is_idle());
}

#[test]
fn stale_ticket_never_resurrects_success() {
    let mut flow = flow();
    flow.start_create_flow();
    let stale = flow.ticket();
    flow.hide_all_modals();

    flow.start_create_flow();
    let current = flow.ticket();
    assert_ne!(stale, current);

    assert!(!flow.complete_if_current(stale, FlowKind::Create).is_applied());
    assert!(flow.state().is_processing());
    assert!(flow.complete_if_current(current, FlowKind::Create).is_applied());
    assert!(flow.state().is_success());
}

#[test]
fn confirmation_only_from_idle() {
    let mut flow = flow();
    flow.start_create_flow();
    assert!(!flow.show_inactivate_confirmation(None, None).is_applied());
    assert!(flow.state().is_processing());
}
