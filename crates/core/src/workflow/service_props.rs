//! Property-based tests for WorkflowService.

use proptest::prelude::*;
use uuid::Uuid;

use crate::workflow::error::WorkflowError;
use crate::workflow::service::WorkflowService;
use crate::workflow::types::{ReportKind, ReportStatus, WorkflowAction};
use erpvn_shared::types::UserId;

/// Strategy for generating random ReportStatus values.
fn arb_status() -> impl Strategy<Value = ReportStatus> {
    prop_oneof![
        Just(ReportStatus::Draft),
        Just(ReportStatus::Submitted),
        Just(ReportStatus::Approved),
        Just(ReportStatus::Rejected),
    ]
}

/// Strategy for generating random ReportKind values.
fn arb_kind() -> impl Strategy<Value = ReportKind> {
    prop_oneof![
        Just(ReportKind::DailyReport),
        Just(ReportKind::ContractPerformance),
        Just(ReportKind::InformationReceipt),
    ]
}

/// Strategy for generating random user ids.
fn arb_user() -> impl Strategy<Value = UserId> {
    any::<u128>().prop_map(|n| UserId::from_uuid(Uuid::from_u128(n)))
}

/// Strategy for generating non-blank reasons.
fn arb_reason() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ]{0,99}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every successful action lands on a status the transition table allows.
    #[test]
    fn prop_actions_follow_transition_table(
        status in arb_status(),
        user in arb_user(),
        reason in arb_reason()
    ) {
        let attempts = [
            WorkflowService::submit(status, user),
            WorkflowService::approve(status, user),
            WorkflowService::reject(status, reason),
            Ok(WorkflowService::reset_to_draft(status)),
        ];
        for action in attempts.into_iter().flatten() {
            prop_assert!(WorkflowService::is_valid_transition(status, action.new_status()));
        }
    }

    /// Failed transitions report the current status as their origin.
    #[test]
    fn prop_invalid_transition_names_origin(status in arb_status(), user in arb_user()) {
        prop_assume!(status != ReportStatus::Submitted);
        match WorkflowService::approve(status, user) {
            Err(WorkflowError::InvalidTransition { from, to }) => {
                prop_assert_eq!(from, status);
                prop_assert_eq!(to, ReportStatus::Approved);
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    /// The rejection reason is carried unchanged.
    #[test]
    fn prop_reject_keeps_reason(reason in arb_reason()) {
        let action = WorkflowService::reject(ReportStatus::Submitted, reason.clone()).unwrap();
        prop_assert_eq!(
            action,
            WorkflowAction::Reject { new_status: ReportStatus::Rejected, rejection_reason: reason }
        );
    }

    /// Blank reasons never reject, whatever the status.
    #[test]
    fn prop_blank_reason_never_rejects(status in arb_status(), blanks in "[ \t]{0,10}") {
        prop_assert!(WorkflowService::reject(status, blanks).is_err());
    }

    /// Managers may always edit.
    #[test]
    fn prop_managers_always_edit(kind in arb_kind(), status in arb_status()) {
        prop_assert!(WorkflowService::ensure_editable(kind, status, true).is_ok());
    }
}
