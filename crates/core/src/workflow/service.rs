//! Workflow service for report state transitions.
//!
//! This module implements the state machine shared by daily reports,
//! contract performance reports, and information receipt forms.

use chrono::Utc;
use erpvn_shared::types::UserId;

use crate::workflow::error::WorkflowError;
use crate::workflow::types::{ReportKind, ReportStatus, WorkflowAction};

/// Stateless service for managing report workflow transitions.
///
/// All methods are associated functions that validate a transition and
/// return the `WorkflowAction` carrying its audit data.
pub struct WorkflowService;

impl WorkflowService {
    /// Submit a draft report for approval.
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Submit)` if the transition is valid
    /// * `Err(WorkflowError::InvalidTransition)` if not in Draft status
    pub fn submit(
        current_status: ReportStatus,
        submitted_by: UserId,
    ) -> Result<WorkflowAction, WorkflowError> {
        let new_status = Self::transition(current_status, ReportStatus::Submitted)?;
        Ok(WorkflowAction::Submit {
            new_status,
            submitted_by,
            submitted_at: Utc::now(),
        })
    }

    /// Approve a submitted report.
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Approve)` if the transition is valid
    /// * `Err(WorkflowError::InvalidTransition)` if not in Submitted status
    pub fn approve(
        current_status: ReportStatus,
        approved_by: UserId,
    ) -> Result<WorkflowAction, WorkflowError> {
        let new_status = Self::transition(current_status, ReportStatus::Approved)?;
        Ok(WorkflowAction::Approve {
            new_status,
            approved_by,
            approved_at: Utc::now(),
        })
    }

    /// Reject a submitted report with the reason from the rejection wizard.
    ///
    /// # Returns
    /// * `Ok(WorkflowAction::Reject)` if the transition is valid
    /// * `Err(WorkflowError::InvalidTransition)` if not in Submitted status
    /// * `Err(WorkflowError::RejectionReasonRequired)` if reason is blank
    pub fn reject(
        current_status: ReportStatus,
        rejection_reason: String,
    ) -> Result<WorkflowAction, WorkflowError> {
        let new_status = Self::transition(current_status, ReportStatus::Rejected)?;
        if rejection_reason.trim().is_empty() {
            return Err(WorkflowError::RejectionReasonRequired);
        }

        Ok(WorkflowAction::Reject {
            new_status,
            rejection_reason,
        })
    }

    /// Return a report to draft from any status.
    #[must_use]
    pub fn reset_to_draft(_current_status: ReportStatus) -> WorkflowAction {
        WorkflowAction::ResetToDraft {
            new_status: ReportStatus::Draft,
        }
    }

    /// Check that a record may be edited.
    ///
    /// Approved contract performance reports and information receipt forms
    /// are read-only except for managers.
    pub fn ensure_editable(
        kind: ReportKind,
        current_status: ReportStatus,
        is_manager: bool,
    ) -> Result<(), WorkflowError> {
        if current_status == ReportStatus::Approved && kind.locks_when_approved() && !is_manager {
            return Err(WorkflowError::ApprovedReportLocked { kind });
        }
        Ok(())
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Draft → Submitted (submit)
    /// - Submitted → Approved (approve)
    /// - Submitted → Rejected (reject)
    /// - any → Draft (reset)
    #[must_use]
    pub fn is_valid_transition(from: ReportStatus, to: ReportStatus) -> bool {
        matches!(
            (from, to),
            (ReportStatus::Draft, ReportStatus::Submitted)
                | (
                    ReportStatus::Submitted,
                    ReportStatus::Approved | ReportStatus::Rejected
                )
                | (_, ReportStatus::Draft)
        )
    }

    fn transition(from: ReportStatus, to: ReportStatus) -> Result<ReportStatus, WorkflowError> {
        if Self::is_valid_transition(from, to) {
            Ok(to)
        } else {
            Err(WorkflowError::InvalidTransition { from, to })
        }
    }
}
