//! Workflow domain types for report approval.
//!
//! This module defines the report kinds sharing the approval workflow,
//! their status, and the actions that move a report between statuses.

use chrono::{DateTime, Utc};
use erpvn_shared::types::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Report kinds that go through approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Employee daily work report.
    DailyReport,
    /// Contract performance report.
    ContractPerformance,
    /// Information receipt form.
    InformationReceipt,
}

impl ReportKind {
    /// Human-readable label used in log events.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::DailyReport => "Report",
            Self::ContractPerformance => "Contract Performance Report",
            Self::InformationReceipt => "Information Receipt Form",
        }
    }

    /// Returns true if approved records of this kind are locked for non-managers.
    #[must_use]
    pub fn locks_when_approved(&self) -> bool {
        matches!(self, Self::ContractPerformance | Self::InformationReceipt)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Report status in the approval workflow.
///
/// The valid transitions are:
/// - Draft → Submitted (submit)
/// - Submitted → Approved (approve)
/// - Submitted → Rejected (reject)
/// - any → Draft (reset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Being written; may be edited freely.
    #[default]
    Draft,
    /// Waiting for a manager's decision.
    Submitted,
    /// Accepted by a manager.
    Approved,
    /// Sent back with a reason.
    Rejected,
}

impl ReportStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workflow action representing a state transition with audit data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    /// Submit a draft for approval.
    Submit {
        /// The new status after submission.
        new_status: ReportStatus,
        /// The user who submitted.
        submitted_by: UserId,
        /// When the report was submitted.
        submitted_at: DateTime<Utc>,
    },
    /// Approve a submitted report.
    Approve {
        /// The new status after approval.
        new_status: ReportStatus,
        /// The approving manager.
        approved_by: UserId,
        /// When the report was approved.
        approved_at: DateTime<Utc>,
    },
    /// Reject a submitted report.
    Reject {
        /// The new status after rejection.
        new_status: ReportStatus,
        /// Reason entered in the rejection wizard.
        rejection_reason: String,
    },
    /// Return a report to draft, clearing the decision.
    ResetToDraft {
        /// Always Draft.
        new_status: ReportStatus,
    },
}

impl WorkflowAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> ReportStatus {
        match self {
            Self::Submit { new_status, .. }
            | Self::Approve { new_status, .. }
            | Self::Reject { new_status, .. }
            | Self::ResetToDraft { new_status } => *new_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(ReportStatus::Draft.as_str(), "draft");
        assert_eq!(ReportStatus::Submitted.as_str(), "submitted");
        assert_eq!(ReportStatus::Approved.as_str(), "approved");
        assert_eq!(ReportStatus::Rejected.as_str(), "rejected");
    }

    #[test]
    fn test_status_default_is_draft() {
        assert_eq!(ReportStatus::default(), ReportStatus::Draft);
    }

    #[test]
    fn test_kind_labels_and_locking() {
        assert_eq!(ReportKind::DailyReport.to_string(), "Report");
        assert!(!ReportKind::DailyReport.locks_when_approved());
        assert!(ReportKind::ContractPerformance.locks_when_approved());
        assert!(ReportKind::InformationReceipt.locks_when_approved());
    }
}
