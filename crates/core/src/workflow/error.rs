//! Workflow error types for report approval.

use erpvn_shared::AppError;
use thiserror::Error;

use crate::workflow::types::{ReportKind, ReportStatus};

/// Errors that can occur during workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ReportStatus,
        /// The attempted target status.
        to: ReportStatus,
    },

    /// Rejection reason is required but not provided.
    #[error("Rejection reason is required")]
    RejectionReasonRequired,

    /// Non-manager tried to edit an approved record.
    #[error("Cannot edit approved {kind}; only managers can modify approved records")]
    ApprovedReportLocked {
        /// Kind of the locked record.
        kind: ReportKind,
    },
}

impl WorkflowError {
    /// Returns the HTTP-style status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } | Self::RejectionReasonRequired => 400,
            Self::ApprovedReportLocked { .. } => 403,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::RejectionReasonRequired => "REJECTION_REASON_REQUIRED",
            Self::ApprovedReportLocked { .. } => "APPROVED_REPORT_LOCKED",
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::ApprovedReportLocked { .. } => Self::Forbidden(err.to_string()),
            WorkflowError::InvalidTransition { .. } | WorkflowError::RejectionReasonRequired => {
                Self::BusinessRule(err.to_string())
            }
        }
    }
}
