//! Report record and its workflow operations.

use chrono::{DateTime, NaiveDate, Utc};
use erpvn_shared::types::{ReportId, UserId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::report::error::ReportError;
use crate::report::naming::{self, NEW_NAME};
use crate::report::service::ReportService;
use crate::workflow::{ReportKind, ReportStatus, WorkflowAction, WorkflowError, WorkflowService};

/// A daily report, contract performance report, or information receipt form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Record identifier.
    pub id: ReportId,
    /// Which report model this is.
    pub kind: ReportKind,
    /// Report name; "New" until one is built.
    pub name: String,
    /// Day the report covers.
    pub date: NaiveDate,
    /// Reporting employee's name.
    pub employee: Option<String>,
    /// Project name.
    pub project: Option<String>,
    /// Workflow status.
    pub status: ReportStatus,
    /// Manager who approved.
    pub approved_by: Option<UserId>,
    /// When the report was approved.
    pub approved_at: Option<DateTime<Utc>>,
    /// Reason from the rejection wizard.
    pub rejection_reason: Option<String>,
}

impl Report {
    /// Creates a draft named after its employee, project and date.
    ///
    /// # Errors
    /// `ReportError::FutureDate` if `date` is after `today`.
    pub fn new(
        kind: ReportKind,
        date: NaiveDate,
        today: NaiveDate,
        employee: Option<String>,
        project: Option<String>,
    ) -> Result<Self, ReportError> {
        ReportService::check_report_date(date, today)?;

        let name = naming::build_default_name(employee.as_deref(), project.as_deref(), Some(date));
        let report = Self {
            id: ReportId::new(),
            kind,
            name,
            date,
            employee,
            project,
            status: ReportStatus::Draft,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
        };
        info!(report_id = %report.id, kind = %kind, "{kind} created");
        Ok(report)
    }

    /// Name shown in lists.
    #[must_use]
    pub fn display_name(&self) -> String {
        naming::display_name(
            &self.name,
            self.employee.as_deref(),
            self.project.as_deref(),
            self.date,
        )
    }

    /// Rebuilds the name after employee, project or date changed.
    ///
    /// Only drafts are renamed, and the name is kept when no part is known.
    pub fn refresh_name(&mut self) {
        if self.status != ReportStatus::Draft {
            return;
        }
        let name = naming::build_default_name(
            self.employee.as_deref(),
            self.project.as_deref(),
            Some(self.date),
        );
        if name != NEW_NAME {
            self.name = name;
        }
    }

    /// Folds a validated action into the record.
    pub fn apply(&mut self, action: WorkflowAction) {
        self.status = action.new_status();
        match action {
            WorkflowAction::Submit { .. } => {}
            WorkflowAction::Approve {
                approved_by,
                approved_at,
                ..
            } => {
                self.approved_by = Some(approved_by);
                self.approved_at = Some(approved_at);
            }
            WorkflowAction::Reject {
                rejection_reason, ..
            } => {
                self.rejection_reason = Some(rejection_reason);
            }
            WorkflowAction::ResetToDraft { .. } => {
                self.approved_by = None;
                self.approved_at = None;
                self.rejection_reason = None;
            }
        }
    }

    /// Submits the report for approval.
    pub fn submit(&mut self, submitted_by: UserId) -> Result<(), WorkflowError> {
        let action = WorkflowService::submit(self.status, submitted_by)?;
        self.apply(action);
        info!(report_id = %self.id, user_id = %submitted_by, "{} submitted for approval", self.kind);
        Ok(())
    }

    /// Approves the report.
    pub fn approve(&mut self, approved_by: UserId) -> Result<(), WorkflowError> {
        let action = WorkflowService::approve(self.status, approved_by)?;
        self.apply(action);
        info!(report_id = %self.id, user_id = %approved_by, "{} approved", self.kind);
        Ok(())
    }

    /// Rejects the report with the reason entered in the rejection wizard.
    pub fn reject(&mut self, rejection_reason: impl Into<String>) -> Result<(), WorkflowError> {
        let action = WorkflowService::reject(self.status, rejection_reason.into())?;
        self.apply(action);
        info!(
            report_id = %self.id,
            reason = self.rejection_reason.as_deref().unwrap_or_default(),
            "{} rejected",
            self.kind
        );
        Ok(())
    }

    /// Returns the report to draft.
    pub fn reset_to_draft(&mut self) {
        let action = WorkflowService::reset_to_draft(self.status);
        self.apply(action);
        info!(report_id = %self.id, "{} reset to draft", self.kind);
    }

    /// Checks that `is_manager` may edit the report in its current status.
    pub fn ensure_editable(&self, is_manager: bool) -> Result<(), WorkflowError> {
        WorkflowService::ensure_editable(self.kind, self.status, is_manager)
    }
}
