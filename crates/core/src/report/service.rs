//! Report record rules: date checks, daily report planning, draft cleanup.

use std::collections::HashSet;

use chrono::{DateTime, Days, NaiveDate, Utc};
use erpvn_shared::types::ReportId;

use crate::report::error::ReportError;
use crate::report::types::Report;
use crate::workflow::ReportStatus;

/// Default age after which untouched drafts are removed.
pub const DEFAULT_DRAFT_RETENTION_DAYS: u32 = 30;

/// Stateless service for report constraints and housekeeping.
pub struct ReportService;

impl ReportService {
    /// Rejects report dates after `today`.
    pub fn check_report_date(date: NaiveDate, today: NaiveDate) -> Result<(), ReportError> {
        if date > today {
            return Err(ReportError::FutureDate { date, today });
        }
        Ok(())
    }

    /// Internal processing must not end after the response went out.
    ///
    /// Either timestamp may still be unset; future timestamps are allowed
    /// for planning.
    pub fn check_processing_times(
        internal: Option<DateTime<Utc>>,
        response: Option<DateTime<Utc>>,
    ) -> Result<(), ReportError> {
        if let (Some(internal), Some(response)) = (internal, response)
            && internal > response
        {
            return Err(ReportError::ProcessingAfterResponse { internal, response });
        }
        Ok(())
    }

    /// Days in `from..=to` that still need a daily report.
    ///
    /// Every planned day becomes a report, so a range ending after `today`
    /// fails the same way creating that report would.
    pub fn plan_daily_reports(
        from: NaiveDate,
        to: NaiveDate,
        today: NaiveDate,
        existing: &[NaiveDate],
    ) -> Result<Vec<NaiveDate>, ReportError> {
        if from > to {
            return Err(ReportError::InvalidDateRange { from, to });
        }
        Self::check_report_date(to, today)?;

        let existing: HashSet<NaiveDate> = existing.iter().copied().collect();
        let planned: Vec<NaiveDate> = from
            .iter_days()
            .take_while(|day| *day <= to)
            .filter(|day| !existing.contains(day))
            .collect();

        tracing::debug!(%from, %to, planned = planned.len(), "planned daily reports");
        Ok(planned)
    }

    /// Drafts dated strictly before `today - retention_days`.
    #[must_use]
    pub fn stale_drafts(reports: &[Report], today: NaiveDate, retention_days: u32) -> Vec<ReportId> {
        let Some(cutoff) = today.checked_sub_days(Days::new(u64::from(retention_days))) else {
            return Vec::new();
        };

        let stale: Vec<ReportId> = reports
            .iter()
            .filter(|r| r.status == ReportStatus::Draft && r.date < cutoff)
            .map(|r| r.id)
            .collect();

        if !stale.is_empty() {
            tracing::info!(count = stale.len(), %cutoff, "found old draft reports to clean up");
        }
        stale
    }
}
