//! Report validation errors.

use chrono::{DateTime, NaiveDate, Utc};
use erpvn_shared::AppError;
use thiserror::Error;

/// Errors raised by report record rules.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reports may not be dated after today.
    #[error("Report date {date} cannot be in the future (today is {today})")]
    FutureDate {
        /// The report date.
        date: NaiveDate,
        /// The reference day.
        today: NaiveDate,
    },

    /// Wizard range with start after end.
    #[error("From date {from} must be before to date {to}")]
    InvalidDateRange {
        /// Range start.
        from: NaiveDate,
        /// Range end.
        to: NaiveDate,
    },

    /// Internal processing finished after the response was delivered.
    #[error("Internal processing time {internal} cannot be later than response time {response}")]
    ProcessingAfterResponse {
        /// Internal processing timestamp.
        internal: DateTime<Utc>,
        /// Response or delivery timestamp.
        response: DateTime<Utc>,
    },
}

impl ReportError {
    /// Returns the HTTP-style status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::FutureDate { .. } => "FUTURE_REPORT_DATE",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::ProcessingAfterResponse { .. } => "PROCESSING_AFTER_RESPONSE",
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
