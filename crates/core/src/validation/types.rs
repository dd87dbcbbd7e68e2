//! Tier validation review types.

use chrono::{DateTime, Utc};
use erpvn_shared::types::ReviewId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single tier review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Waiting for an earlier tier.
    Waiting,
    /// Ready for the reviewer.
    Pending,
    /// Reviewer rejected.
    Rejected,
    /// Reviewer approved.
    Approved,
}

impl ReviewStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Approved => "approved",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reviewer's decision on a purchase request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review identifier.
    pub id: ReviewId,
    /// Current decision.
    pub status: ReviewStatus,
    /// When the reviewer acted, if they have.
    pub reviewed_date: Option<DateTime<Utc>>,
}

/// Approved-over-total counter shown on purchase requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Reviews with status approved.
    pub approved: usize,
    /// All reviews.
    pub total: usize,
}

impl ValidationSummary {
    /// Counts approved reviews against all reviews.
    #[must_use]
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self {
            approved: reviews
                .iter()
                .filter(|r| r.status == ReviewStatus::Approved)
                .count(),
            total: reviews.len(),
        }
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.approved, self.total)
    }
}
