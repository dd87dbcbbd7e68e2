//! Tier validation status for purchase requests.
//!
//! Derives the "approved/total" counter and the latest review date from a
//! request's tier reviews.

pub mod service;
pub mod types;

pub use service::{PURCHASE_REQUEST_MODEL, ValidationService};
pub use types::{Review, ReviewStatus, ValidationSummary};
