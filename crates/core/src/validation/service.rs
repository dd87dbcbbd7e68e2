//! Validation status computations for purchase requests.

use chrono::{DateTime, Utc};

use crate::validation::types::Review;

/// Model that must always be subject to tier validation.
pub const PURCHASE_REQUEST_MODEL: &str = "purchase.request";

/// Stateless service deriving display fields from tier reviews.
pub struct ValidationService;

impl ValidationService {
    /// Latest reviewed date among reviews that have one.
    #[must_use]
    pub fn last_validation_date(reviews: &[Review]) -> Option<DateTime<Utc>> {
        reviews.iter().filter_map(|r| r.reviewed_date).max()
    }

    /// Adds `model` to the tier validation model list if missing.
    ///
    /// Returns true if the list changed.
    pub fn register_tier_model(models: &mut Vec<String>, model: &str) -> bool {
        if models.iter().any(|m| m == model) {
            return false;
        }
        models.push(model.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::validation::types::ReviewStatus;
    use erpvn_shared::types::ReviewId;

    fn review(status: ReviewStatus, day: Option<u32>) -> Review {
        Review {
            id: ReviewId::new(),
            status,
            reviewed_date: day.map(|d| Utc.with_ymd_and_hms(2025, 3, d, 9, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_last_validation_date_picks_latest() {
        let reviews = vec![
            review(ReviewStatus::Approved, Some(3)),
            review(ReviewStatus::Approved, Some(12)),
            review(ReviewStatus::Waiting, None),
            review(ReviewStatus::Rejected, Some(7)),
        ];
        assert_eq!(
            ValidationService::last_validation_date(&reviews),
            Some(Utc.with_ymd_and_hms(2025, 3, 12, 9, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_last_validation_date_none_when_unreviewed() {
        let reviews = vec![review(ReviewStatus::Pending, None)];
        assert_eq!(ValidationService::last_validation_date(&reviews), None);
        assert_eq!(ValidationService::last_validation_date(&[]), None);
    }

    #[test]
    fn test_register_tier_model_once() {
        let mut models = vec!["purchase.order".to_string()];
        assert!(ValidationService::register_tier_model(
            &mut models,
            PURCHASE_REQUEST_MODEL
        ));
        assert!(!ValidationService::register_tier_model(
            &mut models,
            PURCHASE_REQUEST_MODEL
        ));
        assert_eq!(models, vec!["purchase.order", "purchase.request"]);
    }
}
