//! Error types for amount-to-words rendering.

use erpvn_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors for amounts outside the renderable domain.
#[derive(Debug, Error)]
pub enum AmountWordsError {
    /// Negative amounts have no Vietnamese reading in this format.
    #[error("Amount {0} is negative")]
    Negative(Decimal),

    /// NaN or infinite float input.
    #[error("Amount {value} is not a finite number")]
    NotFinite {
        /// The rejected value.
        value: f64,
    },

    /// Float input that has no `Decimal` representation.
    #[error("Amount {value} is outside the decimal range")]
    OutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// The integer part needs a scale word beyond "triệu tỷ".
    #[error("Amount {0} exceeds the largest readable scale")]
    TooLarge(Decimal),
}

impl AmountWordsError {
    /// Returns the HTTP-style status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Negative(_)
            | Self::NotFinite { .. }
            | Self::OutOfRange { .. }
            | Self::TooLarge(_) => 400,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Negative(_) => "NEGATIVE_AMOUNT",
            Self::NotFinite { .. } => "NON_FINITE_AMOUNT",
            Self::OutOfRange { .. } | Self::TooLarge(_) => "AMOUNT_TOO_LARGE",
        }
    }
}

impl From<AmountWordsError> for AppError {
    fn from(err: AmountWordsError) -> Self {
        Self::Validation(err.to_string())
    }
}
