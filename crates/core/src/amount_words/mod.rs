//! Vietnamese amount-in-words rendering.
//!
//! Turns a monetary amount and currency code into the sentence printed on
//! invoices, e.g. `1200000 VND` → `"Một triệu hai trăm nghìn đồng"`.
//!
//! # Modules
//!
//! - `reader` - Digit-group reading rules
//! - `units` - Currency unit names
//! - `error` - Out-of-domain amounts

pub mod error;
pub mod reader;
pub mod units;

#[cfg(test)]
mod props;

use erpvn_shared::types::Money;
use rust_decimal::prelude::*;

pub use error::AmountWordsError;
pub use reader::{MAX_READABLE, convert_number, read_three_digits};
pub use units::{CurrencyUnits, FALLBACK_UNITS};

/// Renders `amount` in Vietnamese words followed by the currency unit names.
///
/// The integer part is capitalized and followed by the major unit; a
/// non-zero cents part is appended as `"và <cents> <minor unit>"` unless the
/// currency has no minor unit (JPY).
///
/// Cents are `(amount - trunc(amount)) * 100` rounded half to even. A
/// fractional part that rounds to 100 cents carries into the integer part,
/// so `1.999` reads as two whole units.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use erpvn_core::amount_words::number_to_text_vn;
///
/// let text = number_to_text_vn(dec!(10.5), "VND").unwrap();
/// assert_eq!(text, "Mười đồng và năm mươi xu");
/// ```
pub fn number_to_text_vn(amount: Decimal, currency_code: &str) -> Result<String, AmountWordsError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountWordsError::Negative(amount));
    }

    // Folds -0 into 0.
    let (integer_part, cents) = split_amount(amount.abs())?;
    let units = CurrencyUnits::lookup(currency_code);

    let integer_words = convert_number(integer_part)?.join(" ");
    let mut sentence = format!("{} {}", capitalize_first(&integer_words), units.major);

    if cents > 0 && units.has_minor() {
        let cent_words = convert_number(cents)?.join(" ");
        sentence.push_str(" và ");
        sentence.push_str(&cent_words);
        sentence.push(' ');
        sentence.push_str(units.minor);
    }

    Ok(sentence)
}

/// Float entry point for callers that hold amounts as `f64`.
///
/// NaN and infinities are rejected before conversion; finite values beyond
/// the `Decimal` range report the original float.
pub fn number_to_text_vn_f64(amount: f64, currency_code: &str) -> Result<String, AmountWordsError> {
    if !amount.is_finite() {
        return Err(AmountWordsError::NotFinite { value: amount });
    }
    let decimal =
        Decimal::from_f64(amount).ok_or(AmountWordsError::OutOfRange { value: amount })?;
    number_to_text_vn(decimal, currency_code)
}

/// Renders a [`Money`] value.
pub fn money_in_words(money: &Money) -> Result<String, AmountWordsError> {
    number_to_text_vn(money.amount, money.currency.code())
}

/// Computes the invoice "amount in words" display field.
///
/// A zero total or a missing currency leaves the field empty.
pub fn invoice_amount_in_words(
    amount_total: Decimal,
    currency_code: Option<&str>,
) -> Result<String, AmountWordsError> {
    match currency_code {
        Some(code) if !amount_total.is_zero() => number_to_text_vn(amount_total, code),
        _ => Ok(String::new()),
    }
}

/// Splits an amount into whole units and rounded cents, carrying 100 cents.
fn split_amount(amount: Decimal) -> Result<(u64, u64), AmountWordsError> {
    let whole = amount.trunc();
    let cents = ((amount - whole) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);

    let mut integer_part = whole.to_u64().ok_or(AmountWordsError::TooLarge(amount))?;
    let mut cents = cents.to_u64().ok_or(AmountWordsError::TooLarge(amount))?;

    if cents >= 100 {
        integer_part = integer_part
            .checked_add(1)
            .ok_or(AmountWordsError::TooLarge(amount))?;
        cents = 0;
    }
    if integer_part > MAX_READABLE {
        return Err(AmountWordsError::TooLarge(amount));
    }

    Ok((integer_part, cents))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
