//! Property-based tests for amount-in-words rendering.
//!
//! - Capitalized sentence for every readable amount
//! - Minor unit clause only when cents are present and the currency has one
//! - Single-space token joins

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{CurrencyUnits, MAX_READABLE, convert_number, number_to_text_vn};

/// Strategy for amounts with two decimal places (0.00 to 10,000,000,000.00).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for currency codes, known and unknown.
fn arb_currency_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("VND".to_string()),
        Just("USD".to_string()),
        Just("EUR".to_string()),
        Just("JPY".to_string()),
        Just("CNY".to_string()),
        "[A-Z]{3}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// First character is always upper-case.
    #[test]
    fn prop_sentence_is_capitalized(amount in arb_amount(), code in arb_currency_code()) {
        let text = number_to_text_vn(amount, &code).unwrap();
        let first = text.chars().next().unwrap();
        prop_assert!(first.is_uppercase(), "{text}");
    }

    /// Same inputs, same output.
    #[test]
    fn prop_rendering_is_deterministic(amount in arb_amount(), code in arb_currency_code()) {
        prop_assert_eq!(
            number_to_text_vn(amount, &code).unwrap(),
            number_to_text_vn(amount, &code).unwrap()
        );
    }

    /// The major unit follows the integer words; the minor clause closes the sentence.
    #[test]
    fn prop_unit_placement(amount in arb_amount(), code in arb_currency_code()) {
        let units = CurrencyUnits::lookup(&code);
        let text = number_to_text_vn(amount, &code).unwrap();
        let has_cents = !amount.fract().is_zero();

        if has_cents && units.has_minor() {
            let suffix = format!(" {}", units.minor);
            prop_assert!(text.ends_with(&suffix));
            let major_clause = format!(" {} và ", units.major);
            prop_assert!(text.contains(&major_clause));
        } else {
            prop_assert!(text.ends_with(units.major));
            prop_assert!(!text.contains(" và "));
        }
    }

    /// Whole amounts never render a fractional clause.
    #[test]
    fn prop_whole_amounts_have_no_minor_clause(n in 0u64..=MAX_READABLE, code in arb_currency_code()) {
        let text = number_to_text_vn(Decimal::from(n), &code).unwrap();
        prop_assert!(!text.contains(" và "));
    }

    /// Token joins never produce blank or padded words.
    #[test]
    fn prop_no_double_spaces(n in 0u64..=MAX_READABLE) {
        let text = convert_number(n).unwrap().join(" ");
        prop_assert!(!text.contains("  "));
        prop_assert_eq!(text.trim(), text.as_str());
    }

    /// Irregular ones readings appear only after a tens word.
    #[test]
    fn prop_irregular_ones_follow_tens(n in 1u64..1_000_000u64) {
        let words = convert_number(n).unwrap();
        for (i, word) in words.iter().enumerate() {
            if *word == "mốt" || *word == "lăm" {
                prop_assert!(i > 0);
                prop_assert!(words[i - 1] == "mươi" || words[i - 1] == "mười");
            }
        }
    }
}
