//! Digit-group reading rules.
//!
//! Numbers are read in base-1000 groups, most significant first. Each
//! group produces word tokens; callers join tokens with a single space.

use rust_decimal::Decimal;

use super::error::AmountWordsError;

const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// Scale word per group index (0 = units, 1 = thousand, ...).
const SCALES: [&str; 6] = ["", "nghìn", "triệu", "tỷ", "nghìn tỷ", "triệu tỷ"];

/// Largest integer with a scale word for every group.
pub const MAX_READABLE: u64 = 999_999_999_999_999_999;

/// Reads a single group (0-999).
///
/// `show_zero_hundred` forces "không trăm" when the hundreds digit is zero;
/// it is set for every group except the most significant one.
#[must_use]
pub fn read_three_digits(n: u16, show_zero_hundred: bool) -> Vec<&'static str> {
    debug_assert!(n < 1000, "group out of range: {n}");

    let hundreds = usize::from(n / 100 % 10);
    let tens = usize::from(n % 100 / 10);
    let ones = usize::from(n % 10);
    let mut words = Vec::with_capacity(5);

    if hundreds > 0 {
        words.extend([DIGITS[hundreds], "trăm"]);
    } else if show_zero_hundred {
        words.extend(["không", "trăm"]);
    }

    match tens {
        0 => {
            if ones != 0 {
                if hundreds != 0 {
                    words.push("lẻ");
                }
                words.push(DIGITS[ones]);
            }
        }
        1 => {
            words.push("mười");
            words.extend(ones_after_tens(tens, ones));
        }
        _ => {
            words.extend([DIGITS[tens], "mươi"]);
            words.extend(ones_after_tens(tens, ones));
        }
    }

    words
}

/// Ones digit following a non-zero tens digit.
fn ones_after_tens(tens: usize, ones: usize) -> Option<&'static str> {
    match ones {
        0 => None,
        1 if tens >= 2 => Some("mốt"),
        5 => Some("lăm"),
        _ => Some(DIGITS[ones]),
    }
}

/// Reads a whole number as word tokens, without unit or capitalization.
///
/// Zero groups are dropped, so 1,000,000 reads "một triệu".
pub fn convert_number(n: u64) -> Result<Vec<&'static str>, AmountWordsError> {
    if n == 0 {
        return Ok(vec![DIGITS[0]]);
    }
    if n > MAX_READABLE {
        return Err(AmountWordsError::TooLarge(Decimal::from(n)));
    }

    let mut groups = Vec::with_capacity(SCALES.len());
    let mut rest = n;
    while rest > 0 {
        // Always < 1000.
        #[allow(clippy::cast_possible_truncation)]
        groups.push((rest % 1000) as u16);
        rest /= 1000;
    }

    let mut words = Vec::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let is_most_significant = scale == groups.len() - 1;
        words.extend(read_three_digits(group, !is_most_significant));
        if !SCALES[scale].is_empty() {
            words.push(SCALES[scale]);
        }
    }

    Ok(words)
}
