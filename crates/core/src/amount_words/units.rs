//! Vietnamese currency unit names.

use serde::Serialize;

/// Major and minor unit names for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyUnits {
    /// Principal denomination, e.g. "đồng".
    pub major: &'static str,
    /// Subsidiary denomination, e.g. "xu". Empty when the currency has none.
    pub minor: &'static str,
}

const UNIT_TABLE: [(&str, CurrencyUnits); 5] = [
    ("VND", CurrencyUnits::new("đồng", "xu")),
    ("USD", CurrencyUnits::new("đô la Mỹ", "cent")),
    ("EUR", CurrencyUnits::new("euro", "cent")),
    ("JPY", CurrencyUnits::new("yên Nhật", "")),
    ("CNY", CurrencyUnits::new("nhân dân tệ", "xu")),
];

/// Units used for codes missing from the table.
pub const FALLBACK_UNITS: CurrencyUnits = CurrencyUnits::new("đơn vị", "phụ");

impl CurrencyUnits {
    const fn new(major: &'static str, minor: &'static str) -> Self {
        Self { major, minor }
    }

    /// Resolves unit names for a currency code.
    ///
    /// Unknown codes degrade to [`FALLBACK_UNITS`] instead of failing.
    #[must_use]
    pub fn lookup(code: &str) -> Self {
        if let Some((_, units)) = UNIT_TABLE.iter().find(|(known, _)| *known == code) {
            return *units;
        }
        tracing::debug!(currency = code, "unknown currency code, using generic unit names");
        FALLBACK_UNITS
    }

    /// Returns true if fractional amounts can be written for this currency.
    #[must_use]
    pub fn has_minor(&self) -> bool {
        !self.minor.is_empty()
    }
}
