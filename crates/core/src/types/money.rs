//! Monetary amounts and display formatting.
//!
//! The storefront sells in a single market: amounts are rendered with the
//! French number format and the euro sign no matter which currency code the
//! backend reports on the wire. [`format_eur`] reproduces the ICU `fr-FR`
//! output (narrow no-break space between digit groups, no-break space before
//! the sign).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Narrow no-break space used between digit groups.
const GROUP_SEPARATOR: char = '\u{202f}';
/// No-break space between the amount and the euro sign.
const SIGN_SEPARATOR: char = '\u{00a0}';

/// A monetary amount with its wire currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., euros, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a euro amount.
    #[must_use]
    pub const fn eur(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::EUR)
    }

    /// Display string for the listing.
    ///
    /// Always formats with [`format_eur`], ignoring `currency_code`.
    #[must_use]
    pub fn display(&self) -> String {
        format_eur(self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
    USD,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::USD => "$",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code as a string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
        }
    }
}

/// Format an amount as French-locale euro text, e.g. `1 234,56 €`.
///
/// Rounds to two decimal places with ties away from zero, groups integer
/// digits in threes with a narrow no-break space, and separates the euro
/// sign with a no-break space.
#[must_use]
pub fn format_eur(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let repr = rounded.abs().to_string();
    // Scale 2 guarantees a fractional part; the fallback never fires.
    let (units, cents) = repr.split_once('.').unwrap_or((repr.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}{},{cents}{SIGN_SEPARATOR}€", group_digits(units))
}

/// Insert a group separator every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
