//! Monetary value objects: currency, exact minor-unit amounts, sign.

use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use erplens_core::{DomainError, DomainResult, ValueObject};

use crate::currencies;

/// An ISO 4217 currency: alphabetic code plus minor-unit exponent.
///
/// Only constructible through the reference table, so a `Currency` value is
/// always a known code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    minor_units: u32,
}

impl Currency {
    /// Look up a currency by its ISO 4217 alphabetic code.
    pub fn from_code(code: &str) -> Option<Self> {
        currencies::lookup(code).map(|(code, minor_units)| Self { code, minor_units })
    }

    /// Fail-fast variant of [`Self::from_code`] for programmatic construction.
    pub fn try_from_code(code: &str) -> DomainResult<Self> {
        Self::from_code(code).ok_or_else(|| {
            DomainError::invalid_argument(format!("unknown ISO 4217 currency code: {code:?}"))
        })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Number of fractional digits of the smallest denomination (e.g. 2 for
    /// USD cents, 0 for JPY).
    pub fn minor_units(&self) -> u32 {
        self.minor_units
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code)
            .ok_or_else(|| de::Error::custom(format!("unknown ISO 4217 currency code: {code:?}")))
    }
}

impl ValueObject for Currency {}

/// Sign applied to an absolute monetary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// +1 or −1.
    pub fn factor(self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

impl ValueObject for Sign {}

/// An exact monetary amount in the currency's smallest unit (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Money {
    /// Amount in smallest currency unit; may be negative.
    minor: i64,
    currency: Currency,
}

impl Money {
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Parse a major-unit decimal string into an exact minor-unit amount.
    ///
    /// The text is parsed with [`Decimal::from_str_exact`], never through
    /// floating point. Fractional digits beyond the currency's exponent round
    /// half away from zero. Text that is not a decimal number yields `None`.
    pub fn parse(currency: Currency, text: &str) -> Option<Self> {
        let amount = Decimal::from_str_exact(text.trim()).ok()?;
        let factor = Decimal::from(10i64.checked_pow(currency.minor_units())?);
        let minor = amount
            .checked_mul(factor)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()?;
        Some(Self { minor, currency })
    }

    pub fn minor(&self) -> i64 {
        self.minor
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Self {
            minor: self.minor.saturating_abs(),
            ..self
        }
    }

    /// Multiply the amount by a sign.
    pub fn apply_sign(self, sign: Sign) -> Self {
        Self {
            minor: self.minor.saturating_mul(sign.factor()),
            ..self
        }
    }

    /// Major-unit decimal view (e.g. 1234 minor units of USD → `12.34`).
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.minor, self.currency.minor_units())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.to_decimal())
    }
}

impl ValueObject for Money {}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> Currency {
        Currency::from_code("USD").unwrap()
    }

    #[test]
    fn parses_to_minor_units() {
        let money = Money::parse(usd(), "12.34").unwrap();
        assert_eq!(money.minor(), 1234);
        assert_eq!(money.currency().code(), "USD");
    }

    #[test]
    fn parses_zero_and_three_exponent_currencies() {
        let jpy = Currency::from_code("JPY").unwrap();
        assert_eq!(Money::parse(jpy, "100").unwrap().minor(), 100);

        let bhd = Currency::from_code("BHD").unwrap();
        assert_eq!(Money::parse(bhd, "1.234").unwrap().minor(), 1234);
    }

    #[test]
    fn excess_fractional_digits_round_half_away_from_zero() {
        assert_eq!(Money::parse(usd(), "12.345").unwrap().minor(), 1235);
        assert_eq!(Money::parse(usd(), "-12.345").unwrap().minor(), -1235);
        assert_eq!(Money::parse(usd(), "12.344").unwrap().minor(), 1234);
    }

    #[test]
    fn non_decimal_text_is_unavailable() {
        assert_eq!(Money::parse(usd(), "abc"), None);
        assert_eq!(Money::parse(usd(), ""), None);
        assert_eq!(Money::parse(usd(), "12,34"), None);
    }

    #[test]
    fn unknown_currency_code_is_rejected() {
        assert_eq!(Currency::from_code("ZZZ"), None);
        let err = Currency::try_from_code("ZZZ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn abs_and_sign_application() {
        let money = Money::parse(usd(), "-25.50").unwrap();
        assert_eq!(money.minor(), -2550);
        assert_eq!(money.abs().minor(), 2550);
        assert_eq!(money.abs().apply_sign(Sign::Negative).minor(), -2550);
        assert_eq!(money.abs().apply_sign(Sign::Positive).minor(), 2550);
    }

    #[test]
    fn display_renders_code_and_major_units() {
        let gbp = Currency::from_code("GBP").unwrap();
        assert_eq!(Money::from_minor(-10000, gbp).to_string(), "GBP -100.00");
        let jpy = Currency::from_code("JPY").unwrap();
        assert_eq!(Money::from_minor(100, jpy).to_string(), "JPY 100");
    }

    #[test]
    fn currency_deserializes_through_the_table() {
        let currency: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(currency.minor_units(), 2);
        assert!(serde_json::from_str::<Currency>("\"ZZZ\"").is_err());
    }
}
