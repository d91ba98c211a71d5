//! Three-letter ISO 4217 currency codes.
//!
//! The platform always sends currencies as lowercase codes (`"usd"`). Amounts
//! next to them are integers in the currency's minor unit, so [`Currency`]
//! also knows how many decimal places that unit has.

use rust_decimal::Decimal;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Currencies charged in whole units.
const ZERO_DECIMAL: [&str; 16] = [
    "bif", "clp", "djf", "gnf", "jpy", "kmf", "krw", "mga", "pyg", "rwf", "ugx", "vnd", "vuv",
    "xaf", "xof", "xpf",
];

/// Currencies whose minor unit is a thousandth.
const THREE_DECIMAL: [&str; 5] = ["bhd", "jod", "kwd", "omr", "tnd"];

/// A validated, lowercase ISO 4217 currency code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency([u8; 3]);

/// The value was not a three-letter ASCII currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid currency code `{0}`: expected three ASCII letters")]
pub struct CurrencyCodeError(String);

impl Currency {
    /// United States dollar.
    pub const USD: Self = Self(*b"usd");
    /// Euro.
    pub const EUR: Self = Self(*b"eur");
    /// Pound sterling.
    pub const GBP: Self = Self(*b"gbp");
    /// Canadian dollar.
    pub const CAD: Self = Self(*b"cad");
    /// Australian dollar.
    pub const AUD: Self = Self(*b"aud");
    /// Swiss franc.
    pub const CHF: Self = Self(*b"chf");
    /// Japanese yen.
    pub const JPY: Self = Self(*b"jpy");

    /// Parses a currency code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyCodeError`] unless `code` is exactly three ASCII letters.
    pub fn new(code: &str) -> Result<Self, CurrencyCodeError> {
        let bytes: [u8; 3] = code
            .as_bytes()
            .try_into()
            .map_err(|_| CurrencyCodeError(code.to_owned()))?;
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(CurrencyCodeError(code.to_owned()));
        }
        Ok(Self(bytes.map(|b| b.to_ascii_lowercase())))
    }

    /// Returns the lowercase code as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Whether amounts in this currency have no fractional minor unit.
    #[must_use]
    pub fn is_zero_decimal(&self) -> bool {
        ZERO_DECIMAL.contains(&self.as_str())
    }

    /// Number of decimal places between the minor and major unit.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        if self.is_zero_decimal() {
            0
        } else if THREE_DECIMAL.contains(&self.as_str()) {
            3
        } else {
            2
        }
    }

    /// Converts an integer amount in minor units (cents for `usd`) into an
    /// exact decimal amount in major units.
    #[must_use]
    pub fn minor_units_to_decimal(&self, amount: i64) -> Decimal {
        Decimal::new(amount, self.exponent())
    }
}

impl FromStr for Currency {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Currency").field(&self.as_str()).finish()
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::new(&code).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_deserialize_lowercase() {
        let currency: Currency = serde_json::from_str("\"usd\"").unwrap();
        assert_eq!(currency, Currency::USD);
    }

    #[test]
    fn test_currency_folds_case() {
        let currency: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(currency, Currency::EUR);
        assert_eq!(serde_json::to_string(&currency).unwrap(), "\"eur\"");
    }

    #[test]
    fn test_currency_rejects_malformed_codes() {
        assert!(Currency::new("us").is_err());
        assert!(Currency::new("usdd").is_err());
        assert!(Currency::new("u5d").is_err());
        assert!(serde_json::from_str::<Currency>("840").is_err());
    }

    #[test]
    fn test_currency_minor_units() {
        assert_eq!(
            Currency::USD.minor_units_to_decimal(2500),
            Decimal::new(2500, 2)
        );
        assert_eq!(Currency::USD.minor_units_to_decimal(2500).to_string(), "25.00");
        assert_eq!(Currency::JPY.minor_units_to_decimal(2500).to_string(), "2500");
        assert_eq!(
            Currency::new("kwd").unwrap().minor_units_to_decimal(1250).to_string(),
            "1.250"
        );
    }

    #[test]
    fn test_currency_zero_decimal() {
        assert!(Currency::JPY.is_zero_decimal());
        assert!(!Currency::GBP.is_zero_decimal());
    }
}
