//! Exact decimal coercion for fractional amounts and percentages.
//!
//! Fields such as `percent_off` arrive as JSON numbers while
//! `unit_amount_decimal` arrives as a numeric string. [`ExactDecimal`] accepts
//! both and builds the [`Decimal`] from the literal text, so values like
//! `12.35` never pass through an `f64`.

use rust_decimal::Decimal;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use serde_with::{DeserializeAs, SerializeAs};

/// `serde_with` adapter decoding a JSON number or numeric string into a
/// [`Decimal`].
///
/// Serializes back as a decimal string.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::Deserialize;
/// use serde_with::serde_as;
/// use stripekit_proto::ExactDecimal;
///
/// #[serde_as]
/// #[derive(Deserialize)]
/// struct Phase {
///     #[serde_as(as = "Option<ExactDecimal>")]
///     application_fee_percent: Option<Decimal>,
/// }
///
/// let phase: Phase = serde_json::from_str(r#"{"application_fee_percent": 12.35}"#).unwrap();
/// assert_eq!(phase.application_fee_percent, Some(Decimal::new(1235, 2)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExactDecimal;

impl<'de> DeserializeAs<'de, Decimal> for ExactDecimal {
    fn deserialize_as<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        // serde_json keeps the literal digits of a number (`arbitrary_precision`).
        match Value::deserialize(deserializer)? {
            Value::Number(n) => parse_decimal(&n.to_string()).map_err(de::Error::custom),
            Value::String(s) => parse_decimal(&s).map_err(de::Error::custom),
            Value::Null => Err(invalid_type(Unexpected::Unit)),
            Value::Bool(b) => Err(invalid_type(Unexpected::Bool(b))),
            Value::Array(_) => Err(invalid_type(Unexpected::Seq)),
            Value::Object(_) => Err(invalid_type(Unexpected::Map)),
        }
    }
}

impl SerializeAs<Decimal> for ExactDecimal {
    fn serialize_as<S>(source: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(source)
    }
}

fn invalid_type<E: de::Error>(unexpected: Unexpected<'_>) -> E {
    E::invalid_type(unexpected, &"a decimal number or numeric string")
}

/// Parses decimal text exactly, accepting scientific notation.
///
/// # Errors
///
/// Returns an error when the text is not a number or would lose precision.
pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str_exact(text).or_else(|_| Decimal::from_scientific(text))
}
