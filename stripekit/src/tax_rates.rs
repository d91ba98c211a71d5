//! Tax rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{ExactDecimal, List, Metadata, Object, Timestamp};

/// The [TaxRate object](https://stripe.com/docs/api/tax_rates/object).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"tax_rate"`.
    pub object: String,
    /// Time at which the object was created.
    pub created: Timestamp,
    /// Whether the rate can be applied to new invoices and subscriptions.
    pub active: Option<bool>,
    /// Internal description, not shown to customers.
    pub description: Option<String>,
    /// Name shown to customers, e.g. `VAT`.
    pub display_name: Option<String>,
    /// Whether the rate is included in the amount it applies to.
    pub inclusive: Option<bool>,
    /// The jurisdiction the rate applies in.
    pub jurisdiction: Option<String>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// The rate as a percentage, e.g. `8.875`.
    #[serde_as(as = "Option<ExactDecimal>")]
    pub percentage: Option<Decimal>,
}

impl Object for TaxRate {
    const OBJECT: &'static str = "tax_rate";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of tax rates.
pub type TaxRateList = List<TaxRate>;
