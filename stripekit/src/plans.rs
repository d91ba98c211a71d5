//! Plans.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{Currency, ExactDecimal, List, Metadata, Object, Timestamp};

/// The [Plan object](https://stripe.com/docs/api/plans/object).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"plan"`.
    pub object: String,
    /// Time at which the object was created.
    pub created: Timestamp,
    /// Whether the plan can be used for new purchases.
    pub active: Option<bool>,
    /// Unit amount in minor units.
    pub amount: Option<i64>,
    /// Unit amount in minor units, with up to 12 decimal places.
    #[serde_as(as = "Option<ExactDecimal>")]
    pub amount_decimal: Option<Decimal>,
    /// How the per-unit price is computed.
    pub billing_scheme: Option<BillingScheme>,
    /// Currency of the amounts.
    pub currency: Option<Currency>,
    /// The billing frequency.
    pub interval: Option<PlanInterval>,
    /// Number of intervals between billings.
    pub interval_count: Option<u32>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// Brief description, hidden from customers.
    pub nickname: Option<String>,
    /// The product whose pricing this plan determines.
    pub product: Option<String>,
    /// Default trial length in days.
    pub trial_period_days: Option<u32>,
    /// Whether quantities are set explicitly or reported through usage.
    pub usage_type: Option<UsageType>,
}

impl Object for Plan {
    const OBJECT: &'static str = "plan";

    fn id(&self) -> &str {
        &self.id
    }
}

/// The frequency at which a subscription is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    /// Daily.
    Day,
    /// Weekly.
    Week,
    /// Monthly.
    Month,
    /// Yearly.
    Year,
}

/// How the quantity of a plan is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageType {
    /// Quantity is set on the subscription.
    Licensed,
    /// Quantity is reported as usage.
    Metered,
}

/// How a plan's price is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingScheme {
    /// A fixed amount per unit.
    PerUnit,
    /// Amounts vary by quantity tier.
    Tiered,
}

/// A page of plans.
pub type PlanList = List<Plan>;
