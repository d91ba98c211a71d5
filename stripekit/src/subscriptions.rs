//! Subscriptions and the billing settings they share with schedules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{ExactDecimal, Expandable, List, Metadata, Object, Timestamp};

use crate::customers::Customer;
use crate::invoices::{CollectionMethod, Invoice};
use crate::payment_methods::PaymentMethod;
use crate::subscription_schedules::SubscriptionSchedule;

/// The [Subscription object](https://stripe.com/docs/api/subscriptions/object).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"subscription"`.
    pub object: String,
    /// Time at which the object was created.
    pub created: Timestamp,
    /// A date in the future at which the subscription will be canceled.
    pub cancel_at: Option<Timestamp>,
    /// Whether the subscription is canceled at the end of the current period.
    pub cancel_at_period_end: Option<bool>,
    /// When the subscription was canceled.
    pub canceled_at: Option<Timestamp>,
    /// How invoices for this subscription are paid.
    pub collection_method: Option<CollectionMethod>,
    /// End of the current billing period.
    pub current_period_end: Option<Timestamp>,
    /// Start of the current billing period.
    pub current_period_start: Option<Timestamp>,
    /// The customer who owns the subscription.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub customer: Expandable<Customer>,
    /// Days until an invoice is due, for `send_invoice` collection.
    pub days_until_due: Option<u32>,
    /// Default payment method for the subscription's invoices.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub default_payment_method: Expandable<PaymentMethod>,
    /// When the subscription ended.
    pub ended_at: Option<Timestamp>,
    /// The most recent invoice generated by the subscription.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub latest_invoice: Expandable<Invoice>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// The schedule managing this subscription, if any.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub schedule: Expandable<SubscriptionSchedule>,
    /// Date the subscription started.
    pub start_date: Option<Timestamp>,
    /// The subscription's lifecycle state.
    pub status: Option<SubscriptionStatus>,
    /// End of the trial, if the subscription has one.
    pub trial_end: Option<Timestamp>,
    /// Start of the trial, if the subscription has one.
    pub trial_start: Option<Timestamp>,
}

impl Object for Subscription {
    const OBJECT: &'static str = "subscription";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// The first payment has not succeeded yet.
    Incomplete,
    /// The first payment never succeeded and the subscription expired.
    IncompleteExpired,
    /// In a trial period.
    Trialing,
    /// In good standing.
    Active,
    /// Renewal payment failed, retries pending.
    PastDue,
    /// Canceled; terminal.
    Canceled,
    /// Retries exhausted without payment.
    Unpaid,
    /// Trial ended without a payment method.
    Paused,
}

impl SubscriptionStatus {
    /// Returns the wire literal.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::IncompleteExpired => "incomplete_expired",
            Self::Trialing => "trialing",
            Self::Active => "active",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
            Self::Unpaid => "unpaid",
            Self::Paused => "paused",
        }
    }
}

impl core::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds at which an invoice is sent and the billing period advanced.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingThresholds {
    /// Monetary threshold in minor units.
    pub amount_gte: Option<i64>,
    /// Whether the billing cycle anchor resets when the threshold is reached.
    pub reset_billing_cycle_anchor: Option<bool>,
}

/// Where a subscription's payments are transferred to.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferData {
    /// Percentage of the invoice subtotal transferred to the destination.
    #[serde_as(as = "Option<ExactDecimal>")]
    pub amount_percent: Option<Decimal>,
    /// The connected account receiving the transfer.
    pub destination: Option<String>,
}

/// A page of subscriptions.
pub type SubscriptionList = List<Subscription>;

#[cfg(test)]
mod tests {
    use super::*;
    use stripekit_proto::{DecoderConfig, decode_str};

    #[test]
    fn test_subscription_decode() {
        let subscription: Subscription = decode_str(
            r#"{
                "id": "sub_1",
                "object": "subscription",
                "created": 1700000000,
                "cancel_at_period_end": false,
                "collection_method": "charge_automatically",
                "current_period_start": 1700000000,
                "current_period_end": 1702592000,
                "customer": {"id": "cus_1", "object": "customer", "created": 1690000000},
                "latest_invoice": "in_1",
                "schedule": null,
                "status": "past_due",
                "items": {"object": "list", "data": [], "has_more": false, "url": "/v1/subscription_items"}
            }"#,
            &DecoderConfig::default(),
        )
        .unwrap();
        assert_eq!(subscription.status, Some(SubscriptionStatus::PastDue));
        assert_eq!(subscription.status.unwrap().to_string(), "past_due");
        assert_eq!(subscription.customer.id(), Some("cus_1"));
        assert!(subscription.customer.is_expanded());
        assert_eq!(subscription.latest_invoice.id(), Some("in_1"));
        assert!(subscription.schedule.is_absent());
        assert_eq!(
            subscription.collection_method,
            Some(CollectionMethod::ChargeAutomatically)
        );
    }

    #[test]
    fn test_subscription_status_literals() {
        for status in [
            SubscriptionStatus::Incomplete,
            SubscriptionStatus::IncompleteExpired,
            SubscriptionStatus::Paused,
        ] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, status.as_str());
        }
    }
}
