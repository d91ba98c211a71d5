//! Subscription schedules.
//!
//! A schedule drives a subscription through a sequence of phases, each with
//! its own plans, pricing and billing settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{ExactDecimal, Expandable, List, Metadata, Object, Timestamp};

use crate::coupons::Coupon;
use crate::customers::Customer;
use crate::invoices::CollectionMethod;
use crate::payment_methods::PaymentMethod;
use crate::plans::Plan;
use crate::subscriptions::{BillingThresholds, Subscription, TransferData};
use crate::tax_rates::TaxRate;

/// The [Schedule object](https://stripe.com/docs/api/subscription_schedules/object).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSchedule {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"subscription_schedule"`.
    pub object: String,
    /// Time at which the schedule was canceled.
    pub canceled_at: Option<Timestamp>,
    /// Time at which the schedule was completed.
    pub completed_at: Option<Timestamp>,
    /// Time at which the object was created.
    pub created: Timestamp,
    /// Start and end of the current phase, if the schedule is active.
    pub current_phase: Option<CurrentPhase>,
    /// The customer who owns the schedule.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub customer: Expandable<Customer>,
    /// Settings applied to phases that do not override them.
    pub default_settings: Option<DefaultSettings>,
    /// What happens to the subscription when the schedule ends.
    pub end_behavior: Option<EndBehavior>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// The schedule's phases, in order.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<Phase>,
    /// Time at which the schedule was released.
    pub released_at: Option<Timestamp>,
    /// The subscription once managed by the schedule, if it was released.
    pub released_subscription: Option<String>,
    /// The schedule's lifecycle state.
    pub status: Option<ScheduleStatus>,
    /// The subscription managed by the schedule.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub subscription: Expandable<Subscription>,
}

impl Object for SubscriptionSchedule {
    const OBJECT: &'static str = "subscription_schedule";

    fn id(&self) -> &str {
        &self.id
    }
}

impl SubscriptionSchedule {
    /// Returns the phase whose window contains `at`, if any.
    ///
    /// A phase without an end date is open-ended.
    #[must_use]
    pub fn phase_at(&self, at: Timestamp) -> Option<&Phase> {
        self.phases.iter().find(|phase| {
            phase.start_date.is_some_and(|start| start <= at)
                && phase.end_date.is_none_or(|end| at < end)
        })
    }
}

/// Bounds of the phase a schedule is currently in.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPhase {
    /// End of the current phase.
    pub end_date: Option<Timestamp>,
    /// Start of the current phase.
    pub start_date: Option<Timestamp>,
}

/// Defaults inherited by every phase of a schedule.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSettings {
    /// How the billing cycle anchor moves when entering a phase.
    pub billing_cycle_anchor: Option<BillingCycleAnchor>,
    /// Thresholds at which an invoice is sent early.
    pub billing_thresholds: Option<BillingThresholds>,
    /// How invoices are paid.
    pub collection_method: Option<CollectionMethod>,
    /// Default payment method for the schedule's invoices.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub default_payment_method: Expandable<PaymentMethod>,
    /// Invoice settings.
    pub invoice_settings: Option<InvoiceSettings>,
    /// Where payments are transferred to.
    pub transfer_data: Option<TransferData>,
}

/// Invoice settings of a schedule or phase.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSettings {
    /// Days a customer has to pay invoices. `None` when charging automatically.
    pub days_until_due: Option<u32>,
}

/// One phase of a subscription schedule.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Items added to the first invoice of the phase.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_invoice_items: Vec<AddInvoiceItem>,
    /// Percentage of the invoice subtotal transferred to the platform,
    /// between 0 and 100 with at most two decimal places.
    #[serde_as(as = "Option<ExactDecimal>")]
    pub application_fee_percent: Option<Decimal>,
    /// How the billing cycle anchor moves when entering this phase.
    pub billing_cycle_anchor: Option<BillingCycleAnchor>,
    /// Thresholds at which an invoice is sent early.
    pub billing_thresholds: Option<BillingThresholds>,
    /// How invoices are paid during this phase.
    pub collection_method: Option<CollectionMethod>,
    /// Coupon applied during this phase.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub coupon: Expandable<Coupon>,
    /// Default payment method for this phase's invoices.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub default_payment_method: Expandable<PaymentMethod>,
    /// Tax rates applied to the subscription during this phase.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_tax_rates: Vec<TaxRate>,
    /// End of the phase.
    pub end_date: Option<Timestamp>,
    /// Invoice settings for this phase.
    pub invoice_settings: Option<InvoiceSettings>,
    /// Plans subscribed to during this phase.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plans: Vec<Plan>,
    /// Whether entering this phase prorates.
    pub proration_behavior: Option<ProrationBehavior>,
    /// Start of the phase.
    pub start_date: Option<Timestamp>,
    /// Where payments are transferred to during this phase.
    pub transfer_data: Option<TransferData>,
    /// End of the trial within this phase.
    pub trial_end: Option<Timestamp>,
}

/// A one-off item added to the first invoice of a phase.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddInvoiceItem {
    /// The price used to generate the invoice item.
    pub price: Option<String>,
    /// Quantity of the invoice item.
    pub quantity: Option<u64>,
}

/// What happens to the subscription when its schedule ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndBehavior {
    /// The subscription continues without the schedule.
    Release,
    /// The subscription is canceled.
    Cancel,
}

/// How the billing cycle anchor is set when entering a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycleAnchor {
    /// Anchored to the phase start.
    PhaseStart,
    /// Adjusted automatically as needed.
    Automatic,
}

/// Lifecycle state of a subscription schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// The first phase has not started.
    NotStarted,
    /// A phase is in progress.
    Active,
    /// All phases ran to completion.
    Completed,
    /// Released from the subscription.
    Released,
    /// Canceled.
    Canceled,
}

/// Whether a phase transition creates prorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationBehavior {
    /// Create proration items.
    CreateProrations,
    /// Do not prorate.
    None,
    /// Create prorations and invoice them immediately.
    AlwaysInvoice,
}

/// A page of subscription schedules.
pub type SubscriptionScheduleList = List<SubscriptionSchedule>;
