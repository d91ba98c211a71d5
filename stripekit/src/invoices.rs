//! Invoices and their line items.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{Currency, Expandable, List, Metadata, Object, Timestamp};

use crate::coupons::Discount;
use crate::customers::Customer;
use crate::payment_methods::PaymentMethod;
use crate::plans::Plan;
use crate::subscriptions::Subscription;
use crate::tax_rates::TaxRate;

/// The [Invoice object](https://stripe.com/docs/api/invoices/object).
///
/// Documents written against older API versions carry `date` instead of
/// `created` and `billing` instead of `collection_method`; both spellings
/// decode into the same field.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"invoice"`.
    pub object: String,
    /// Time at which the object was created.
    #[serde(alias = "date")]
    pub created: Timestamp,
    /// Country of the business associated with the invoice.
    pub account_country: Option<String>,
    /// Public name of the business associated with the invoice.
    pub account_name: Option<String>,
    /// Final amount due, in minor units.
    pub amount_due: Option<i64>,
    /// Amount paid so far, in minor units.
    pub amount_paid: Option<i64>,
    /// Amount still owed, in minor units.
    pub amount_remaining: Option<i64>,
    /// Platform fee taken from the payment, in minor units.
    pub application_fee_amount: Option<i64>,
    /// Number of payment attempts made.
    pub attempt_count: Option<u32>,
    /// Whether a payment attempt has been made.
    pub attempted: Option<bool>,
    /// Whether automatic collection is enabled.
    pub auto_advance: Option<bool>,
    /// Why the invoice was created.
    pub billing_reason: Option<BillingReason>,
    /// The latest charge generated for the invoice.
    pub charge: Option<String>,
    /// How the invoice is paid.
    #[serde(alias = "billing")]
    pub collection_method: Option<CollectionMethod>,
    /// Currency of every amount on the invoice.
    pub currency: Option<Currency>,
    /// The customer being billed.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub customer: Expandable<Customer>,
    /// The customer's email at finalization.
    pub customer_email: Option<String>,
    /// The customer's name at finalization.
    pub customer_name: Option<String>,
    /// Default payment method for the invoice.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub default_payment_method: Expandable<PaymentMethod>,
    /// Tax rates applied to lines without their own.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_tax_rates: Vec<TaxRate>,
    /// An arbitrary string attached to the object.
    pub description: Option<String>,
    /// Discounts applied to the invoice.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<Expandable<Discount>>,
    /// Date on which payment is due, for `send_invoice` collection.
    pub due_date: Option<Timestamp>,
    /// Customer balance after the invoice was finalized.
    pub ending_balance: Option<i64>,
    /// Footer shown on the invoice.
    pub footer: Option<String>,
    /// URL of the hosted payment page.
    pub hosted_invoice_url: Option<String>,
    /// URL of the invoice PDF.
    pub invoice_pdf: Option<String>,
    /// The invoice's line items.
    pub lines: Option<List<InvoiceLineItem>>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// When the next payment attempt is scheduled.
    pub next_payment_attempt: Option<Timestamp>,
    /// Human-readable invoice number.
    pub number: Option<String>,
    /// Whether the invoice has been paid.
    pub paid: Option<bool>,
    /// End of the usage period covered by the invoice.
    pub period_end: Option<Timestamp>,
    /// Start of the usage period covered by the invoice.
    pub period_start: Option<Timestamp>,
    /// Number used on the payment receipt.
    pub receipt_number: Option<String>,
    /// Customer balance before the invoice was finalized.
    pub starting_balance: Option<i64>,
    /// Text on the customer's card statement.
    pub statement_descriptor: Option<String>,
    /// The invoice's lifecycle state.
    pub status: Option<InvoiceStatus>,
    /// When the invoice moved between states.
    pub status_transitions: Option<StatusTransitions>,
    /// The subscription that generated the invoice, if any.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub subscription: Expandable<Subscription>,
    /// Time used to compute prorations for subscription changes.
    pub subscription_proration_date: Option<Timestamp>,
    /// Total before discounts and taxes, in minor units.
    pub subtotal: Option<i64>,
    /// Tax amount, in minor units.
    pub tax: Option<i64>,
    /// Total after discounts and taxes, in minor units.
    pub total: Option<i64>,
    /// When webhooks for the invoice were last delivered.
    pub webhooks_delivered_at: Option<Timestamp>,
}

impl Object for Invoice {
    const OBJECT: &'static str = "invoice";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Invoice {
    /// Returns `amount_due` in major units of the invoice currency.
    #[must_use]
    pub fn amount_due_decimal(&self) -> Option<rust_decimal::Decimal> {
        Some(self.currency?.minor_units_to_decimal(self.amount_due?))
    }

    /// Iterates over the line items included in this document.
    ///
    /// Only the first page of lines is embedded in an invoice; further pages
    /// are fetched from [`List::url`].
    pub fn line_items(&self) -> impl Iterator<Item = &InvoiceLineItem> {
        self.lines.iter().flat_map(List::iter)
    }
}

/// How an invoice is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMethod {
    /// The default payment method is charged.
    ChargeAutomatically,
    /// The invoice is emailed to the customer.
    SendInvoice,
}

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Editable, not yet finalized.
    Draft,
    /// Finalized and awaiting payment.
    Open,
    /// Paid in full.
    Paid,
    /// Payment is not expected.
    Uncollectible,
    /// Canceled after finalization.
    Void,
}

/// Why an invoice was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingReason {
    /// A subscription advanced into a new period.
    SubscriptionCycle,
    /// A new subscription was created.
    SubscriptionCreate,
    /// A subscription was updated.
    SubscriptionUpdate,
    /// Any other subscription-related reason.
    Subscription,
    /// Created by hand.
    Manual,
    /// A preview of the next invoice.
    Upcoming,
    /// A billing threshold was reached.
    SubscriptionThreshold,
    /// Pending invoice items were invoiced automatically.
    AutomaticPendingInvoiceItemInvoice,
}

/// Timestamps of an invoice's state changes.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusTransitions {
    /// When the invoice was finalized.
    pub finalized_at: Option<Timestamp>,
    /// When the invoice was marked uncollectible.
    pub marked_uncollectible_at: Option<Timestamp>,
    /// When the invoice was paid.
    pub paid_at: Option<Timestamp>,
    /// When the invoice was voided.
    pub voided_at: Option<Timestamp>,
}

/// A service period, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Start of the period.
    pub start: Timestamp,
    /// End of the period.
    pub end: Timestamp,
}

/// The [Line Item object](https://stripe.com/docs/api/invoices/line_item).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"line_item"`.
    pub object: String,
    /// Amount in minor units.
    pub amount: Option<i64>,
    /// Currency of `amount`.
    pub currency: Option<Currency>,
    /// An arbitrary string attached to the object.
    pub description: Option<String>,
    /// Whether discounts apply to this line.
    pub discountable: Option<bool>,
    /// The invoice item this line was generated from.
    pub invoice_item: Option<String>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// The period this line covers.
    pub period: Option<Period>,
    /// The plan of the subscription, if any.
    pub plan: Option<Plan>,
    /// Whether this is a proration.
    pub proration: Option<bool>,
    /// Quantity of the subscription, if any.
    pub quantity: Option<u64>,
    /// The subscription this line belongs to, if any.
    pub subscription: Option<String>,
    /// The subscription item that generated this line, if any.
    pub subscription_item: Option<String>,
    /// Tax rates applied to this line.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_rates: Vec<TaxRate>,
    /// Where the line came from.
    #[serde(rename = "type")]
    pub type_: Option<LineItemType>,
}

impl Object for InvoiceLineItem {
    const OBJECT: &'static str = "line_item";

    fn id(&self) -> &str {
        &self.id
    }
}

/// The source of an invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemType {
    /// A one-off invoice item.
    #[serde(rename = "invoiceitem")]
    InvoiceItem,
    /// A subscription charge.
    Subscription,
}

/// A page of invoices.
pub type InvoiceList = List<Invoice>;

/// A page of invoice line items.
pub type InvoiceLineItemList = List<InvoiceLineItem>;
