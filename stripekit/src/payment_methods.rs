//! Payment methods.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{Expandable, List, Metadata, Object, Timestamp};

use crate::customers::Customer;

/// The [PaymentMethod object](https://stripe.com/docs/api/payment_methods/object).
///
/// Only the fields shared by every payment method type are modelled; the
/// type-specific hash (`card`, `sepa_debit`, ...) is ignored.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"payment_method"`.
    pub object: String,
    /// Time at which the object was created.
    pub created: Timestamp,
    /// The customer the payment method is attached to.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub customer: Expandable<Customer>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// The payment method type, e.g. `card` or `us_bank_account`.
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

impl Object for PaymentMethod {
    const OBJECT: &'static str = "payment_method";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of payment methods.
pub type PaymentMethodList = List<PaymentMethod>;
