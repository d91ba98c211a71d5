//! Customers.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{Currency, List, Metadata, Object, Timestamp};

/// The [Customer object](https://stripe.com/docs/api/customers/object).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"customer"`.
    pub object: String,
    /// Time at which the object was created.
    pub created: Timestamp,
    /// Current balance in minor units, applied to the next invoice.
    pub balance: Option<i64>,
    /// Currency the customer is billed in.
    pub currency: Option<Currency>,
    /// Whether the latest charge or invoice failed.
    pub delinquent: Option<bool>,
    /// An arbitrary string attached to the object.
    pub description: Option<String>,
    /// The customer's email address.
    pub email: Option<String>,
    /// Prefix used to generate unique invoice numbers.
    pub invoice_prefix: Option<String>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// The customer's full name or business name.
    pub name: Option<String>,
    /// The customer's phone number.
    pub phone: Option<String>,
}

impl Object for Customer {
    const OBJECT: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of customers.
pub type CustomerList = List<Customer>;

#[cfg(test)]
mod tests {
    use super::*;
    use stripekit_proto::{DecoderConfig, decode_str};

    #[test]
    fn test_customer_decode() {
        let customer: Customer = decode_str(
            r#"{
                "id": "cus_CIaBoYfVixDHWf",
                "object": "customer",
                "created": 1518270185,
                "balance": -500,
                "currency": "USD",
                "delinquent": true,
                "email": "jenny@example.com",
                "invoice_prefix": "7D1A2B3C",
                "metadata": {"segment": "smb"},
                "phone": null
            }"#,
            &DecoderConfig::default(),
        )
        .unwrap();
        assert_eq!(customer.balance, Some(-500));
        assert_eq!(customer.currency, Some(Currency::USD));
        assert_eq!(customer.delinquent, Some(true));
        assert_eq!(customer.invoice_prefix.as_deref(), Some("7D1A2B3C"));
        assert_eq!(customer.metadata["segment"], "smb");
        assert_eq!(customer.phone, None);
        assert_eq!(customer.name, None);
    }

    #[test]
    fn test_customer_missing_created() {
        let err = decode_str::<Customer>(
            r#"{"id": "cus_1", "object": "customer", "email": "a@example.com"}"#,
            &DecoderConfig::default(),
        )
        .unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.path(), None);
    }
}
