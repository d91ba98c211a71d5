//! Invoice items: one-off charges added to a customer's next invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{Currency, ExactDecimal, Expandable, List, Metadata, Object, Timestamp};

use crate::customers::Customer;
use crate::invoices::{Invoice, Period};
use crate::plans::Plan;
use crate::subscriptions::Subscription;
use crate::tax_rates::TaxRate;

/// The [Invoice Item object](https://stripe.com/docs/api/invoiceitems/object).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"invoiceitem"`.
    pub object: String,
    /// Amount in minor units.
    pub amount: Option<i64>,
    /// Currency of `amount`.
    pub currency: Option<Currency>,
    /// The customer the item is billed to.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub customer: Expandable<Customer>,
    /// Time at which the item was created.
    pub date: Timestamp,
    /// An arbitrary string attached to the object.
    pub description: Option<String>,
    /// Whether discounts apply to this item.
    pub discountable: Option<bool>,
    /// The invoice the item was added to, once invoiced.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub invoice: Expandable<Invoice>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// The period the item covers.
    pub period: Option<Period>,
    /// The plan the item was generated for, if any.
    pub plan: Option<Plan>,
    /// Whether this is a proration.
    pub proration: Option<bool>,
    /// Quantity of units.
    pub quantity: Option<u64>,
    /// The subscription the item was generated for, if any.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub subscription: Expandable<Subscription>,
    /// Tax rates applied to the item.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_rates: Vec<TaxRate>,
    /// Unit amount in minor units.
    pub unit_amount: Option<i64>,
    /// Unit amount in minor units, with up to 12 decimal places.
    #[serde_as(as = "Option<ExactDecimal>")]
    pub unit_amount_decimal: Option<Decimal>,
}

impl Object for InvoiceItem {
    const OBJECT: &'static str = "invoiceitem";

    fn id(&self) -> &str {
        &self.id
    }
}

impl InvoiceItem {
    /// Whether the item has been attached to an invoice.
    #[must_use]
    pub const fn is_invoiced(&self) -> bool {
        !self.invoice.is_absent()
    }
}

/// A page of invoice items.
pub type InvoiceItemList = List<InvoiceItem>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stripekit_proto::{DecoderConfig, decode_str, decode_value};

    const INVOICE_ITEM: &str = r#"{
      "id": "ii_1BtydB2eZvKYlo2CzeKs27EC",
      "object": "invoiceitem",
      "amount": 2500,
      "currency": "usd",
      "customer": "cus_CIaBoYfVixDHWf",
      "date": 1518270185,
      "description": "One-time setup fee",
      "discountable": true,
      "invoice": "in_1BtydF2eZvKYlo2COZpiUqSi",
      "livemode": false,
      "metadata": {
      },
      "period": {
        "start": 1518270185,
        "end": 1518270185
      },
      "plan": null,
      "proration": false,
      "quantity": null,
      "subscription": null
    }"#;

    #[test]
    fn test_invoice_item_tax_rates() {
        let mut doc: serde_json::Value = serde_json::from_str(INVOICE_ITEM).unwrap();
        doc["tax_rates"] = json!([
            {
                "id": "txr_1",
                "object": "tax_rate",
                "created": 1518270000,
                "display_name": "VAT",
                "inclusive": true,
                "percentage": "20.0"
            },
            {
                "id": "txr_2",
                "object": "tax_rate",
                "created": 1518270001,
                "percentage": 8.875
            }
        ]);

        let item: InvoiceItem = decode_value(&doc).unwrap();
        assert_eq!(item.tax_rates.len(), 2);
        assert_eq!(item.tax_rates[0].id, "txr_1");
        assert_eq!(item.tax_rates[0].inclusive, Some(true));
        assert_eq!(item.tax_rates[0].percentage, Some(Decimal::from(20)));
        assert_eq!(item.tax_rates[1].percentage, Some(Decimal::new(8875, 3)));

        doc["tax_rates"][1]["percentage"] = json!("eight");
        let err = decode_value::<InvoiceItem>(&doc).unwrap_err();
        assert_eq!(err.path(), Some("tax_rates[1].percentage"));
    }

    #[test]
    fn test_invoice_item_decode_sample() {
        let item: InvoiceItem = decode_str(INVOICE_ITEM, &DecoderConfig::default()).unwrap();

        assert_eq!(item.id, "ii_1BtydB2eZvKYlo2CzeKs27EC");
        assert_eq!(item.object, InvoiceItem::OBJECT);
        assert_eq!(item.amount, Some(2500));
        assert_eq!(item.currency, Some(Currency::USD));
        assert_eq!(item.customer.id(), Some("cus_CIaBoYfVixDHWf"));
        assert_eq!(item.date.as_secs(), 1_518_270_185);
        assert_eq!(item.description.as_deref(), Some("One-time setup fee"));
        assert_eq!(item.discountable, Some(true));
        assert_eq!(item.invoice.id(), Some("in_1BtydF2eZvKYlo2COZpiUqSi"));
        assert!(item.is_invoiced());
        assert_eq!(item.livemode, Some(false));
        assert_eq!(item.proration, Some(false));
        assert!(item.metadata.is_empty());

        let period = item.period.unwrap();
        assert_eq!(period.start, item.date);
        assert_eq!(period.end, item.date);
    }

    #[test]
    fn test_invoice_item_nulls_are_empty() {
        let item: InvoiceItem = decode_str(INVOICE_ITEM, &DecoderConfig::default()).unwrap();
        assert_eq!(item.plan, None);
        assert_eq!(item.quantity, None);
        assert!(item.subscription.is_absent());
        assert!(item.tax_rates.is_empty());
        assert_eq!(item.unit_amount_decimal, None);
    }

    #[test]
    fn test_invoice_item_expanded_invoice() {
        let mut doc: serde_json::Value = serde_json::from_str(INVOICE_ITEM).unwrap();
        doc["invoice"] = json!({
            "id": "in_1BtydF2eZvKYlo2COZpiUqSi",
            "object": "invoice",
            "created": 1518270190,
            "status": "draft"
        });
        doc["unit_amount_decimal"] = json!("2500.125");

        let item: InvoiceItem = decode_value(&doc).unwrap();
        assert!(item.invoice.is_expanded());
        assert_eq!(item.invoice.id(), Some("in_1BtydF2eZvKYlo2COZpiUqSi"));
        assert_eq!(item.unit_amount_decimal, Some(Decimal::new(2_500_125, 3)));

        let invoice = item.invoice.into_object().unwrap();
        assert_eq!(invoice.created.as_secs(), 1_518_270_190);
    }

    #[test]
    fn test_invoice_item_pending() {
        let item: InvoiceItem = decode_str(
            r#"{"id": "ii_2", "object": "invoiceitem", "date": 1, "invoice": null}"#,
            &DecoderConfig::default(),
        )
        .unwrap();
        assert!(!item.is_invoiced());
    }
}
