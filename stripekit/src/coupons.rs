//! Coupons and the discounts they produce.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use stripekit_proto::{Currency, ExactDecimal, Expandable, List, Metadata, Object, Timestamp};

use crate::customers::Customer;

/// The [Coupon object](https://stripe.com/docs/api/coupons/object).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"coupon"`.
    pub object: String,
    /// Time at which the object was created.
    pub created: Timestamp,
    /// Amount in minor units taken off the subtotal.
    pub amount_off: Option<i64>,
    /// Currency of `amount_off`.
    pub currency: Option<Currency>,
    /// How long a customer who applies this coupon gets the discount.
    pub duration: Option<CouponDuration>,
    /// Number of months the coupon applies for, when `duration` is `repeating`.
    pub duration_in_months: Option<u32>,
    /// `true` in live mode, `false` in test mode.
    pub livemode: Option<bool>,
    /// Maximum number of times the coupon can be redeemed.
    pub max_redemptions: Option<u64>,
    /// Free-form key/value pairs.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Metadata,
    /// Name shown to customers on invoices and receipts.
    pub name: Option<String>,
    /// Percent taken off the subtotal, e.g. `12.5`.
    #[serde_as(as = "Option<ExactDecimal>")]
    pub percent_off: Option<Decimal>,
    /// Date after which the coupon can no longer be redeemed.
    pub redeem_by: Option<Timestamp>,
    /// Number of times the coupon has been applied.
    pub times_redeemed: Option<u64>,
    /// Whether the coupon can still be applied.
    pub valid: Option<bool>,
}

impl Object for Coupon {
    const OBJECT: &'static str = "coupon";

    fn id(&self) -> &str {
        &self.id
    }
}

/// How long a coupon's discount lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponDuration {
    /// Applies to every invoice.
    Forever,
    /// Applies to the first invoice only.
    Once,
    /// Applies for `duration_in_months`.
    Repeating,
}

/// The [Discount object](https://stripe.com/docs/api/discounts/object): a
/// coupon applied to a customer, subscription or invoice.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Unique identifier for the object.
    pub id: String,
    /// Always `"discount"`.
    pub object: String,
    /// The applied coupon. Always sent expanded.
    pub coupon: Option<Coupon>,
    /// The customer the discount is attached to.
    #[serde(default, skip_serializing_if = "Expandable::is_absent")]
    pub customer: Expandable<Customer>,
    /// When the discount ends, for coupons with a limited duration.
    pub end: Option<Timestamp>,
    /// The invoice the discount was applied to, if any.
    pub invoice: Option<String>,
    /// The invoice item the discount was applied to, if any.
    pub invoice_item: Option<String>,
    /// When the discount started.
    pub start: Option<Timestamp>,
    /// The subscription the discount is attached to, if any.
    pub subscription: Option<String>,
}

impl Object for Discount {
    const OBJECT: &'static str = "discount";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A page of coupons.
pub type CouponList = List<Coupon>;

#[cfg(test)]
mod tests {
    use super::*;
    use stripekit_proto::{DecoderConfig, decode_str};

    #[test]
    fn test_coupon_percent_off_is_exact() {
        let coupon: Coupon = decode_str(
            r#"{
                "id": "25_5OFF",
                "object": "coupon",
                "created": 1700000000,
                "duration": "repeating",
                "duration_in_months": 3,
                "percent_off": 25.5,
                "valid": true
            }"#,
            &DecoderConfig::default(),
        )
        .unwrap();
        assert_eq!(coupon.percent_off, Some(Decimal::new(255, 1)));
        assert_eq!(coupon.duration, Some(CouponDuration::Repeating));
        assert_eq!(coupon.duration_in_months, Some(3));
        assert_eq!(coupon.amount_off, None);
    }

    #[test]
    fn test_discount_with_expanded_coupon() {
        let discount: Discount = decode_str(
            r#"{
                "id": "di_1",
                "object": "discount",
                "coupon": {"id": "FREE", "object": "coupon", "created": 1, "amount_off": 500, "currency": "usd"},
                "customer": "cus_1",
                "start": 1700000000,
                "end": null
            }"#,
            &DecoderConfig::default(),
        )
        .unwrap();
        let coupon = discount.coupon.as_ref().unwrap();
        assert_eq!(coupon.amount_off, Some(500));
        assert_eq!(coupon.currency, Some(Currency::USD));
        assert_eq!(discount.customer.id(), Some("cus_1"));
        assert_eq!(discount.end, None);
    }
}
