#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Typed Stripe API resources.
//!
//! This crate models the billing resources returned by the Stripe REST API
//! and decodes them from JSON response bodies. It performs no I/O: callers
//! hand it the bytes of a response and get back a typed record or a
//! [`DecodeError`] naming the offending field.
//!
//! # Overview
//!
//! Related resources are linked through [`Expandable`] fields, which hold a
//! bare identifier by default and the full nested record when the request
//! asked for it to be expanded. Timestamps decode into [`Timestamp`],
//! currency codes into [`Currency`], and fractional quantities such as
//! percentages into exact [`rust_decimal::Decimal`] values.
//!
//! ```
//! use stripekit::{DecoderConfig, decode_str, invoices::Invoice};
//!
//! let invoice: Invoice = decode_str(
//!     r#"{"id": "in_1", "object": "invoice", "created": 1700000000, "customer": "cus_1"}"#,
//!     &DecoderConfig::default(),
//! )?;
//! assert_eq!(invoice.customer.id(), Some("cus_1"));
//! # Ok::<(), stripekit::DecodeError>(())
//! ```
//!
//! # Modules
//!
//! - [`customers`] - Customers
//! - [`payment_methods`] - Payment methods
//! - [`coupons`] - Coupons and discounts
//! - [`tax_rates`] - Tax rates
//! - [`plans`] - Plans
//! - [`subscriptions`] - Subscriptions
//! - [`subscription_schedules`] - Subscription schedules and their phases
//! - [`invoices`] - Invoices and line items
//! - [`invoice_items`] - Invoice items
//!
//! # Feature Flags
//!
//! - `telemetry` - Wraps each decode in a `tracing` span

pub mod coupons;
pub mod customers;
pub mod invoice_items;
pub mod invoices;
pub mod payment_methods;
pub mod plans;
pub mod subscription_schedules;
pub mod subscriptions;
pub mod tax_rates;

pub use stripekit_proto::{
    Currency, DecodeError, DecoderConfig, ExactDecimal, Expandable, List, Metadata, Object,
    Timestamp, decode, decode_str, decode_value,
};

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::invoices::Invoice;
    use crate::subscription_schedules::SubscriptionSchedule;

    fn invoice_doc(created: i64, customer: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "in_prop",
            "object": "invoice",
            "created": created,
            "customer": customer,
            "amount_due": 1250,
            "currency": "eur",
            "status": "paid"
        })
    }

    proptest! {
        #[test]
        fn test_timestamp_decodes_exact_second(secs in -8_000_000_000i64..8_000_000_000) {
            let invoice: Invoice = decode_value(&invoice_doc(secs, json!(null))).unwrap();
            prop_assert_eq!(invoice.created.as_secs(), secs);
        }

        #[test]
        fn test_bare_reference_yields_id(id in "cus_[A-Za-z0-9]{1,24}") {
            let invoice: Invoice = decode_value(&invoice_doc(0, json!(id.clone()))).unwrap();
            prop_assert!(!invoice.customer.is_expanded());
            prop_assert_eq!(invoice.customer.id(), Some(id.as_str()));
        }

        #[test]
        fn test_expanded_reference_yields_same_id(id in "cus_[A-Za-z0-9]{1,24}") {
            let customer = json!({"id": id.clone(), "object": "customer", "created": 1});
            let invoice: Invoice = decode_value(&invoice_doc(0, customer)).unwrap();
            prop_assert!(invoice.customer.is_expanded());
            prop_assert_eq!(invoice.customer.id(), Some(id.as_str()));
        }

        #[test]
        fn test_decode_is_pure(secs in 0i64..4_000_000_000, expanded in any::<bool>()) {
            let customer = if expanded {
                json!({"id": "cus_1", "object": "customer", "created": secs})
            } else {
                json!("cus_1")
            };
            let bytes = serde_json::to_vec(&invoice_doc(secs, customer)).unwrap();
            let config = DecoderConfig::default();

            let first: Invoice = decode(&bytes, &config).unwrap();
            let second: Invoice = decode(&bytes, &config).unwrap();
            prop_assert_eq!(&first, &second);

            let reencoded = serde_json::to_vec(&first).unwrap();
            let third: Invoice = decode(&reencoded, &config).unwrap();
            prop_assert_eq!(first, third);
        }

        #[test]
        fn test_phase_order_preserved(starts in proptest::collection::vec(0i64..4_000_000_000, 0..12)) {
            let phases: Vec<_> = starts.iter().map(|start| json!({"start_date": start})).collect();
            let schedule: SubscriptionSchedule = decode_value(&json!({
                "id": "sub_sched_prop",
                "object": "subscription_schedule",
                "created": 0,
                "phases": phases
            }))
            .unwrap();
            let decoded: Vec<_> = schedule
                .phases
                .iter()
                .map(|phase| phase.start_date.unwrap().as_secs())
                .collect();
            prop_assert_eq!(decoded, starts);
        }
    }

    #[test]
    fn test_list_of_invoices_next_cursor() {
        let page: invoices::InvoiceList = decode_str(
            r#"{
                "object": "list",
                "url": "/v1/invoices",
                "has_more": true,
                "data": [
                    {"id": "in_a", "object": "invoice", "created": 1},
                    {"id": "in_b", "object": "invoice", "date": 2}
                ]
            }"#,
            &DecoderConfig::default(),
        )
        .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.next_cursor(), Some("in_b"));
        assert_eq!(page.data[1].created.as_secs(), 2);
    }

    #[test]
    fn test_list_failure_names_element() {
        let err = decode_str::<invoices::InvoiceList>(
            r#"{
                "object": "list",
                "url": "/v1/invoices",
                "has_more": false,
                "data": [
                    {"id": "in_a", "object": "invoice", "created": 1},
                    {"id": "in_b", "object": "invoice", "created": 2, "status": "lost"}
                ]
            }"#,
            &DecoderConfig::default(),
        )
        .unwrap_err();
        assert!(err.is_unknown_variant());
        assert_eq!(err.path(), Some("data[1].status"));
    }
}
