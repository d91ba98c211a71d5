#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Wire-level decoding primitives for Stripe API resources.
//!
//! This crate holds the pieces every resource model is built from. It has no
//! knowledge of individual resources; those live in the `stripekit` crate.
//!
//! # Modules
//!
//! - [`timestamp`] - Seconds-since-epoch dates as UTC instants
//! - [`currency`] - Validated ISO 4217 codes and minor-unit conversion
//! - [`decimal`] - Exact decimal coercion for fractional amounts
//! - [`expandable`] - Fields rendered as either an id or a nested object
//! - [`list`] - The paginated list envelope
//! - [`config`] - Per-call decoder settings
//! - [`decode`] - Decode entry points
//! - [`error`] - The decoding error taxonomy
//!
//! # Feature Flags
//!
//! - `telemetry` - Wraps each decode in a `tracing` span and reports failures

pub mod config;
pub mod currency;
pub mod decimal;
pub mod decode;
pub mod error;
pub mod expandable;
pub mod list;
pub mod timestamp;

use std::collections::HashMap;

pub use config::{DEFAULT_MAX_BODY_SIZE, DecoderConfig};
pub use currency::{Currency, CurrencyCodeError};
pub use decimal::ExactDecimal;
pub use decode::{decode, decode_str, decode_value};
pub use error::DecodeError;
pub use expandable::Expandable;
pub use list::List;
pub use timestamp::Timestamp;

/// Free-form key/value pairs attached to a resource.
pub type Metadata = HashMap<String, String>;

/// A top-level API resource with its own identifier.
///
/// Implemented by every record that can appear behind an [`Expandable`]
/// reference or inside a [`List`].
pub trait Object {
    /// The resource's wire `object` tag, e.g. `"invoice"`.
    const OBJECT: &'static str;

    /// The resource's unique identifier.
    fn id(&self) -> &str;
}
