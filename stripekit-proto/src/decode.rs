//! Decode entry points.
//!
//! A decode consumes one complete JSON document and produces one record or
//! fails as a whole. The document is parsed into a [`Value`] first, so
//! malformed JSON is reported as [`DecodeError::Json`] before any field is
//! looked at, then the target type is built from it while tracking the path
//! of every nested value for diagnostics.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{DecodeError, DecoderConfig};

#[cfg(feature = "telemetry")]
use tracing::debug_span;

/// Decodes a resource, list or any other wire type from raw response bytes.
///
/// # Errors
///
/// Returns [`DecodeError::TooLarge`] when `bytes` exceeds
/// [`DecoderConfig::max_body_size`], [`DecodeError::Json`] when it is not
/// valid JSON, and one of the field-level variants when the document does
/// not match `T`.
pub fn decode<T: DeserializeOwned>(
    bytes: &[u8],
    config: &DecoderConfig,
) -> Result<T, DecodeError> {
    #[cfg(feature = "telemetry")]
    let _span = debug_span!(
        "stripekit.decode",
        resource = std::any::type_name::<T>(),
        size = bytes.len()
    )
    .entered();

    let result = decode_bytes(bytes, config);
    record_result(&result);
    result
}

/// Decodes from a string slice. See [`decode`].
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_str<T: DeserializeOwned>(
    document: &str,
    config: &DecoderConfig,
) -> Result<T, DecodeError> {
    decode(document.as_bytes(), config)
}

/// Decodes from an already parsed document.
///
/// No size limit applies, the document having been materialized by the
/// caller.
///
/// # Errors
///
/// Returns a field-level [`DecodeError`] when the document does not match `T`.
pub fn decode_value<T: DeserializeOwned>(document: &Value) -> Result<T, DecodeError> {
    serde_path_to_error::deserialize(document).map_err(DecodeError::from)
}

fn decode_bytes<T: DeserializeOwned>(
    bytes: &[u8],
    config: &DecoderConfig,
) -> Result<T, DecodeError> {
    if bytes.len() > config.max_body_size {
        return Err(DecodeError::TooLarge {
            size: bytes.len(),
            limit: config.max_body_size,
        });
    }
    let document: Value = serde_json::from_slice(bytes)?;
    decode_value(&document)
}

/// Emits a debug event for a failed decode.
#[cfg(feature = "telemetry")]
fn record_result<T>(result: &Result<T, DecodeError>) {
    if let Err(err) = result {
        tracing::debug!(error = %err, path = ?err.path(), "decode failed");
    }
}

/// Emits a debug event for a failed decode.
/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result<T>(_result: &Result<T, DecodeError>) {}
