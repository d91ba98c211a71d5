//! Decoder configuration.
//!
//! Passed explicitly to every decode call; there is no global decoder state.

use serde::{Deserialize, Serialize};

/// Default upper bound on a response body, in bytes.
pub const DEFAULT_MAX_BODY_SIZE: usize = 65_536;

/// Settings applied to a single decode call.
///
/// # Example
///
/// ```rust
/// use stripekit_proto::DecoderConfig;
///
/// let config = DecoderConfig::default().with_max_body_size(1 << 20);
/// assert_eq!(config.max_body_size, 1_048_576);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Documents larger than this are rejected before parsing.
    /// Defaults to [`DEFAULT_MAX_BODY_SIZE`].
    pub max_body_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl DecoderConfig {
    /// Sets the maximum accepted document size.
    #[must_use]
    pub const fn with_max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }
}
