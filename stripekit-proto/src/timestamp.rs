//! Unix timestamps as the Stripe API renders them.
//!
//! Every date the platform returns (`created`, `period_end`, `trial_end`, ...)
//! is an integer count of seconds since the Unix epoch. [`Timestamp`] turns
//! that integer into an absolute UTC instant with second precision.

use chrono::{DateTime, SubsecRound, Utc};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::time::SystemTime;

/// An absolute instant with second precision, always in UTC.
///
/// # Serialization
///
/// Encoded on the wire as a bare integer of seconds since
/// 1970-01-01T00:00:00Z:
///
/// ```json
/// 1516918659
/// ```
///
/// Strings, floats and other JSON types are rejected rather than coerced.
/// This includes integral floats such as `1234567890.0`, which the API
/// never emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_secs())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        Self::from_secs(secs).ok_or_else(|| {
            de::Error::invalid_value(
                Unexpected::Signed(secs),
                &"seconds since the Unix epoch within the supported date range",
            )
        })
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(0))
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl From<Timestamp> for SystemTime {
    fn from(value: Timestamp) -> Self {
        value.0.into()
    }
}

impl Timestamp {
    /// Creates a [`Timestamp`] from raw seconds since the Unix epoch.
    ///
    /// Returns `None` when the value lies outside the representable range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Returns the timestamp as raw seconds since the Unix epoch.
    #[must_use]
    pub fn as_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns the instant as a [`chrono`] UTC date-time.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}
