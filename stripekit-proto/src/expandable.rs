//! Expandable references between resources.
//!
//! A field like `invoice.customer` is rendered as `"cus_123"` by default and
//! as the full customer object when the caller asked for
//! `expand[]=customer`. The request that produced a document is invisible to
//! the decoder, so [`Expandable`] decides purely from the JSON value's shape:
//!
//! | Wire value          | Decoded as                  |
//! |---------------------|-----------------------------|
//! | missing or `null`   | [`Expandable::Absent`]      |
//! | `"cus_123"`         | [`Expandable::Id`]          |
//! | `{"id": "cus_123"}` | [`Expandable::Object`]      |
//! | anything else       | decoding error              |

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::Object;

/// A reference to another resource, either as a bare id or fully expanded.
///
/// Use [`Expandable::id`] to get the identifier regardless of how the
/// reference was rendered, and [`Expandable::object`] to reach the nested
/// record when it was expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expandable<T> {
    /// The field was missing or `null`.
    Absent,
    /// Only the identifier was sent.
    Id(String),
    /// The referenced resource was expanded inline.
    Object(Box<T>),
}

impl<T> Default for Expandable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Expandable<T> {
    /// Returns the identifier of the referenced resource.
    ///
    /// For an expanded reference this is the nested record's own `id`.
    #[must_use]
    pub fn id(&self) -> Option<&str>
    where
        T: Object,
    {
        match self {
            Self::Absent => None,
            Self::Id(id) => Some(id),
            Self::Object(object) => Some(object.id()),
        }
    }

    /// Returns the expanded record, if the reference was expanded.
    #[must_use]
    pub fn object(&self) -> Option<&T> {
        match self {
            Self::Object(object) => Some(object),
            Self::Absent | Self::Id(_) => None,
        }
    }

    /// Consumes the reference, returning the expanded record if present.
    #[must_use]
    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Object(object) => Some(*object),
            Self::Absent | Self::Id(_) => None,
        }
    }

    /// Whether the field was missing or `null`.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the referenced resource was expanded inline.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl<T> From<String> for Expandable<T> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl<T: Serialize> Serialize for Expandable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Id(id) => serializer.serialize_str(id),
            Self::Object(object) => object.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Expandable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}

struct ExpandableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ExpandableVisitor<T> {
    type Value = Expandable<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object id, an expanded object, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Expandable::Id(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Expandable::Id(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Expandable::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Expandable::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map))
            .map(|object| Expandable::Object(Box::new(object)))
    }
}
