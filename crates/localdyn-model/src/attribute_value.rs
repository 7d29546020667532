//! `AttributeValue`: the closed set of value kinds an item attribute can hold.
//!
//! On the wire every value is a single-key object such as `{"S": "hello"}`.
//! Values read from callers are never stored directly: the store keeps a
//! [`AttributeValue::deep_copy`] so neither side can observe the other's
//! buffers afterwards.

use std::collections::HashMap;
use std::fmt;

use base64::Engine;
use bytes::Bytes;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An item attribute value.
///
/// Exactly one variant is populated by construction. Numbers stay
/// string-encoded to preserve arbitrary precision.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// String value.
    S(String),
    /// Number value (string-encoded).
    N(String),
    /// Binary value (base64-encoded in JSON).
    B(Bytes),
    /// String set.
    Ss(Vec<String>),
    /// Number set (string-encoded).
    Ns(Vec<String>),
    /// Binary set (base64-encoded in JSON).
    Bs(Vec<Bytes>),
    /// Boolean value.
    Bool(bool),
    /// Null marker. Only `Null(true)` is a meaningful value.
    Null(bool),
    /// Ordered list of values.
    L(Vec<AttributeValue>),
    /// Name to value mapping.
    M(HashMap<String, AttributeValue>),
}

/// Raised when a value carries no usable payload.
///
/// `Null(false)` and empty sets are representable on the wire but are not
/// values the store accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedAttributeValue {
    /// A `NULL` marker that is not `true`.
    #[error(
        "Supplied AttributeValue is empty, must contain exactly one of the supported datatypes"
    )]
    Empty,
    /// A string, number or binary set with no members.
    #[error("One or more parameter values were invalid: An {0} set may not be empty")]
    EmptySet(&'static str),
}

impl AttributeValue {
    /// Returns the string value if this is an `S` variant.
    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number string if this is an `N` variant.
    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            Self::N(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the bytes if this is a `B` variant.
    #[must_use]
    pub fn as_b(&self) -> Option<&Bytes> {
        match self {
            Self::B(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the map if this is an `M` variant.
    #[must_use]
    pub fn as_m(&self) -> Option<&HashMap<String, AttributeValue>> {
        match self {
            Self::M(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the list if this is an `L` variant.
    #[must_use]
    pub fn as_l(&self) -> Option<&[AttributeValue]> {
        match self {
            Self::L(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the type descriptor string (e.g. "S", "N", "BOOL").
    #[must_use]
    pub fn type_descriptor(&self) -> &'static str {
        match self {
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::B(_) => "B",
            Self::Ss(_) => "SS",
            Self::Ns(_) => "NS",
            Self::Bs(_) => "BS",
            Self::Bool(_) => "BOOL",
            Self::Null(_) => "NULL",
            Self::L(_) => "L",
            Self::M(_) => "M",
        }
    }

    /// Produces a fully independent copy of this value.
    ///
    /// Binary payloads are copied into fresh allocations rather than sharing
    /// the reference-counted buffer, and lists, maps and sets are copied
    /// recursively. Fails if this value or any nested value is malformed.
    pub fn deep_copy(&self) -> Result<Self, MalformedAttributeValue> {
        let copy = match self {
            Self::S(s) => Self::S(s.clone()),
            Self::N(n) => Self::N(n.clone()),
            Self::B(b) => Self::B(Bytes::copy_from_slice(b)),
            Self::Ss(v) => {
                ensure_non_empty(v, "string")?;
                Self::Ss(v.clone())
            }
            Self::Ns(v) => {
                ensure_non_empty(v, "number")?;
                Self::Ns(v.clone())
            }
            Self::Bs(v) => {
                ensure_non_empty(v, "binary")?;
                Self::Bs(v.iter().map(|b| Bytes::copy_from_slice(b)).collect())
            }
            Self::Bool(b) => Self::Bool(*b),
            Self::Null(true) => Self::Null(true),
            Self::Null(false) => return Err(MalformedAttributeValue::Empty),
            Self::L(list) => Self::L(
                list.iter()
                    .map(Self::deep_copy)
                    .collect::<Result<_, _>>()?,
            ),
            Self::M(map) => Self::M(deep_copy_map(map)?),
        };
        Ok(copy)
    }
}

/// Deep-copies every value of an attribute map.
pub fn deep_copy_map(
    map: &HashMap<String, AttributeValue>,
) -> Result<HashMap<String, AttributeValue>, MalformedAttributeValue> {
    map.iter()
        .map(|(name, value)| Ok((name.clone(), value.deep_copy()?)))
        .collect()
}

fn ensure_non_empty<T>(set: &[T], kind: &'static str) -> Result<(), MalformedAttributeValue> {
    if set.is_empty() {
        return Err(MalformedAttributeValue::EmptySet(kind));
    }
    Ok(())
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let engine = &base64::engine::general_purpose::STANDARD;
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::S(s) => map.serialize_entry("S", s)?,
            Self::N(n) => map.serialize_entry("N", n)?,
            Self::B(b) => map.serialize_entry("B", &engine.encode(b))?,
            Self::Ss(v) => map.serialize_entry("SS", v)?,
            Self::Ns(v) => map.serialize_entry("NS", v)?,
            Self::Bs(v) => {
                let encoded: Vec<String> = v.iter().map(|b| engine.encode(b)).collect();
                map.serialize_entry("BS", &encoded)?;
            }
            Self::Bool(b) => map.serialize_entry("BOOL", b)?,
            Self::Null(b) => map.serialize_entry("NULL", b)?,
            Self::L(list) => map.serialize_entry("L", list)?,
            Self::M(m) => map.serialize_entry("M", m)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributeValueVisitor)
    }
}

struct AttributeValueVisitor;

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an AttributeValue object with exactly one type key")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let engine = &base64::engine::general_purpose::STANDARD;
        let Some(key) = map.next_key::<String>()? else {
            return Err(de::Error::custom(MalformedAttributeValue::Empty));
        };

        let value = match key.as_str() {
            "S" => AttributeValue::S(map.next_value()?),
            "N" => AttributeValue::N(map.next_value()?),
            "B" => {
                let encoded: String = map.next_value()?;
                let decoded = engine.decode(&encoded).map_err(de::Error::custom)?;
                AttributeValue::B(Bytes::from(decoded))
            }
            "SS" => AttributeValue::Ss(map.next_value()?),
            "NS" => AttributeValue::Ns(map.next_value()?),
            "BS" => {
                let encoded: Vec<String> = map.next_value()?;
                let decoded = encoded
                    .iter()
                    .map(|e| engine.decode(e).map(Bytes::from))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(de::Error::custom)?;
                AttributeValue::Bs(decoded)
            }
            "BOOL" => AttributeValue::Bool(map.next_value()?),
            "NULL" => AttributeValue::Null(map.next_value()?),
            "L" => AttributeValue::L(map.next_value()?),
            "M" => AttributeValue::M(map.next_value()?),
            other => {
                return Err(de::Error::unknown_field(
                    other,
                    &["S", "N", "B", "SS", "NS", "BS", "BOOL", "NULL", "L", "M"],
                ));
            }
        };

        if map.next_key::<String>()?.is_some() {
            return Err(de::Error::custom(
                "AttributeValue must have exactly one type key",
            ));
        }

        Ok(value)
    }
}
