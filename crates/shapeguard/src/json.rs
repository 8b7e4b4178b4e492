//! JSON bridge between `serde_json::Value` and [`Value`].
//!
//! JSON is a strict subset of what [`Value`] can hold: every JSON document
//! converts, but `undefined`, symbols, non-finite numbers and big integers
//! outside the 64-bit range have no JSON encoding.
//!
//! JSON numbers always become [`Value::Number`]; there is no way to produce a
//! big integer from JSON text. Object key order is preserved.
//!
//! # Examples
//!
//! ```
//! use shapeguard::json::validate_json;
//! use shapeguard::prelude::*;
//! use serde_json::json;
//!
//! let rule = dictionary_of(number());
//! assert!(validate_json(&rule, &json!({"a": 1, "b": 2.5})).is_ok());
//! assert!(validate_json(&rule, &json!({"a": "1"})).is_ng());
//! ```

use crate::foundation::{Map, Outcome, Rule, Value, ValueKind};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Error converting between [`Value`] and JSON.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValueError {
    /// JSON text could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The value kind has no JSON encoding.
    #[error("{kind} has no JSON representation")]
    Unrepresentable { kind: ValueKind },

    /// NaN or an infinity.
    #[error("non-finite number has no JSON representation")]
    NonFiniteNumber,

    /// Big integer outside the `i64`/`u64` range.
    #[error("bigint {0} is outside the JSON integer range")]
    BigIntOutOfRange(i128),
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => number_from_json(&n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => {
                Self::Object(entries.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Number(n) => number_from_json(n),
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
            serde_json::Value::Object(entries) => Self::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_from_json(n: &serde_json::Number) -> Value {
    Value::Number(n.as_f64().unwrap_or(f64::NAN))
}

impl Value {
    /// Parses JSON text into a value.
    pub fn from_json_str(text: &str) -> Result<Self, ValueError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(json.into())
    }

    /// Encodes this value as JSON.
    ///
    /// Fails on `undefined` and symbols anywhere in the tree, on non-finite
    /// numbers and on big integers that do not fit a 64-bit integer.
    pub fn to_json(&self) -> Result<serde_json::Value, ValueError> {
        Ok(match self {
            Self::Undefined | Self::Symbol(_) => {
                return Err(ValueError::Unrepresentable { kind: self.kind() });
            }
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => number_to_json(*n)?,
            Self::BigInt(n) => bigint_to_json(*n)?,
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::Array(items) => serde_json::Value::Array(
                items.iter().map(Self::to_json).collect::<Result<_, _>>()?,
            ),
            Self::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), v.to_json()?)))
                    .collect::<Result<_, ValueError>>()?,
            ),
        })
    }
}

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn integral(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER).then_some(n as i64)
}

// Integral numbers encode without a fractional part, as `1` rather than `1.0`.
fn number_to_json(n: f64) -> Result<serde_json::Value, ValueError> {
    if let Some(int) = integral(n) {
        return Ok(int.into());
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .ok_or(ValueError::NonFiniteNumber)
}

fn bigint_to_json(n: i128) -> Result<serde_json::Value, ValueError> {
    if let Ok(small) = i64::try_from(n) {
        return Ok(small.into());
    }
    u64::try_from(n)
        .map(Into::into)
        .map_err(|_| ValueError::BigIntOutOfRange(n))
}

/// Validates a JSON document against `rule`.
///
/// On success the outcome owns the converted value.
pub fn validate_json<R>(rule: &R, json: &serde_json::Value) -> Outcome<Value>
where
    R: Rule + ?Sized,
{
    let value = Value::from(json);
    if rule.validate(&value).is_ng() {
        tracing::trace!(rule = rule.name(), "JSON document rejected");
        return Outcome::Ng;
    }
    Outcome::Ok(value)
}

// ============================================================================
// SERDE
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Symbol(_) => Err(ser::Error::custom(
                ValueError::Unrepresentable { kind: self.kind() },
            )),
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if !n.is_finite() => {
                Err(ser::Error::custom(ValueError::NonFiniteNumber))
            }
            Self::Number(n) => match integral(*n) {
                Some(int) => serializer.serialize_i64(int),
                None => serializer.serialize_f64(*n),
            },
            Self::BigInt(n) => {
                if let Ok(small) = i64::try_from(*n) {
                    serializer.serialize_i64(small)
                } else if let Ok(large) = u64::try_from(*n) {
                    serializer.serialize_u64(large)
                } else {
                    Err(ser::Error::custom(ValueError::BigIntOutOfRange(*n)))
                }
            }
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON-like value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Value, E> {
        Ok(Value::BigInt(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut entries = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((k, v)) = access.next_entry::<String, Value>()? {
            entries.insert(k, v);
        }
        Ok(Value::Object(entries))
    }
}

// ============================================================================
// TESTS
// ============================================================================
