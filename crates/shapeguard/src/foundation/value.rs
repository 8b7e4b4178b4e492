//! The untyped input surface.
//!
//! Rules validate [`Value`], a closed sum type covering every kind of data a
//! rule can be handed at a language boundary. Composite rules pattern-match on
//! the variant before recursing into children.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard::foundation::{Value, ValueKind};
//!
//! let v = Value::from("hello");
//! assert_eq!(v.kind(), ValueKind::String);
//! assert_eq!(v.kind().as_str(), "string");
//! ```

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Keyed container used by [`Value::Object`].
///
/// Keys enumerate in insertion order.
pub type Map = IndexMap<String, Value>;

// ============================================================================
// VALUE
// ============================================================================

/// Any value a rule can be asked to validate.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,

    /// Explicit null.
    Null,

    /// Boolean value.
    Bool(bool),

    /// IEEE-754 double, the only number kind.
    Number(f64),

    /// Arbitrary-width integer kind, distinct from [`Value::Number`].
    BigInt(i128),

    /// UTF-8 string.
    String(String),

    /// Opaque atom compared by identity.
    Symbol(Symbol),

    /// Ordered sequence.
    Array(Vec<Value>),

    /// String-keyed container.
    Object(Map),
}

impl Value {
    // ==================== Constructors ====================

    /// Creates a big-integer value.
    pub const fn bigint(v: i128) -> Self {
        Self::BigInt(v)
    }

    /// Creates a fresh symbol with the given description.
    pub fn symbol(description: impl AsRef<str>) -> Self {
        Self::Symbol(Symbol::new(description))
    }

    /// Creates an empty array.
    pub fn array_empty() -> Self {
        Self::Array(Vec::new())
    }

    /// Creates an empty object.
    pub fn object_empty() -> Self {
        Self::Object(Map::new())
    }

    // ==================== Type queries ====================

    /// Returns the kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::BigInt(_) => ValueKind::BigInt,
            Self::String(_) => ValueKind::String,
            Self::Symbol(_) => ValueKind::Symbol,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for both `Null` and `Undefined` (loose null equality).
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    #[inline]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    #[inline]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[inline]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, Self::BigInt(_))
    }

    #[inline]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    #[inline]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    #[inline]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[inline]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    // ==================== Accessors ====================

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_bigint(&self) -> Option<i128> {
        match self {
            Self::BigInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key on an object value. Non-objects have no keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

// ==================== Conversions ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Symbol> for Value {
    fn from(v: Symbol) -> Self {
        Self::Symbol(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` maps to `Undefined`.
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ============================================================================
// SYMBOL
// ============================================================================

/// An opaque atom. Two symbols are equal only if they are the same symbol,
/// regardless of description; clones share identity.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a new, unique symbol.
    ///
    /// The description is copied into a fresh allocation, so two symbols never
    /// share identity unless one is a clone of the other.
    pub fn new(description: impl AsRef<str>) -> Self {
        Self(Arc::from(description.as_ref()))
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Lightweight classification of a [`Value`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Array,
    Object,
}

impl ValueKind {
    /// `typeof`-style name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Returns true for kinds that hold child values.
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Undefined.kind().as_str(), "undefined");
        assert_eq!(Value::from(1.5).kind().as_str(), "number");
        assert_eq!(Value::bigint(7).kind().as_str(), "bigint");
        assert_eq!(Value::array_empty().kind(), ValueKind::Array);
        assert_eq!(ValueKind::Object.to_string(), "object");
    }

    #[test]
    fn test_nullish() {
        assert!(Value::Null.is_nullish());
        assert!(Value::Undefined.is_nullish());
        assert!(!Value::from(false).is_nullish());
        assert!(!Value::from(0).is_nullish());
    }

    #[test]
    fn test_symbol_identity() {
        let a = Symbol::new("tag");
        let b = Symbol::new("tag");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.description(), "tag");
    }

    #[test]
    fn test_symbols_from_shared_description_are_distinct() {
        let description: Arc<str> = Arc::from("tag");
        let a = Symbol::new(Arc::clone(&description));
        let b = Symbol::new(description);
        assert_ne!(a, b);
        assert_ne!(Value::Symbol(a.clone()), Value::Symbol(b));
        assert_eq!(Value::Symbol(a.clone()), Value::Symbol(a));
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let v: Value = [("z", Value::from(1)), ("a", Value::from(2))]
            .into_iter()
            .collect();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a"]);
        assert_eq!(v.get("a"), Some(&Value::from(2)));
        assert_eq!(Value::from("x").get("a"), None);
    }

    #[test]
    fn test_option_maps_none_to_undefined() {
        assert_eq!(Value::from(None::<bool>), Value::Undefined);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }
}
