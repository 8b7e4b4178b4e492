//! OBJECT combinator - closed object literals with required and optional fields
//!
//! An [`ObjectLiteral`] pairs every declared field name with a rule and
//! rejects any key it does not declare.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard::prelude::*;
//!
//! let user = ObjectLiteral::new()
//!     .field("name", string())
//!     .optional_field("nick", string());
//!
//! let data: Value = [("name", Value::from("Ada"))].into_iter().collect();
//! assert!(user.accepts(&data));
//! ```

use crate::foundation::{BoxedRule, Outcome, Rule, RuleExt, Value};
use indexmap::{IndexMap, IndexSet};

// ============================================================================
// OBJECT LITERAL COMBINATOR
// ============================================================================

/// Validates objects with a fixed set of named fields.
///
/// Validation runs in two passes:
///
/// 1. Every key present in the input must be declared, and its value must
///    satisfy the declared rule. An unknown key or a failing value stops
///    validation immediately.
/// 2. Every declared key that is not optional must be present.
///
/// Optional keys only waive presence: a present optional key is still
/// checked against its rule.
#[derive(Default)]
pub struct ObjectLiteral {
    fields: IndexMap<String, BoxedRule>,
    optional: IndexSet<String>,
}

impl ObjectLiteral {
    /// Creates an object rule with no fields, which accepts only `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object rule from `(name, rule)` pairs. All fields are
    /// required until [`with_optional_keys`](Self::with_optional_keys) says
    /// otherwise.
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, BoxedRule)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, rule)| (k.into(), rule)).collect(),
            optional: IndexSet::new(),
        }
    }

    /// Declares a required field. Redeclaring a name replaces its rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<R>(mut self, name: impl Into<String>, rule: R) -> Self
    where
        R: Rule + Send + Sync + 'static,
    {
        self.fields.insert(name.into(), rule.boxed());
        self
    }

    /// Declares a field that may be absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional_field<R>(mut self, name: impl Into<String>, rule: R) -> Self
    where
        R: Rule + Send + Sync + 'static,
    {
        let name = name.into();
        self.optional.insert(name.clone());
        self.fields.insert(name, rule.boxed());
        self
    }

    /// Marks the given keys as optional.
    ///
    /// Keys that are not declared as fields stay unknown: their presence in
    /// the input is still rejected.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_optional_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.optional.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Returns true if `name` is declared.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns true if `name` may be absent.
    pub fn is_optional(&self, name: &str) -> bool {
        self.optional.contains(name)
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Rule for ObjectLiteral {
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        let Value::Object(entries) = data else {
            return Outcome::Ng;
        };

        for (key, value) in entries {
            let Some(rule) = self.fields.get(key) else {
                tracing::trace!(key = key.as_str(), "object rejected unknown key");
                return Outcome::Ng;
            };
            if rule.validate(value).is_ng() {
                tracing::trace!(key = key.as_str(), "object field rejected");
                return Outcome::Ng;
            }
        }

        for key in self.fields.keys() {
            if !entries.contains_key(key) && !self.optional.contains(key) {
                tracing::trace!(key = key.as_str(), "object missing required key");
                return Outcome::Ng;
            }
        }

        Outcome::Ok(data)
    }
}

impl std::fmt::Debug for ObjectLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.field_names().collect();
        f.debug_struct("ObjectLiteral")
            .field("fields", &fields)
            .field("optional", &self.optional)
            .finish()
    }
}

/// Creates an OBJECT combinator with all fields required.
pub fn object_literal<I, K>(fields: I) -> ObjectLiteral
where
    I: IntoIterator<Item = (K, BoxedRule)>,
    K: Into<String>,
{
    ObjectLiteral::from_fields(fields)
}

// ============================================================================
// TESTS
// ============================================================================
