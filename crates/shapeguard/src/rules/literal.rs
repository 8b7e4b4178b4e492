//! Literal rules
//!
//! A literal rule first checks the base kind of the input and then strict
//! equality with the expected value. Numbers compare as IEEE doubles, so a
//! `NaN` literal never matches and `0.0` matches `-0.0`.

use crate::foundation::{Outcome, Rule, Value};

/// The exact value a [`Literal`] expects.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    BigInt(i128),
}

impl From<&str> for LiteralValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for LiteralValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<f64> for LiteralValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for LiteralValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for LiteralValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

/// Accepts exactly one scalar value.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::prelude::*;
///
/// let tag = literal("abc");
/// assert!(tag.accepts(&Value::from("abc")));
/// assert!(!tag.accepts(&Value::from("ab")));
/// assert!(!tag.accepts(&Value::from(5)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    expected: LiteralValue,
}

impl Literal {
    pub fn new(expected: impl Into<LiteralValue>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Returns the value this rule expects.
    pub fn expected(&self) -> &LiteralValue {
        &self.expected
    }
}

impl Rule for Literal {
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        let matches = match (&self.expected, data) {
            (LiteralValue::String(expected), Value::String(actual)) => expected == actual,
            (LiteralValue::Number(expected), Value::Number(actual)) => expected == actual,
            (LiteralValue::Boolean(expected), Value::Bool(actual)) => expected == actual,
            (LiteralValue::BigInt(expected), Value::BigInt(actual)) => expected == actual,
            _ => false,
        };

        if matches { Outcome::Ok(data) } else { Outcome::Ng }
    }
}

/// Creates a literal rule for any supported scalar.
#[must_use]
pub fn literal(expected: impl Into<LiteralValue>) -> Literal {
    Literal::new(expected)
}

/// Creates a rule accepting exactly the given string.
#[must_use]
pub fn string_literal(expected: impl Into<String>) -> Literal {
    Literal::new(LiteralValue::String(expected.into()))
}

/// Creates a rule accepting exactly the given number.
#[must_use]
pub fn number_literal(expected: f64) -> Literal {
    Literal::new(LiteralValue::Number(expected))
}

/// Creates a rule accepting exactly the given boolean.
#[must_use]
pub fn boolean_literal(expected: bool) -> Literal {
    Literal::new(LiteralValue::Boolean(expected))
}

/// Creates a rule accepting exactly the given big integer.
#[must_use]
pub fn bigint_literal(expected: i128) -> Literal {
    Literal::new(LiteralValue::BigInt(expected))
}

/// Accepts only `true`.
#[must_use]
pub fn literal_true() -> Literal {
    boolean_literal(true)
}

/// Accepts only `false`.
#[must_use]
pub fn literal_false() -> Literal {
    boolean_literal(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleExt;

    #[test]
    fn test_string_literal() {
        let rule = literal("abc");
        assert!(rule.accepts(&Value::from("abc")));
        assert!(!rule.accepts(&Value::from("ab")));
        assert!(!rule.accepts(&Value::from(5)));
    }

    #[test]
    fn test_number_literal() {
        assert!(literal(5).accepts(&Value::from(5.0)));
        assert!(!literal(5).accepts(&Value::from("5")));
        assert!(!literal(5).accepts(&Value::bigint(5)));
        assert!(number_literal(0.0).accepts(&Value::from(-0.0)));
        assert!(!number_literal(f64::NAN).accepts(&Value::from(f64::NAN)));
    }

    #[test]
    fn test_boolean_literals() {
        assert!(literal_true().accepts(&Value::from(true)));
        assert!(!literal_true().accepts(&Value::from(false)));
        assert!(literal_false().accepts(&Value::from(false)));
        assert!(!literal_false().accepts(&Value::from(0)));
    }

    #[test]
    fn test_bigint_literal() {
        assert!(bigint_literal(42).accepts(&Value::bigint(42)));
        assert!(!bigint_literal(42).accepts(&Value::from(42)));
    }

    #[test]
    fn test_expected_accessor() {
        assert_eq!(literal(true).expected(), &LiteralValue::Boolean(true));
    }
}
