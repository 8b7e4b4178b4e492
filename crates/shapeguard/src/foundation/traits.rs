//! Core traits for the rule system
//!
//! This module defines the single-operation contract every rule implements,
//! primitive or composite, and the extension trait that layers convenience
//! methods on top of it.

use crate::foundation::{Outcome, Value};
use std::sync::Arc;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The contract every rule implements.
///
/// A rule is an opaque validator for one data shape. Callers only ever invoke
/// [`validate`](Rule::validate); on success the outcome points at the very
/// value that was passed in (no copy is made).
///
/// The trait is dyn-compatible, so heterogeneous children can be stored as
/// [`BoxedRule`] or [`SharedRule`].
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::foundation::{Outcome, Rule, Value};
///
/// struct NonEmptyString;
///
/// impl Rule for NonEmptyString {
///     fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
///         match data {
///             Value::String(s) if !s.is_empty() => Outcome::Ok(data),
///             _ => Outcome::Ng,
///         }
///     }
/// }
/// ```
pub trait Rule {
    /// Validates `data`, returning `Ok(data)` if it conforms and `Ng` otherwise.
    ///
    /// Must not panic on non-conforming input.
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value>;

    /// Returns the name of this rule.
    ///
    /// Used for debugging and log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Exclusively owned, type-erased rule.
pub type BoxedRule = Box<dyn Rule + Send + Sync>;

/// Shared, type-erased rule. Required for self-referential shapes.
pub type SharedRule = Arc<dyn Rule + Send + Sync>;

impl<R: Rule + ?Sized> Rule for &R {
    #[inline]
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        (**self).validate(data)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    #[inline]
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        (**self).validate(data)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    #[inline]
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        (**self).validate(data)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing convenience methods for rules.
///
/// Automatically implemented for every sized [`Rule`].
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::prelude::*;
///
/// let id = string().or(number());
/// assert!(id.accepts(&Value::from("a1")));
/// assert!(id.accepts(&Value::from(7)));
/// assert!(!id.accepts(&Value::Null));
/// ```
pub trait RuleExt: Rule + Sized {
    /// Type-guard form of [`Rule::validate`].
    fn accepts(&self, data: &Value) -> bool {
        self.validate(data).is_ok()
    }

    /// Erases the rule's type, keeping exclusive ownership.
    fn boxed(self) -> BoxedRule
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Erases the rule's type behind a shared handle.
    fn shared(self) -> SharedRule
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }

    /// Two-branch union: tries `self`, then `other`.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Rule,
    {
        Or::new(self, other)
    }
}

impl<T: Rule> RuleExt for T {}

pub use crate::combinators::union::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysOk;

    impl Rule for AlwaysOk {
        fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
            Outcome::Ok(data)
        }
    }

    struct AlwaysNg;

    impl Rule for AlwaysNg {
        fn validate<'a>(&self, _data: &'a Value) -> Outcome<&'a Value> {
            Outcome::Ng
        }
    }

    #[test]
    fn test_ok_returns_input_reference() {
        let data = Value::from("x");
        let outcome = AlwaysOk.validate(&data);
        assert!(std::ptr::eq(outcome.ok().unwrap(), &data));
    }

    #[test]
    fn test_rule_name() {
        assert!(AlwaysOk.name().contains("AlwaysOk"));
        let boxed: BoxedRule = AlwaysNg.boxed();
        assert!(boxed.name().contains("AlwaysNg"));
    }

    #[test]
    fn test_handles_delegate() {
        let data = Value::Null;
        let boxed = AlwaysOk.boxed();
        let shared = AlwaysNg.shared();

        assert!(boxed.accepts(&data));
        assert!(!shared.accepts(&data));
        assert!((&boxed).accepts(&data));
    }

    #[test]
    fn test_or_extension() {
        let data = Value::Null;
        assert!(AlwaysNg.or(AlwaysOk).accepts(&data));
        assert!(!AlwaysNg.or(AlwaysNg).accepts(&data));
    }
}
