//! Validation outcome
//!
//! Every rule reports through [`Outcome`]: either `Ok` carrying the accepted
//! value, or `Ng` ("no good") carrying nothing. There is no third state and no
//! error payload; all mismatches collapse into `Ng`.

use crate::foundation::Value;

// ============================================================================
// OUTCOME
// ============================================================================

/// Two-case result of running a rule.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::prelude::*;
///
/// let data = Value::from("abc");
/// let outcome = string().validate(&data);
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.tag(), "ok");
/// assert!(number().validate(&data).is_ng());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an outcome reports whether the value conformed"]
pub enum Outcome<T> {
    /// The value conformed; carries the accepted value.
    Ok(T),
    /// The value did not conform.
    Ng,
}

impl<T> Outcome<T> {
    /// Returns true for `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns true for `Ng`.
    #[inline]
    pub const fn is_ng(&self) -> bool {
        matches!(self, Self::Ng)
    }

    /// Wire tag of the variant: `"ok"` or `"ng"`.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Ok(_) => "ok",
            Self::Ng => "ng",
        }
    }

    /// Converts into an `Option`, discarding the variant tag.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Ng => None,
        }
    }

    /// Borrows the accepted value, if any.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Ng => None,
        }
    }

    /// Maps the accepted value, leaving `Ng` untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Ng => Outcome::Ng,
        }
    }

    /// Chains a further check on the accepted value.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Ng => Outcome::Ng,
        }
    }

    /// Converts into a `Result` so callers can propagate `Ng` with `?`.
    pub fn into_result(self) -> Result<T, Mismatch> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Ng => Err(Mismatch),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Ok(value),
            None => Self::Ng,
        }
    }
}

/// Outcome of validating a borrowed [`Value`]; `Ok` points at the input itself.
pub type Report<'a> = Outcome<&'a Value>;

// ============================================================================
// CONSTRUCTORS & PREDICATES
// ============================================================================

/// Builds an `Ok` outcome.
#[inline]
pub const fn make_ok<T>(value: T) -> Outcome<T> {
    Outcome::Ok(value)
}

/// Builds an `Ng` outcome.
#[inline]
pub const fn make_ng<T>() -> Outcome<T> {
    Outcome::Ng
}

/// Returns true if the outcome is `Ok`.
#[inline]
pub const fn is_ok<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_ok()
}

/// Returns true if the outcome is `Ng`.
#[inline]
pub const fn is_ng<T>(outcome: &Outcome<T>) -> bool {
    outcome.is_ng()
}

// ============================================================================
// MISMATCH
// ============================================================================

/// The `Ng` case as an error type. Carries no cause, path or message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("value does not conform to the rule")]
pub struct Mismatch;

// ============================================================================
// TESTS
// ============================================================================
