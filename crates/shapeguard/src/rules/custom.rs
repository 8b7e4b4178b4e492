//! Caller-supplied rules
//!
//! The extension point of the rule set: any function with the rule signature
//! can be wrapped into a conforming [`Rule`]. The function is trusted as-is;
//! it must not mutate shared state, and a panic inside it propagates to the
//! caller of `validate`.

use crate::foundation::{Outcome, Rule, Value};

// ============================================================================
// CUSTOM
// ============================================================================

/// Wraps a validate function as a rule.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::prelude::*;
///
/// let even = custom(|data: &Value| match data.as_f64() {
///     Some(n) if n % 2.0 == 0.0 => Outcome::Ok(data),
///     _ => Outcome::Ng,
/// })
/// .with_name("even");
///
/// assert!(even.accepts(&Value::from(4)));
/// ```
#[derive(Clone)]
pub struct Custom<F> {
    validate_fn: F,
    name: Option<String>,
}

impl<F> Custom<F>
where
    F: for<'a> Fn(&'a Value) -> Outcome<&'a Value>,
{
    pub fn new(validate_fn: F) -> Self {
        Self {
            validate_fn,
            name: None,
        }
    }

    /// Sets the name reported by [`Rule::name`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl<F> Rule for Custom<F>
where
    F: for<'a> Fn(&'a Value) -> Outcome<&'a Value>,
{
    #[inline]
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        (self.validate_fn)(data)
    }

    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("custom")
    }
}

impl<F> std::fmt::Debug for Custom<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Custom")
            .field("name", &self.name)
            .field("validate_fn", &"<function>")
            .finish()
    }
}

/// Wraps a validate function as a rule.
pub fn custom<F>(validate_fn: F) -> Custom<F>
where
    F: for<'a> Fn(&'a Value) -> Outcome<&'a Value>,
{
    Custom::new(validate_fn)
}

// ============================================================================
// PREDICATE
// ============================================================================

/// Accepts values for which a boolean check holds.
#[derive(Clone)]
pub struct Predicate<F> {
    check: F,
}

impl<F> Rule for Predicate<F>
where
    F: Fn(&Value) -> bool,
{
    #[inline]
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        if (self.check)(data) {
            Outcome::Ok(data)
        } else {
            Outcome::Ng
        }
    }
}

impl<F> std::fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// Creates a rule from a boolean check.
pub fn predicate<F>(check: F) -> Predicate<F>
where
    F: Fn(&Value) -> bool,
{
    Predicate { check }
}

// ============================================================================
// TESTS
// ============================================================================
