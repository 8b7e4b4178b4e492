//! Core rule types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Input**: [`Value`], the closed "any value" sum type rules validate
//! - **Outcome**: [`Outcome`] with [`make_ok`], [`make_ng`], [`is_ok`], [`is_ng`]
//! - **Traits**: [`Rule`], [`RuleExt`]
//!
//! # Architecture
//!
//! ## 1. One operation
//!
//! Every rule, primitive or composite, exposes exactly one operation:
//!
//! ```rust,ignore
//! fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value>;
//! ```
//!
//! ## 2. Composition
//!
//! Composite rules own their children and call the children's `validate`
//! during their own, depth-first, stopping at the first failing child:
//!
//! ```rust,ignore
//! let point = tuple![number(), number()];
//! let path = array_of(point);
//! ```
//!
//! ## 3. No diagnostics
//!
//! A mismatch is a single uniform `Ng` outcome. There is no error path, field
//! path, or message.

pub mod outcome;
pub mod traits;
pub mod value;

pub use outcome::{Mismatch, Outcome, Report, is_ng, is_ok, make_ng, make_ok};
pub use traits::{BoxedRule, Rule, RuleExt, SharedRule};
pub use value::{Map, Symbol, Value, ValueKind};

/// Runs `rule` against `data`.
///
/// Convenience for call sites that hold the rule by reference.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::foundation::validate_value;
///
/// let outcome = validate_value(&Value::from(1), &number());
/// ```
pub fn validate_value<'a, R>(data: &'a Value, rule: &R) -> Outcome<&'a Value>
where
    R: Rule + ?Sized,
{
    rule.validate(data)
}
