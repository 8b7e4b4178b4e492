//! UNION combinator - ordered alternatives
//!
//! This module provides [`Union`], which tries a list of branch rules in
//! declaration order, and [`Or`], its statically typed two-branch form.
//!
//! The first branch that accepts wins; later branches are never run. There is
//! no ambiguity detection, so overlapping branches should be ordered from most
//! to least specific.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard::prelude::*;
//!
//! let node = union![
//!     object! { "type" => literal("str"), "strValue" => string() },
//!     object! { "type" => literal("num"), "numValue" => number() },
//! ];
//! ```

use crate::foundation::{BoxedRule, Outcome, Rule, RuleExt, Value};

// ============================================================================
// UNION COMBINATOR
// ============================================================================

/// Accepts a value if any branch accepts it, trying branches in order.
///
/// An empty union rejects everything. On success the outcome points at the
/// original input.
#[derive(Default)]
pub struct Union {
    branches: Vec<BoxedRule>,
}

impl Union {
    /// Creates a union with no branches.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(branches: Vec<BoxedRule>) -> Self {
        Self { branches }
    }

    /// Appends a branch, tried after every existing one.
    #[must_use = "builder methods must be chained or built"]
    pub fn branch<R>(mut self, rule: R) -> Self
    where
        R: Rule + Send + Sync + 'static,
    {
        self.branches.push(rule.boxed());
        self
    }

    /// Number of branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl Rule for Union {
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        if self.branches.iter().any(|branch| branch.validate(data).is_ok()) {
            return Outcome::Ok(data);
        }

        tracing::trace!(branches = self.branches.len(), "no union branch matched");
        Outcome::Ng
    }
}

impl std::fmt::Debug for Union {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.branches.iter().map(Rule::name).collect();
        f.debug_struct("Union").field("branches", &names).finish()
    }
}

/// Creates a UNION combinator from branch rules.
pub fn union<I>(branches: I) -> Union
where
    I: IntoIterator<Item = BoxedRule>,
{
    Union::from_rules(branches.into_iter().collect())
}

// ============================================================================
// OR COMBINATOR
// ============================================================================

/// Two-branch union over concrete rule types.
///
/// `left` is tried first; `right` only runs if `left` rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Rule for Or<L, R>
where
    L: Rule,
    R: Rule,
{
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        match self.left.validate(data) {
            Outcome::Ok(_) => Outcome::Ok(data),
            Outcome::Ng => self.right.validate(data).map(|_| data),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
