//! TUPLE combinator - fixed-length, per-position rules

use crate::foundation::{BoxedRule, Outcome, Rule, RuleExt, Value};

/// Accepts arrays of exactly `n` elements where element `i` satisfies rule `i`.
///
/// No rest elements: a longer or shorter array is rejected before any element
/// is checked.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::prelude::*;
///
/// let pair = tuple![string(), string()];
/// assert!(pair.accepts(&Value::from(vec![Value::from("a"), Value::from("b")])));
/// assert!(!pair.accepts(&Value::from(vec![Value::from("a")])));
/// ```
#[derive(Default)]
pub struct Tuple {
    elements: Vec<BoxedRule>,
}

impl Tuple {
    /// Creates an empty tuple rule, which accepts only `[]`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(elements: Vec<BoxedRule>) -> Self {
        Self { elements }
    }

    /// Appends a position.
    #[must_use = "builder methods must be chained or built"]
    pub fn element<R>(mut self, rule: R) -> Self
    where
        R: Rule + Send + Sync + 'static,
    {
        self.elements.push(rule.boxed());
        self
    }

    /// Number of positions.
    pub fn arity(&self) -> usize {
        self.elements.len()
    }
}

impl Rule for Tuple {
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        let Value::Array(items) = data else {
            return Outcome::Ng;
        };

        if items.len() != self.elements.len() {
            tracing::trace!(
                expected = self.elements.len(),
                actual = items.len(),
                "tuple arity mismatch"
            );
            return Outcome::Ng;
        }

        for (index, (rule, item)) in self.elements.iter().zip(items).enumerate() {
            if rule.validate(item).is_ng() {
                tracing::trace!(index, "tuple element rejected");
                return Outcome::Ng;
            }
        }

        Outcome::Ok(data)
    }
}

impl std::fmt::Debug for Tuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.elements.iter().map(Rule::name).collect();
        f.debug_tuple("Tuple").field(&names).finish()
    }
}

/// Creates a TUPLE combinator from positional rules.
pub fn tuple<I>(elements: I) -> Tuple
where
    I: IntoIterator<Item = BoxedRule>,
{
    Tuple::from_rules(elements.into_iter().collect())
}
