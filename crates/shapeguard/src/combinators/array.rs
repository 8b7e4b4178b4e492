//! ARRAY combinator - validates every element of a sequence

use crate::foundation::{Outcome, Rule, Value};

// ============================================================================
// ARRAY COMBINATOR
// ============================================================================

/// Accepts arrays whose elements all satisfy one rule.
///
/// Elements are checked in order and the first failing element stops the
/// walk. Empty arrays always pass. On success the outcome points at the input
/// array itself.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::prelude::*;
///
/// let numbers = array_of(number());
/// assert!(numbers.accepts(&Value::from(vec![Value::from(1), Value::from(2)])));
/// assert!(!numbers.accepts(&Value::from(vec![Value::from(1), Value::from("x")])));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayOf<R> {
    element: R,
}

impl<R> ArrayOf<R> {
    pub fn new(element: R) -> Self {
        Self { element }
    }

    /// Returns a reference to the element rule.
    pub fn element(&self) -> &R {
        &self.element
    }

    /// Extracts the element rule.
    pub fn into_inner(self) -> R {
        self.element
    }
}

impl<R: Rule> Rule for ArrayOf<R> {
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        let Value::Array(items) = data else {
            return Outcome::Ng;
        };

        for (index, item) in items.iter().enumerate() {
            if self.element.validate(item).is_ng() {
                tracing::trace!(index, len = items.len(), "array element rejected");
                return Outcome::Ng;
            }
        }

        Outcome::Ok(data)
    }
}

/// Creates an ARRAY combinator.
pub fn array_of<R: Rule>(element: R) -> ArrayOf<R> {
    ArrayOf::new(element)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleExt;
    use crate::rules::{custom, number};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn numbers(values: &[f64]) -> Value {
        values.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_array_all_valid() {
        let data = numbers(&[1.0, 2.0, 3.0]);
        let outcome = array_of(number()).validate(&data);
        assert!(std::ptr::eq(outcome.ok().unwrap(), &data));
    }

    #[test]
    fn test_array_invalid_element() {
        let data = Value::from(vec![Value::from(1), Value::from("x"), Value::from(3)]);
        assert!(!array_of(number()).accepts(&data));
    }

    #[test]
    fn test_array_empty() {
        assert!(array_of(number()).accepts(&Value::array_empty()));
    }

    #[test]
    fn test_array_rejects_non_arrays() {
        let rule = array_of(number());
        assert!(!rule.accepts(&Value::object_empty()));
        assert!(!rule.accepts(&Value::from("123")));
        assert!(!rule.accepts(&Value::Null));
    }

    #[test]
    fn test_array_short_circuits() {
        let seen = AtomicUsize::new(0);
        let counting = custom(|data| {
            seen.fetch_add(1, Ordering::SeqCst);
            if data.is_number() { Outcome::Ok(data) } else { Outcome::Ng }
        });

        let data = Value::from(vec![Value::from(1), Value::Null, Value::from(3), Value::from(4)]);
        assert!(!array_of(counting).accepts(&data));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_array_nested() {
        let matrix = array_of(array_of(number()));
        let data = Value::from(vec![numbers(&[1.0, 2.0]), numbers(&[]), numbers(&[3.0])]);
        assert!(matrix.accepts(&data));
        assert!(!matrix.accepts(&numbers(&[1.0])));
    }
}
