//! DICTIONARY combinator - validates every value of a string-keyed container

use crate::foundation::{Outcome, Rule, Value};

/// Accepts objects whose values all satisfy one rule.
///
/// Any key is allowed. Values are checked in key enumeration order (insertion
/// order) and the first failing value stops the walk. Arrays are not
/// dictionaries.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryOf<R> {
    element: R,
}

impl<R> DictionaryOf<R> {
    pub fn new(element: R) -> Self {
        Self { element }
    }

    /// Returns a reference to the value rule.
    pub fn element(&self) -> &R {
        &self.element
    }
}

impl<R: Rule> Rule for DictionaryOf<R> {
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        let Value::Object(entries) = data else {
            return Outcome::Ng;
        };

        for (key, value) in entries {
            if self.element.validate(value).is_ng() {
                tracing::trace!(key = key.as_str(), "dictionary value rejected");
                return Outcome::Ng;
            }
        }

        Outcome::Ok(data)
    }
}

/// Creates a DICTIONARY combinator.
pub fn dictionary_of<R: Rule>(element: R) -> DictionaryOf<R> {
    DictionaryOf::new(element)
}
