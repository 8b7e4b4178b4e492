//! LAZY combinator - deferred rule construction and recursive shapes

use crate::foundation::{Outcome, Rule, SharedRule, Value};
use std::sync::{Arc, OnceLock, Weak};

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Defers rule creation until first use.
///
/// The factory runs once, on the first `validate` call, and the resulting
/// rule is reused for every later call. Population goes through a
/// [`OnceLock`], so threads racing on first use still run the factory exactly
/// once; losers block until the winner has stored the rule.
///
/// The factory must not validate through the cell it is populating.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::prelude::*;
///
/// // Recursion through a function item: each nesting level gets its own cell.
/// fn tree() -> BoxedRule {
///     ObjectLiteral::new()
///         .field("value", number())
///         .field("children", array_of(lazy(tree)))
///         .boxed()
/// }
/// ```
pub struct Lazy<R, F>
where
    F: Fn() -> R,
{
    init: F,
    rule: OnceLock<R>,
}

impl<R, F> Lazy<R, F>
where
    F: Fn() -> R,
{
    /// Creates a new LAZY combinator.
    pub fn new(init: F) -> Self {
        Self {
            init,
            rule: OnceLock::new(),
        }
    }

    /// Returns the built rule, if the factory has run.
    pub fn get(&self) -> Option<&R> {
        self.rule.get()
    }

    /// Returns true if the factory has run.
    pub fn is_initialized(&self) -> bool {
        self.rule.get().is_some()
    }

    /// Runs the factory if needed and returns the built rule.
    pub fn force(&self) -> &R {
        self.rule.get_or_init(|| {
            tracing::debug!("building lazy rule");
            (self.init)()
        })
    }
}

impl<R, F> Rule for Lazy<R, F>
where
    R: Rule,
    F: Fn() -> R,
{
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        self.force().validate(data)
    }
}

// Manual Debug impl since F might not implement Debug
impl<R, F> std::fmt::Debug for Lazy<R, F>
where
    F: Fn() -> R,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

/// Creates a LAZY combinator.
pub fn lazy<R, F>(init: F) -> Lazy<R, F>
where
    F: Fn() -> R,
{
    Lazy::new(init)
}

// ============================================================================
// RECURSIVE RULES
// ============================================================================

type Thunk<R> = Box<dyn Fn() -> R + Send + Sync>;

/// Weak handle to a recursive rule, handed to the factory of [`recursive`].
///
/// Validating through the handle delegates to the rule it points at. The
/// handle does not keep that rule alive; once every strong handle is gone it
/// rejects everything.
#[derive(Clone)]
pub struct SelfRef {
    target: Weak<dyn Rule + Send + Sync>,
}

impl Rule for SelfRef {
    fn validate<'a>(&self, data: &'a Value) -> Outcome<&'a Value> {
        match self.target.upgrade() {
            Some(rule) => rule.validate(data),
            None => Outcome::Ng,
        }
    }
}

impl std::fmt::Debug for SelfRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelfRef")
            .field("alive", &(self.target.strong_count() > 0))
            .finish()
    }
}

/// Builds a self-referential rule.
///
/// `build` receives a [`SelfRef`] pointing at the rule being defined and
/// returns its body. The body is built lazily, on first validation, and only
/// once for the whole recursive graph no matter how deep the data nests.
///
/// # Examples
///
/// ```rust,ignore
/// use shapeguard::prelude::*;
///
/// // { nest?: Self }
/// let nested = recursive(|this| ObjectLiteral::new().optional_field("nest", this));
///
/// let data: Value = serde_json::json!({"nest": {"nest": {}}}).into();
/// assert!(nested.accepts(&data));
/// ```
pub fn recursive<R, F>(build: F) -> SharedRule
where
    R: Rule + Send + Sync + 'static,
    F: Fn(SelfRef) -> R + Send + Sync + 'static,
{
    Arc::new_cyclic(|weak: &Weak<Lazy<R, Thunk<R>>>| {
        let target: Weak<dyn Rule + Send + Sync> = weak.clone();
        let this = SelfRef { target };
        let init: Thunk<R> = Box::new(move || build(this.clone()));
        Lazy::new(init)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{ObjectLiteral, array_of};
    use crate::foundation::{BoxedRule, RuleExt};
    use crate::rules::{number, string};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
        entries.into_iter().collect()
    }

    #[test]
    fn test_lazy_not_initialized_before_use() {
        let init_count = Arc::new(AtomicUsize::new(0));
        let count = init_count.clone();

        let rule = Lazy::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
            string()
        });

        assert!(!rule.is_initialized());
        assert!(rule.get().is_none());
        assert_eq!(init_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_lazy_only_initialized_once() {
        let init_count = Arc::new(AtomicUsize::new(0));
        let count = init_count.clone();

        let rule = Lazy::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
            string()
        });

        assert!(rule.accepts(&Value::from("a")));
        assert!(!rule.accepts(&Value::from(1)));
        assert!(rule.accepts(&Value::from("b")));

        assert!(rule.is_initialized());
        assert_eq!(init_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_force() {
        let rule = lazy(number);
        assert!(!rule.is_initialized());
        let _inner = rule.force();
        assert!(rule.is_initialized());
    }

    fn tree() -> BoxedRule {
        ObjectLiteral::new()
            .field("value", number())
            .field("children", array_of(lazy(tree)))
            .boxed()
    }

    #[test]
    fn test_function_item_recursion() {
        let leaf = obj([("value", Value::from(2)), ("children", Value::array_empty())]);
        let root = obj([
            ("value", Value::from(1)),
            ("children", Value::from(vec![leaf.clone(), leaf])),
        ]);
        assert!(tree().accepts(&root));

        let bad_leaf = obj([("value", Value::from("2")), ("children", Value::array_empty())]);
        let bad_root = obj([
            ("value", Value::from(1)),
            ("children", Value::from(vec![bad_leaf])),
        ]);
        assert!(!tree().accepts(&bad_root));
    }

    #[test]
    fn test_recursive_nesting() {
        let nested = recursive(|this| ObjectLiteral::new().optional_field("nest", this));

        let deep = obj([("nest", obj([("nest", Value::object_empty())]))]);
        let bad = obj([("nest", obj([("nest", Value::from("abc"))]))]);

        assert!(nested.accepts(&Value::object_empty()));
        assert!(nested.accepts(&deep));
        assert!(!nested.accepts(&bad));
    }

    #[test]
    fn test_recursive_factory_runs_once() {
        let init_count = Arc::new(AtomicUsize::new(0));
        let count = init_count.clone();

        let nested = recursive(move |this| {
            count.fetch_add(1, Ordering::SeqCst);
            ObjectLiteral::new().optional_field("nest", this)
        });

        let mut data = Value::object_empty();
        for _ in 0..32 {
            data = obj([("nest", data)]);
        }

        for _ in 0..3 {
            assert!(nested.accepts(&data));
        }
        assert_eq!(init_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dangling_self_ref_rejects() {
        let escaped = Arc::new(OnceLock::new());
        let slot = Arc::clone(&escaped);

        let nested = recursive(move |this: SelfRef| {
            let _ = slot.set(this.clone());
            ObjectLiteral::new().optional_field("nest", this)
        });
        assert!(nested.accepts(&Value::object_empty()));
        drop(nested);

        let this = escaped.get().unwrap();
        assert!(!this.accepts(&Value::object_empty()));
    }
}
