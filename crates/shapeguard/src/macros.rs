//! Macros for declaring and composing rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] — Declare a rule (struct + `Rule` impl + factory fn)
//! - [`tuple!`] — Fixed-length tuple rule from positional children
//! - [`union!`] — Ordered union of heterogeneous branches
//! - [`object!`] — Closed object-literal rule from `key => rule` pairs
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard::prelude::*;
//!
//! let pair = tuple![string(), number()];
//! let id = union![string(), number()];
//! let node = object! {
//!     "type" => string_literal("str"),
//!     "strValue" => string(),
//!     "note" => string();
//!     optional ["note"]
//! };
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a rule: struct definition, [`Rule`](crate::foundation::Rule)
/// implementation and factory function.
///
/// The `accept` block decides conformance; the generated `validate` returns
/// `Ok(input)` when it evaluates to `true` and `Ng` otherwise.
/// `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub IsString;
///     accept(input) { input.is_string() }
///     fn string();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     pub MinItems { min: usize };
///     accept(self, input) { input.as_array().is_some_and(|a| a.len() >= self.min) }
///     fn min_items(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        accept($inp:ident) $accept:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            accept($inp) $accept
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule, no factory ────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        accept($inp:ident) $accept:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            #[inline]
            fn validate<'a>(
                &self,
                $inp: &'a $crate::foundation::Value,
            ) -> $crate::foundation::Outcome<&'a $crate::foundation::Value> {
                if $accept {
                    $crate::foundation::Outcome::Ok($inp)
                } else {
                    $crate::foundation::Outcome::Ng
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        accept($self_:ident, $inp:ident) $accept:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            accept($self_, $inp) $accept
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        accept($self_:ident, $inp:ident) $accept:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            #[inline]
            fn validate<'a>(
                &$self_,
                $inp: &'a $crate::foundation::Value,
            ) -> $crate::foundation::Outcome<&'a $crate::foundation::Value> {
                if $accept {
                    $crate::foundation::Outcome::Ok($inp)
                } else {
                    $crate::foundation::Outcome::Ng
                }
            }
        }
    };
}

// ============================================================================
// TUPLE MACRO
// ============================================================================

/// Builds a [`Tuple`](crate::combinators::Tuple) from positional rules.
///
/// ```rust,ignore
/// let point = tuple![number(), number()];
/// ```
#[macro_export]
macro_rules! tuple {
    ($($rule:expr),* $(,)?) => {
        $crate::combinators::Tuple::from_rules(::std::vec![
            $($crate::foundation::RuleExt::boxed($rule)),*
        ])
    };
}

// ============================================================================
// UNION MACRO
// ============================================================================

/// Builds a [`Union`](crate::combinators::Union) whose branches are tried in
/// the order written.
///
/// ```rust,ignore
/// let id = union![string(), number()];
/// ```
#[macro_export]
macro_rules! union {
    ($($rule:expr),* $(,)?) => {
        $crate::combinators::Union::from_rules(::std::vec![
            $($crate::foundation::RuleExt::boxed($rule)),*
        ])
    };
}

// ============================================================================
// OBJECT MACRO
// ============================================================================

/// Builds an [`ObjectLiteral`](crate::combinators::ObjectLiteral) from
/// `key => rule` pairs, optionally followed by `; optional [keys..]`.
///
/// ```rust,ignore
/// let shape = object! {
///     "name" => string(),
///     "nick" => string();
///     optional ["nick"]
/// };
/// ```
#[macro_export]
macro_rules! object {
    ($($key:expr => $rule:expr),+ ; optional [$($opt:expr),* $(,)?]) => {
        $crate::object!($($key => $rule),+).with_optional_keys([$($opt),*])
    };
    ($($key:expr => $rule:expr),* $(,)?) => {
        $crate::combinators::ObjectLiteral::new()$(.field($key, $rule))*
    };
}

// ============================================================================
// TESTS
// ============================================================================
