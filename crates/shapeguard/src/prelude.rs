//! Prelude module for convenient imports.
//!
//! Provides a single `use shapeguard::prelude::*;` import that brings in the
//! rule trait, the value and outcome types, every built-in rule and every
//! combinator.
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard::prelude::*;
//!
//! let point = tuple![number(), number()];
//! let polyline = array_of(point);
//! let labels = dictionary_of(string());
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, outcomes
// ============================================================================

pub use crate::foundation::{
    BoxedRule, Map, Mismatch, Outcome, Rule, RuleExt, SharedRule, Symbol, Value, ValueKind,
    is_ng, is_ok, make_ng, make_ok, validate_value,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

pub use crate::rules::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    ArrayOf, DictionaryOf, Lazy, ObjectLiteral, Or, SelfRef, Tuple, Union, array_of,
    dictionary_of, lazy, object_literal, recursive, tuple, union,
};

// ============================================================================
// JSON: serde_json bridge
// ============================================================================

pub use crate::json::{ValueError, validate_json};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{object, rule, tuple, union};
