//! # shapeguard
//!
//! Runtime shape validation for dynamically typed values.
//!
//! A rule checks whether a [`Value`](foundation::Value) conforms to a shape.
//! Every rule has exactly one operation, `validate`, which returns
//! [`Outcome::Ok`](foundation::Outcome) with a reference to the input on
//! success and [`Outcome::Ng`](foundation::Outcome) otherwise. There are no
//! diagnostics: a mismatch carries no message or path.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shapeguard::prelude::*;
//!
//! let node = union![
//!     object! { "type" => string_literal("str"), "strValue" => string() },
//!     object! { "type" => string_literal("num"), "numValue" => number() },
//! ];
//!
//! let data: Value = serde_json::json!({"type": "num", "numValue": 123}).into();
//! assert!(node.validate(&data).is_ok());
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for predicate-style rules, [`custom`](rules::custom)
//! for closures, or implement [`Rule`](foundation::Rule) by hand.
//!
//! ## Built-in Rules
//!
//! - **Primitive**: [`string`](rules::string), [`number`](rules::number),
//!   [`boolean`](rules::boolean), [`bigint`](rules::bigint),
//!   [`symbol`](rules::symbol), [`undefined`](rules::undefined),
//!   [`null`](rules::null)
//! - **Literal**: [`literal`](rules::literal) and friends
//! - **Composite**: [`array_of`](combinators::array_of),
//!   [`dictionary_of`](combinators::dictionary_of), [`tuple!`],
//!   [`object!`], [`union!`], [`lazy`](combinators::lazy),
//!   [`recursive`](combinators::recursive)

pub mod combinators;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod rules;
