//! Built-in rules
//!
//! # Categories
//!
//! - **Primitive**: one rule per value kind ([`string`], [`number`],
//!   [`boolean`], [`bigint`], [`symbol`], [`undefined`], [`null`])
//! - **Literal**: exact scalar values ([`literal`], [`literal_true`], ...)
//! - **Custom**: caller-supplied functions ([`custom`], [`predicate`])
//!
//! Composite rules live in [`combinators`](crate::combinators).

pub mod custom;
pub mod literal;
pub mod primitive;

pub use custom::{Custom, Predicate, custom, predicate};
pub use literal::{
    Literal, LiteralValue, bigint_literal, boolean_literal, literal, literal_false, literal_true,
    number_literal, string_literal,
};
pub use primitive::{
    IsBigInt, IsBoolean, IsNull, IsNumber, IsString, IsSymbol, IsUndefined, bigint, boolean,
    null, number, string, symbol, undefined,
};
