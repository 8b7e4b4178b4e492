//! Composite rules
//!
//! Composites own their child rules and validate depth-first, stopping at the
//! first child that rejects.
//!
//! # Categories
//!
//! - **Containers**: [`ArrayOf`], [`DictionaryOf`], [`Tuple`]
//! - **Shapes**: [`ObjectLiteral`]
//! - **Alternatives**: [`Union`], [`Or`]
//! - **Deferred**: [`Lazy`], [`recursive`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use shapeguard::prelude::*;
//!
//! let tags = array_of(string());
//! let scores = dictionary_of(number());
//! let point = tuple![number(), number()];
//! let id = union![string(), number()];
//! ```

pub mod array;
pub mod dictionary;
pub mod lazy;
pub mod object;
pub mod tuple;
pub mod union;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use array::{ArrayOf, array_of};
pub use dictionary::{DictionaryOf, dictionary_of};
pub use lazy::{Lazy, SelfRef, lazy, recursive};
pub use object::{ObjectLiteral, object_literal};
pub use tuple::{Tuple, tuple};
pub use union::{Or, Union, union};
