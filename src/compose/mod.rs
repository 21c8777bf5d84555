//! Function application and composition.
//!
//! This module provides the plain, effect-free half of the combinator algebra:
//! feeding a value into a function, chaining functions left to right, and
//! sequencing functions that all work on a single type.
//!
//! # Overview
//!
//! - [`apply`] / [`pipe!`]: Apply a value to one or more functions, left to right
//! - [`apply_mutating`]: Apply a mutable reference to an in-place function
//! - [`compose()`] / [`compose!`]: Chain functions left to right without applying them
//! - [`side_effect_sequence`], [`endomorphism_sequence`],
//!   [`mutating_side_effect_sequence`]: Single-type composition
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function, unit of composition
//! - [`constant`]: Creates a function that always returns the same value
//! - [`first`] / [`second`]: Lift a function onto one half of a pair
//!
//! # Examples
//!
//! ## Forward composition
//!
//! ```
//! use funkit::compose;
//!
//! fn increment(x: i32) -> i32 { x + 1 }
//! fn square(x: i32) -> i32 { x * x }
//!
//! // compose!(f, g)(x) = g(f(x))
//! let increment_then_square = compose!(increment, square);
//! assert_eq!(increment_then_square(2), 9);
//!
//! let describe = compose!(increment, square, |n: i32| n.to_string());
//! assert_eq!(describe(2), "9");
//! ```
//!
//! ## Pipeline
//!
//! ```
//! use funkit::pipe;
//!
//! fn increment(x: i32) -> i32 { x + 1 }
//! fn square(x: i32) -> i32 { x * x }
//!
//! // pipe!(x, f, g) = g(f(x))
//! assert_eq!(pipe!(2, increment, square), 9);
//! ```
//!
//! # Evaluation Order
//!
//! Rust has no user-defined infix operators, so the usual operator family
//! is spelled as named functions and the binding order is written out by
//! nesting. From tightest to weakest:
//!
//! | Operator | Here | Associativity |
//! |---|---|---|
//! | `>>>` forward composition | [`compose()`], [`compose!`] | left |
//! | `>=>` effectful composition | `effect::compose_logged`, `effect::compose_optional`, `effect::compose_multi` | left |
//! | `<>` single-type composition | [`side_effect_sequence`], [`endomorphism_sequence`], [`mutating_side_effect_sequence`] | left |
//! | `\|>` application | [`apply`], [`pipe!`] | left |
//!
//! So `x |> f >>> g <> h` reads as `pipe!(x, endomorphism_sequence(compose(f, g), h))`:
//! the tighter operator is always the inner call.
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//!
//! ## Application Laws
//!
//! - **Consistency**: `pipe!(x, f, g) == compose(f, g)(x)`

mod application;
mod compose_macro;
mod forward;
mod pipe_macro;
mod single_type;

pub use application::{apply, apply_mutating};
pub use forward::{compose, constant, first, identity, second};
pub use single_type::{endomorphism_sequence, mutating_side_effect_sequence, side_effect_sequence};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
