//! # funkit
//!
//! Generic function combinators for assembling pipelines out of small unary
//! functions instead of nested calls.
//!
//! ## Overview
//!
//! - **Application**: [`apply`](compose::apply), [`apply_mutating`](compose::apply_mutating), `pipe!`
//! - **Composition**: [`compose`](compose::compose()), `compose!`, [`identity`](compose::identity)
//! - **Single-type composition**: sequencing of side effects and self-maps
//! - **Effectful composition**: log accumulation, optional short-circuit,
//!   multiplicity flattening (and fallible `Result` chaining)
//! - **Arity adapters**: `curry2!`, `curry3!`, `curry!`, uncurry, flip, force
//! - **Collection lifters**: point-free map, filter and reduce
//!
//! ## Feature Flags
//!
//! - `compose`: Application, composition and single-type composition
//! - `effect`: Effectful composition (implies `compose`)
//! - `arity`: Currying, uncurrying, flip and force
//! - `collection`: Point-free collection lifters (implies `arity`)
//! - `derive`: The procedural `curry!` macro for any arity
//! - `tracing`: Emit `tracing` events when an effectful pipeline short-circuits
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! fn parse(text: &str) -> Option<i32> { text.trim().parse().ok() }
//! fn halve(value: i32) -> Option<i32> { (value % 2 == 0).then_some(value / 2) }
//!
//! let parse_then_halve = compose_optional(parse, halve);
//! assert_eq!(pipe!(" 42 ", parse_then_halve), Some(21));
//!
//! let add = curry2!(|left: i32, right: i32| left + right);
//! let increment_all = map_over(add(1));
//! assert_eq!(increment_all(vec![1, 2, 3]), vec![2, 3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled combinator and macro.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "arity")]
    pub use crate::arity::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "arity")]
pub mod arity;

#[cfg(feature = "collection")]
pub mod collection;
