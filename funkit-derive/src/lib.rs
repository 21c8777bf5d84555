//! Procedural macros for funkit.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a closure or a named function of any arity (at
//!   least 2) into curried form
//!
//! The declarative `curry2!` and `curry3!` macros in `funkit::arity` cover the
//! common arities without a procedural macro; `curry!` exists for everything
//! past three arguments and for closures written inline.
//!
//! The macro is re-exported as `funkit::arity::curry`; usage examples live
//! there.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a multi-argument closure or function into nested single-argument
/// closures.
///
/// Two input forms are accepted:
///
/// - `curry!(|a, b, c| body)`: the arity is the closure's parameter count
/// - `curry!(function_path, arity)`: the arity is an integer literal
///
/// Every argument except the last is captured in an `Rc` and cloned on the
/// final call, so partial applications can be called repeatedly. Those
/// arguments must implement `Clone`.
///
/// Arity below 2 is rejected at compile time.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::expand(input.into()).into()
}
