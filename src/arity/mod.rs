//! Arity adapters.
//!
//! Multi-argument functions do not fit a pipeline of unary functions. The
//! adapters in this module reshape them so they do, without computing
//! anything themselves:
//!
//! - [`curry2!`] / [`curry3!`] / `curry!`: `(A, B, ...) -> Z` into `A -> B -> ... -> Z`
//! - [`uncurry2`]: `A -> B -> C` back into `(A, B) -> C`
//! - [`flip`]: `A -> B -> C` into `B -> A -> C`
//! - [`flip_nullary`]: `A -> () -> C` into `() -> A -> C`
//! - [`force`]: run a deferred `() -> A` now (zurry)
//!
//! # Why flip?
//!
//! Curried functions usually take their data first and their configuration
//! second. Pipelines want the opposite: fix the configuration once, then feed
//! data through. Flipping moves the data argument last.
//!
//! ```
//! use funkit::arity::{flip, flip_nullary, force};
//! use funkit::{compose, curry2};
//!
//! fn pad_left(text: String, width: usize) -> String { format!("{text:>width$}") }
//!
//! let pad_to = flip(curry2!(pad_left));
//! let pad_to_six = pad_to(6);
//! assert_eq!(pad_to_six(String::from("abc")), "   abc");
//!
//! // A method-like function whose final stage takes nothing
//! let uppercased = |text: String| move || text.to_uppercase();
//! let shout = force(flip_nullary(uppercased));
//! let shout_padded = compose!(shout, pad_to_six);
//! assert_eq!(shout_padded(String::from("abc")), "   ABC");
//! ```
//!
//! # Any arity
//!
//! With the `derive` feature, `curry!` takes a closure, or a function path
//! followed by its arity.
//!
//! ```
//! # #[cfg(feature = "derive")]
//! # {
//! use funkit::arity::curry;
//!
//! let volume = curry!(|width: u32, height: u32, depth: u32, scale: u32| {
//!     width * height * depth * scale
//! });
//! assert_eq!(volume(2)(3)(4)(1), 24);
//!
//! fn join(separator: &str, left: &str, right: &str) -> String {
//!     format!("{left}{separator}{right}")
//! }
//! let dashed = curry!(join, 3)("-");
//! assert_eq!(dashed("a")("b"), "a-b");
//! # }
//! ```
//!
//! # Laws
//!
//! - **Curry Round Trip**: `uncurry2(curry2!(f))(a, b) == f(a, b)`
//! - **Double Flip Identity**: `flip(flip(f))(a)(b) == f(a)(b)`
//! - **Flip Definition**: `flip(f)(b)(a) == f(a)(b)`

mod curry_macro;

use std::rc::Rc;

pub use crate::curry2;
pub use crate::curry3;

#[cfg(feature = "derive")]
pub use funkit_derive::curry;

/// A boxed unary function that may borrow for `'a`.
///
/// Returned as the inner stage of adapters that produce a function returning a
/// function, where the inner closure type cannot be named.
pub type BoxFn<'a, A, B> = Box<dyn Fn(A) -> B + 'a>;

/// Converts a curried function back into a two-argument function.
///
/// `uncurry2` is the inverse of [`curry2!`].
///
/// # Examples
///
/// ```
/// use funkit::arity::uncurry2;
/// use funkit::curry2;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let round_trip = uncurry2(curry2!(subtract));
/// assert_eq!(round_trip(10, 3), subtract(10, 3));
///
/// let scale = |factor: i32| move |value: i32| value * factor;
/// assert_eq!(uncurry2(scale)(3, 5), 15);
/// ```
#[inline]
pub fn uncurry2<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |first, second| function(first)(second)
}

/// Swaps the argument order of a curried function.
///
/// `flip(f)(b)(a) == f(a)(b)`. The behavior of `f` is unchanged; only the
/// order in which its arguments are supplied differs. `f` runs when the last
/// argument arrives, once per call.
///
/// # Examples
///
/// ```
/// use funkit::arity::flip;
///
/// let divide = |numerator: i32| move |denominator: i32| numerator / denominator;
/// let divide_by = flip(divide);
///
/// let halve = divide_by(2);
/// assert_eq!(halve(10), 5);
/// assert_eq!(halve(7), 3);
/// ```
pub fn flip<'a, A, B, C, F, G>(function: F) -> impl Fn(B) -> BoxFn<'a, A, C> + 'a
where
    F: Fn(A) -> G + 'a,
    G: FnOnce(B) -> C,
    B: Clone + 'a,
{
    let function = Rc::new(function);
    move |second_argument: B| {
        let function = Rc::clone(&function);
        let stage: BoxFn<'a, A, C> =
            Box::new(move |first_argument| function(first_argument)(second_argument.clone()));
        stage
    }
}

/// Flips a curried function whose second stage takes no argument.
///
/// `flip_nullary(f)()(a) == f(a)()`. Combined with [`force`], this turns a
/// method-like `A -> () -> C` into a plain `A -> C`.
///
/// # Examples
///
/// ```
/// use funkit::arity::{flip_nullary, force};
///
/// let trimmed = |text: String| move || text.trim().to_string();
///
/// let trim = force(flip_nullary(trimmed));
/// assert_eq!(trim(String::from("  padded  ")), "padded");
/// ```
pub fn flip_nullary<'a, A, C, F, G>(function: F) -> impl Fn() -> BoxFn<'a, A, C> + 'a
where
    F: Fn(A) -> G + 'a,
    G: FnOnce() -> C,
{
    let function = Rc::new(function);
    move || {
        let function = Rc::clone(&function);
        let stage: BoxFn<'a, A, C> = Box::new(move |argument| function(argument)());
        stage
    }
}

/// Runs a deferred computation immediately and returns its value.
///
/// Also known as "zurry": the zero-argument counterpart of uncurrying.
///
/// # Examples
///
/// ```
/// use funkit::arity::force;
///
/// assert_eq!(force(|| 6 * 7), 42);
/// ```
#[inline]
pub fn force<A, F>(producer: F) -> A
where
    F: FnOnce() -> A,
{
    producer()
}
