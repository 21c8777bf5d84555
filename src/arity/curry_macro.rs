//! Declarative currying for two and three arguments.
//!
//! A curried function returns a function, and stable Rust cannot name a
//! closure type inside another `impl Fn` return type. The macros sidestep this
//! by building the nested closures at the call site, where their types are
//! inferred.
//!
//! The function is shared through `std::rc::Rc` by every partial application.
//! Each stage owns the arguments supplied so far and clones them into the
//! final call, so:
//!
//! - the curried function can be called many times
//! - a partial application can be reused
//! - non-`Copy` arguments work, at the cost of a clone per final call
//!
//! `curry3!` is `curry2!` applied to what remains once the first argument is
//! fixed.
//!
//! For four or more arguments use the procedural `curry!` macro.

/// Converts a 2-argument function into curried form.
///
/// `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first argument type must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use funkit::curry2;
///
/// fn add(left: i32, right: i32) -> i32 { left + right }
///
/// let curried_add = curry2!(add);
/// let add_five = curried_add(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Configuration first, data later
///
/// ```
/// use funkit::{compose, curry2};
///
/// fn repeat(times: usize, text: String) -> String { text.repeat(times) }
///
/// let twice_shouted = compose!(curry2!(repeat)(2), |text: String| text.to_uppercase());
/// assert_eq!(twice_shouted(String::from("ab")), "ABAB");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first two argument types must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use funkit::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.clamp(low, high) }
///
/// let percentage = curry3!(clamp)(0)(100);
/// assert_eq!(percentage(140), 100);
/// assert_eq!(percentage(-3), 0);
/// assert_eq!(percentage(42), 42);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            $crate::curry2!(move |second, third| {
                function(::std::clone::Clone::clone(&first), second, third)
            })
        }
    }};
}
