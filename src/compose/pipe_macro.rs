//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `compose!(f, g, h)(x)`.
///
/// Application binds weakest of all the combinators, so any stage may itself
/// be a composition built with [`compose!`](crate::compose!) or one of the
/// effectful combinators.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once.
///
/// # Examples
///
/// ```
/// use funkit::pipe;
///
/// fn increment(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// assert_eq!(pipe!(2, increment, square), 9);
/// assert_eq!(pipe!(2, increment, square, |n: i32| n.to_string()), "9");
/// ```
///
/// ## In-place stage
///
/// ```
/// use funkit::pipe;
///
/// fn double_all(values: &mut Vec<i32>) { values.iter_mut().for_each(|v| *v *= 2); }
///
/// let mut values = vec![1, 2, 3];
/// pipe!(&mut values, double_all);
/// assert_eq!(values, vec![2, 4, 6]);
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use funkit::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipe!(10, f, g, h), compose!(f, g, h)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
