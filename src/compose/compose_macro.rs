//! The `compose!` macro for variadic forward composition.

/// Composes any number of functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: functions run in the
/// order they are written. This is the variadic form of
/// [`compose`](crate::compose::compose()).
///
/// # Laws
///
/// - **Associativity**: `compose!(compose!(f, g), h) == compose!(f, compose!(g, h))`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - Returns `|x| ...h(g(f(x)))`
///
/// # Examples
///
/// ```
/// use funkit::compose;
///
/// fn increment(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let composed = compose!(increment, square);
/// assert_eq!(composed(2), 9);
///
/// let pipeline = compose!(increment, square, |n: i32| n.to_string(), |s: String| s.len());
/// assert_eq!(pipeline(9), 3); // (9 + 1)^2 = 100
/// ```
///
/// ## With closures capturing environment
///
/// ```
/// use funkit::compose;
///
/// let offset = 10;
/// let shift = |x: i32| x + offset;
/// let halve = |x: i32| x / 2;
///
/// let composed = compose!(shift, halve);
/// assert_eq!(composed(4), 7);
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // Two functions: first runs first
    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // Three or more: compose!(f, g, h, ...) = compose!(compose!(f, g), h, ...)
    ($first_function:expr, $second_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        $crate::compose!(
            $crate::compose!($first_function, $second_function),
            $($remaining_functions),+
        )
    }};
}
