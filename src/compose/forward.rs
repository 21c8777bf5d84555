//! Forward composition and the small combinators that go with it.
//!
//! - [`compose`]: Chains two functions left to right (`>>>`)
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that always returns the same value (K combinator)
//! - [`first`] / [`second`]: Lift a function onto one component of a pair

/// Composes two functions left to right.
///
/// `compose(f, g)` returns a function `h` with `h(a) = g(f(a))`. Nothing runs
/// until `h` is called; building the composition has no effect of its own.
///
/// # Laws
///
/// - **Associativity**: `compose(compose(f, g), h)` behaves as `compose(f, compose(g, h))`
/// - **Identity**: `compose(identity, f)` and `compose(f, identity)` behave as `f`
///
/// # Examples
///
/// ```
/// use funkit::compose::compose;
///
/// fn increment(x: i32) -> i32 { x + 1 }
/// fn square(x: i32) -> i32 { x * x }
///
/// let increment_then_square = compose(increment, square);
/// assert_eq!(increment_then_square(2), 9);
///
/// let square_then_describe = compose(square, |n: i32| format!("{n}!"));
/// assert_eq!(square_then_describe(3), "9!");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// - `compose(identity, f)` is equivalent to `f`
/// - `compose(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use funkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use funkit::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Lifts `function` onto the first component of a pair, carrying the second
/// component through untouched.
///
/// Useful for threading context alongside a value through a pipeline.
///
/// # Examples
///
/// ```
/// use funkit::compose::first;
/// use funkit::pipe;
///
/// fn increment(x: i32) -> i32 { x + 1 }
///
/// let pair = (42, "rust");
/// assert_eq!(pipe!(pair, first(increment), first(increment)), (44, "rust"));
/// ```
#[inline]
pub fn first<A, B, C, F>(function: F) -> impl Fn((A, B)) -> (C, B)
where
    F: Fn(A) -> C,
{
    move |(left, right)| (function(left), right)
}

/// Lifts `function` onto the second component of a pair.
///
/// # Examples
///
/// ```
/// use funkit::compose::second;
///
/// let shout = second(|text: &str| text.to_uppercase());
/// assert_eq!(shout((1, "rust")), (1, String::from("RUST")));
/// ```
#[inline]
pub fn second<A, B, C, F>(function: F) -> impl Fn((A, B)) -> (A, C)
where
    F: Fn(B) -> C,
{
    move |(left, right)| (left, function(right))
}
