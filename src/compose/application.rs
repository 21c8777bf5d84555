//! Function application as a named operation.
//!
//! [`apply`] is the function form of [`pipe!`](crate::pipe!) with a single
//! stage. It reads well as an argument to other combinators, where a macro
//! cannot be passed.

/// Applies `value` to `function` and returns the result.
///
/// `apply(x, f)` is `f(x)` written data-first, the same order a pipeline
/// reads in.
///
/// # Examples
///
/// ```
/// use funkit::compose::apply;
///
/// fn increment(x: i32) -> i32 { x + 1 }
///
/// assert_eq!(apply(41, increment), 42);
/// assert_eq!(apply("text", str::len), 4);
/// ```
#[inline]
pub fn apply<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// Gives `function` exclusive mutable access to `value` for the duration of
/// the call.
///
/// The function mutates in place and returns nothing. The borrow ends when
/// the call returns, so the function cannot keep the reference.
///
/// # Examples
///
/// ```
/// use funkit::compose::apply_mutating;
///
/// let mut scores = vec![3, 1, 2];
/// apply_mutating(&mut scores, |values: &mut Vec<i32>| values.sort_unstable());
/// assert_eq!(scores, vec![1, 2, 3]);
/// ```
#[inline]
pub fn apply_mutating<A, F>(value: &mut A, function: F)
where
    A: ?Sized,
    F: FnOnce(&mut A),
{
    function(value);
}
