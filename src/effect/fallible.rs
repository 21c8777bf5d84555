//! Fallible composition: the first error short-circuits.

/// Composes two functions that may fail with the same error type.
///
/// The returned function runs `first(a)`. An `Err` is returned as-is, without
/// calling `second`; the error value is never wrapped or replaced. Otherwise
/// it returns `second(b)`.
///
/// # Examples
///
/// ```
/// use funkit::effect::compose_fallible;
/// use std::num::ParseIntError;
///
/// fn parse(text: &str) -> Result<i64, ParseIntError> { text.parse() }
/// fn checked_square(value: i64) -> Result<i64, ParseIntError> {
///     Ok(value.saturating_mul(value))
/// }
///
/// let parse_square = compose_fallible(parse, checked_square);
/// assert_eq!(parse_square("12"), Ok(144));
/// assert!(parse_square("twelve").is_err());
/// ```
#[inline]
pub fn compose_fallible<A, B, C, E, F, G>(first: F, second: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<B, E>,
    G: Fn(B) -> Result<C, E>,
{
    move |input| match first(input) {
        Ok(intermediate) => second(intermediate),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("fallible composition short-circuited before its second stage");
            Err(error)
        }
    }
}
