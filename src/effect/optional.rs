//! Optional composition: absence short-circuits.

/// Composes two functions that may produce no value.
///
/// The returned function runs `first(a)`. If that is `None`, it returns
/// `None` and `second` is never called. Otherwise it returns `second(b)`,
/// which may itself be `None`.
///
/// # Examples
///
/// ```
/// use funkit::effect::compose_optional;
///
/// fn head(values: Vec<i32>) -> Option<i32> { values.first().copied() }
/// fn positive(value: i32) -> Option<u32> { u32::try_from(value).ok().filter(|&v| v > 0) }
///
/// let positive_head = compose_optional(head, positive);
/// assert_eq!(positive_head(vec![3, -1]), Some(3));
/// assert_eq!(positive_head(vec![-3, 1]), None);
/// assert_eq!(positive_head(vec![]), None);
/// ```
#[inline]
pub fn compose_optional<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Option<C>
where
    F: Fn(A) -> Option<B>,
    G: Fn(B) -> Option<C>,
{
    move |input| {
        let Some(intermediate) = first(input) else {
            #[cfg(feature = "tracing")]
            tracing::trace!("optional composition short-circuited before its second stage");
            return None;
        };
        second(intermediate)
    }
}
