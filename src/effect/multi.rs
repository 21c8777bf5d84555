//! Multiplicity composition: every result fans out through the next stage.

/// Composes two functions that each produce zero or more results.
///
/// The returned function runs `first(a)` and then, for each `b` in order,
/// appends every value of `second(b)`. The output of the first element is
/// complete before the second element's output starts; nothing is
/// interleaved. An empty intermediate produces an empty output without
/// calling `second`.
///
/// # Examples
///
/// ```
/// use funkit::effect::compose_multi;
///
/// let digits = |n: u32| n.to_string().chars().filter_map(|c| c.to_digit(10)).collect::<Vec<_>>();
/// let repeat = |d: u32| vec![d; d as usize];
///
/// assert_eq!(compose_multi(digits, repeat)(213), vec![2, 2, 1, 3, 3, 3]);
/// ```
#[inline]
pub fn compose_multi<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Vec<C>
where
    F: Fn(A) -> Vec<B>,
    G: Fn(B) -> Vec<C>,
{
    move |input| {
        let intermediates = first(input);
        #[cfg(feature = "tracing")]
        {
            if intermediates.is_empty() {
                tracing::trace!("multi composition produced no intermediate values");
            }
        }
        intermediates.into_iter().flat_map(&second).collect()
    }
}
