//! Log-accumulating composition.
//!
//! A logged stage returns its result paired with the log entries it produced.
//! Composition never short-circuits: both stages always run, and the entries
//! of the first stage precede those of the second.

/// An ordered, append-only sequence of log entries.
pub type Log = Vec<String>;

/// A value paired with the log written while computing it.
pub type Logged<T> = (T, Log);

/// Pairs `value` with a single log entry.
///
/// # Examples
///
/// ```
/// use funkit::effect::logged;
///
/// assert_eq!(logged(3, "three"), (3, vec![String::from("three")]));
/// ```
#[inline]
pub fn logged<T>(value: T, entry: impl Into<String>) -> Logged<T> {
    (value, vec![entry.into()])
}

/// Pairs `value` with an empty log.
///
/// `unlogged` is the identity of [`compose_logged`] on both sides.
///
/// # Examples
///
/// ```
/// use funkit::effect::unlogged;
///
/// let (value, log) = unlogged("quiet");
/// assert_eq!(value, "quiet");
/// assert!(log.is_empty());
/// ```
#[inline]
pub fn unlogged<T>(value: T) -> Logged<T> {
    (value, Log::new())
}

/// Composes two logged functions, concatenating their logs.
///
/// The returned function runs `first(a)` to get `(b, first_log)`, then
/// `second(b)` to get `(c, second_log)`, and returns
/// `(c, first_log ++ second_log)`.
///
/// # Examples
///
/// ```
/// use funkit::effect::{compose_logged, logged, Logged};
///
/// fn to_text(value: i32) -> Logged<String> { logged(value.to_string(), "L1") }
/// fn shout(text: String) -> Logged<String> { logged(text + "!", "L2") }
///
/// let (text, log) = compose_logged(to_text, shout)(7);
/// assert_eq!(text, "7!");
/// assert_eq!(log, vec!["L1", "L2"]);
/// ```
#[inline]
pub fn compose_logged<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Logged<C>
where
    F: Fn(A) -> Logged<B>,
    G: Fn(B) -> Logged<C>,
{
    move |input| {
        let (intermediate, mut log) = first(input);
        let (output, second_log) = second(intermediate);
        log.extend(second_log);
        (output, log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_logged_keeps_multi_entry_order() {
        let parse = |text: &str| {
            (
                text.len(),
                vec![String::from("received"), format!("length {}", text.len())],
            )
        };
        let classify = |length: usize| logged(length > 3, "classified");

        let (is_long, log) = compose_logged(parse, classify)("hello");
        assert!(is_long);
        assert_eq!(log, vec!["received", "length 5", "classified"]);
    }

    #[test]
    fn test_compose_logged_with_silent_stage() {
        let (value, log) = compose_logged(unlogged, |n: i32| logged(n + 1, "incremented"))(1);
        assert_eq!(value, 2);
        assert_eq!(log, vec!["incremented"]);
    }
}
