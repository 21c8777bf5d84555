//! Single-type composition (`<>`).
//!
//! [`compose`](super::compose()) allows every stage to change type, which is
//! more freedom than needed when every function works on the same `A`. The
//! combinators here restrict composition to one type, which keeps call sites
//! honest about what they do: configure a value, transform it into another
//! value of the same type, or observe it.

/// Sequences two observers of the same value.
///
/// The returned function calls `first(value)` then `second(value)`. Both see
/// the same input; nothing is threaded from one to the other.
///
/// # Examples
///
/// ```
/// use funkit::compose::side_effect_sequence;
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let record_length = |text: &String| seen.borrow_mut().push(text.len());
/// let record_words = |text: &String| seen.borrow_mut().push(text.split(' ').count());
///
/// let record = side_effect_sequence(record_length, record_words);
/// record(&String::from("ab cd"));
/// assert_eq!(*seen.borrow(), vec![5, 2]);
/// ```
#[inline]
pub fn side_effect_sequence<A, F, G>(first: F, second: G) -> impl Fn(&A)
where
    A: ?Sized,
    F: Fn(&A),
    G: Fn(&A),
{
    move |value| {
        first(value);
        second(value);
    }
}

/// Composes two self-maps left to right.
///
/// Behaves exactly as [`compose`](super::compose())`(first, second)`; the
/// separate name documents that both functions map `A` to `A`.
///
/// # Examples
///
/// ```
/// use funkit::compose::endomorphism_sequence;
///
/// let trim_then_lowercase = endomorphism_sequence(
///     |text: String| text.trim().to_string(),
///     |text: String| text.to_lowercase(),
/// );
/// assert_eq!(trim_then_lowercase(String::from("  HeLLo ")), "hello");
/// ```
#[inline]
pub fn endomorphism_sequence<A, F, G>(first: F, second: G) -> impl Fn(A) -> A
where
    F: Fn(A) -> A,
    G: Fn(A) -> A,
{
    move |value| second(first(value))
}

/// Sequences two in-place mutations of the same value.
///
/// The returned function lends `value` mutably to `first`, then to `second`,
/// which sees whatever `first` left behind.
///
/// # Examples
///
/// ```
/// use funkit::compose::mutating_side_effect_sequence;
///
/// #[derive(Default)]
/// struct Style { rounded: bool, border_width: u32 }
///
/// let rounded = |style: &mut Style| style.rounded = true;
/// let bordered = |style: &mut Style| style.border_width = if style.rounded { 2 } else { 1 };
///
/// let rounded_and_bordered = mutating_side_effect_sequence(rounded, bordered);
/// let mut style = Style::default();
/// rounded_and_bordered(&mut style);
/// assert!(style.rounded);
/// assert_eq!(style.border_width, 2);
/// ```
#[inline]
pub fn mutating_side_effect_sequence<A, F, G>(first: F, second: G) -> impl Fn(&mut A)
where
    A: ?Sized,
    F: Fn(&mut A),
    G: Fn(&mut A),
{
    move |value| {
        first(value);
        second(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_side_effect_sequence_order() {
        let log = RefCell::new(Vec::new());
        let sequence = side_effect_sequence(
            |value: &i32| log.borrow_mut().push(format!("first {value}")),
            |value: &i32| log.borrow_mut().push(format!("second {value}")),
        );
        sequence(&1);
        assert_eq!(*log.borrow(), vec!["first 1", "second 1"]);
    }

    #[test]
    fn test_mutating_side_effect_sequence_sees_previous_mutation() {
        let append = mutating_side_effect_sequence(
            |text: &mut String| text.push('a'),
            |text: &mut String| {
                let copy = text.clone();
                text.push_str(&copy);
            },
        );
        let mut text = String::from("x");
        append(&mut text);
        assert_eq!(text, "xaxa");
    }

    #[test]
    fn test_mutating_side_effect_sequence_on_slice() {
        let sort_then_reverse = mutating_side_effect_sequence(<[i32]>::sort, <[i32]>::reverse);
        let mut values = [2, 3, 1];
        sort_then_reverse(&mut values[..]);
        assert_eq!(values, [3, 2, 1]);
    }
}
