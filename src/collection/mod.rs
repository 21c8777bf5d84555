//! Point-free collection lifters.
//!
//! Each lifter takes the per-element function now and the collection later,
//! so it can sit in a [`compose!`](crate::compose!) chain or a
//! [`pipe!`](crate::pipe!) before any data exists.
//!
//! ```
//! use funkit::collection::{filter_by, map_over, reduce_with};
//! use funkit::pipe;
//!
//! let total_of_even_squares = pipe!(
//!     vec![1, 2, 3, 4],
//!     filter_by(|n: &i32| n % 2 == 0),
//!     map_over(|n: i32| n * n),
//!     reduce_with(|total: i32, n: i32| total + n)(0),
//! );
//! assert_eq!(total_of_even_squares, 20);
//! ```

use std::rc::Rc;

use crate::arity::BoxFn;

/// Lifts `function` to act on every element of a vector, in order.
///
/// The output has the same length as the input and keeps its order.
///
/// # Examples
///
/// ```
/// use funkit::collection::map_over;
///
/// let lengths = map_over(|word: &str| word.len());
/// assert_eq!(lengths(vec!["a", "abc", ""]), vec![1, 3, 0]);
/// ```
#[inline]
pub fn map_over<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> B,
{
    move |values| values.into_iter().map(&function).collect()
}

/// Lifts `predicate` to keep only the matching elements of a vector.
///
/// Kept elements stay in their original relative order. The output is never
/// longer than the input.
///
/// # Examples
///
/// ```
/// use funkit::collection::filter_by;
///
/// let non_blank = filter_by(|line: &&str| !line.trim().is_empty());
/// assert_eq!(non_blank(vec!["a", " ", "b", ""]), vec!["a", "b"]);
/// ```
#[inline]
pub fn filter_by<A, P>(predicate: P) -> impl Fn(Vec<A>) -> Vec<A>
where
    P: Fn(&A) -> bool,
{
    move |values| {
        values
            .into_iter()
            .filter(|value| predicate(value))
            .collect()
    }
}

/// Lifts `accumulate` into a left fold that takes its initial value, then the
/// vector.
///
/// `reduce_with(f)(initial)(vec![a, b])` is `f(f(initial, a), b)`. An empty
/// vector yields `initial` unchanged. `initial` is cloned for each fold, so a
/// partially applied fold can be reused.
///
/// # Examples
///
/// ```
/// use funkit::collection::reduce_with;
///
/// let join = reduce_with(|text: String, word: &str| text + word);
/// let sentence = join(String::from(">"));
/// assert_eq!(sentence(vec!["a", "b", "c"]), ">abc");
/// assert_eq!(sentence(vec![]), ">");
/// ```
pub fn reduce_with<'a, A, R, F>(accumulate: F) -> impl Fn(R) -> BoxFn<'a, Vec<A>, R> + 'a
where
    F: Fn(R, A) -> R + 'a,
    R: Clone + 'a,
{
    let accumulate = Rc::new(accumulate);
    move |initial: R| {
        let accumulate = Rc::clone(&accumulate);
        let fold: BoxFn<'a, Vec<A>, R> = Box::new(move |values: Vec<A>| {
            values
                .into_iter()
                .fold(initial.clone(), |total, value| accumulate(total, value))
        });
        fold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_over_reusable() {
        let double = map_over(|n: i32| n * 2);
        assert_eq!(double(vec![1, 2]), vec![2, 4]);
        assert_eq!(double(vec![]), Vec::<i32>::new());
    }

    #[test]
    fn test_filter_by_keeps_duplicates_in_place() {
        let odd = filter_by(|n: &i32| n % 2 != 0);
        assert_eq!(odd(vec![3, 2, 3, 1, 4]), vec![3, 3, 1]);
    }

    #[test]
    fn test_reduce_with_folds_left() {
        let subtract_all = reduce_with(|total: i32, n: i32| total - n);
        assert_eq!(subtract_all(10)(vec![1, 2, 3]), 4);
    }
}
