//! Effectful composition (`>=>`).
//!
//! Each combinator in this module chains two unary functions whose results
//! carry an effect, and returns a function of the composed shape. They share a
//! calling convention with [`compose`](crate::compose::compose()) but each
//! effect has its own sequencing rule:
//!
//! | Combinator | Stage shape | Rule |
//! |---|---|---|
//! | [`compose_logged`] | `A -> (B, Log)` | run both, concatenate logs in call order |
//! | [`compose_optional`] | `A -> Option<B>` | stop at the first `None` |
//! | [`compose_multi`] | `A -> Vec<B>` | run the second stage on every output, flatten in order |
//! | [`compose_fallible`] | `A -> Result<B, E>` | stop at the first `Err`, return it unchanged |
//!
//! Every one of them is a Kleisli composition for its effect. They are kept
//! as separate functions rather than one generic bind so that each reads as
//! plainly as the effect it handles.
//!
//! # Laws
//!
//! For every combinator `>=>` above with its unit `pure`:
//!
//! - **Left Identity**: `pure >=> f == f`
//! - **Right Identity**: `f >=> pure == f`
//! - **Associativity**: `(f >=> g) >=> h == f >=> (g >=> h)`
//!
//! The units are [`unlogged`], `Some`, `|value| vec![value]` and `Ok`.
//!
//! # Examples
//!
//! ```
//! use funkit::effect::{compose_logged, compose_multi, compose_optional, logged, Logged};
//!
//! fn parse(text: &str) -> Option<u32> { text.parse().ok() }
//! fn reciprocal(value: u32) -> Option<f64> { (value != 0).then(|| 1.0 / f64::from(value)) }
//!
//! let parse_reciprocal = compose_optional(parse, reciprocal);
//! assert_eq!(parse_reciprocal("4"), Some(0.25));
//! assert_eq!(parse_reciprocal("0"), None);
//! assert_eq!(parse_reciprocal("x"), None);
//!
//! fn double(value: i32) -> Logged<i32> { logged(value * 2, "doubled") }
//! fn negate(value: i32) -> Logged<i32> { logged(-value, "negated") }
//!
//! let (value, log) = compose_logged(double, negate)(5);
//! assert_eq!(value, -10);
//! assert_eq!(log, vec!["doubled", "negated"]);
//!
//! let neighbours = |n: i32| vec![n - 1, n + 1];
//! assert_eq!(compose_multi(neighbours, neighbours)(0), vec![-2, 0, 0, 2]);
//! ```

mod fallible;
mod logged;
mod multi;
mod optional;

pub use fallible::compose_fallible;
pub use logged::{Log, Logged, compose_logged, logged, unlogged};
pub use multi::compose_multi;
pub use optional::compose_optional;
