//! Symbolic manipulation of expression trees.
//!
//! # Differentiation
//!
//! [`differentiate`] builds a new tree for the derivative of an expression with respect to a
//! variable, using the sum, product, quotient, and generalized power rules, plus a table of
//! derivatives for every prefix function, composed with the chain rule. The input tree is left
//! untouched.
//!
//! The derivative is built mechanically and is full of terms like `0 * x` and `1 * cos(x)`; pass
//! it through [`simplify`] to clean it up.
//!
//! # Simplification
//!
//! [`simplify`] reduces a tree bottom-up. At each node, once its children are simplified:
//!
//! 1. Arithmetic on numbers and fractions of numbers is computed exactly, using arbitrary
//!    precision rationals, and replaced by an integer literal or a fraction in lowest terms.
//! 2. At most one identity rule is applied, such as `x + 0 = x` or `1 * x = x`.
//!
//! Simplification never fails: arithmetic that cannot be computed exactly, such as division by
//! zero or a non-integer power, is left as written. Simplifying an already simplified tree
//! returns it unchanged.
//!
//! ```
//! use symalg_compute::symbolic::{simplify_with_steps, Step};
//! use symalg_parser::parse;
//!
//! let expr = parse("1/2 + 1/3 + 0x").unwrap();
//! let (simplified, steps) = simplify_with_steps(&expr);
//! assert_eq!(simplified.to_string(), "(5 / 6)");
//! assert!(steps.contains(&Step::MultiplyZero));
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::differentiate;
pub use simplify::{simplify, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;
