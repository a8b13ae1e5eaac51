//! Symbolic differentiation and exact simplification of expression trees produced by
//! [`symalg_parser`].
//!
//! ```
//! use symalg_compute::symbolic::{differentiate, simplify};
//! use symalg_parser::parse;
//!
//! let expr = parse("sin(x)").unwrap();
//! let derivative = differentiate(&expr, "x").unwrap();
//! assert_eq!(simplify(&derivative).to_string(), "cos(x)");
//! ```

pub mod primitive;
pub mod symbolic;
