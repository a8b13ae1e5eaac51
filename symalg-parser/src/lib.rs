//! Tokenizer and parser for infix algebraic expressions.
//!
//! [`parse`] turns text such as `2x^2 + sin(x)` into an [`Expr`](parser::ast::Expr) tree, which
//! can be rendered back to text linearly or as a tree.

pub mod parser;
pub mod tokenizer;

pub use parser::parse;
