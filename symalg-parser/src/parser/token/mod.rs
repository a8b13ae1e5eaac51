//! Operator kinds recognized by the parser, and the precedence levels used to split token ranges.

pub mod op;
