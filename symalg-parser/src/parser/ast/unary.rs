use crate::parser::{ast::expr::Expr, token::op::PostfixOpKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A postfix expression, such as `3!`.
///
/// Postfix expressions are parsed, but they have no linear rendering and no derivative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Postfix {
    /// The operand of the postfix expression.
    pub operand: Box<Expr>,

    /// The operator of the postfix expression.
    pub op: PostfixOpKind,
}

impl fmt::Display for Postfix {
    /// Postfix expressions cannot be rendered linearly; this writes a marker in their place.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[cannot render `{}`]", self.op)
    }
}
