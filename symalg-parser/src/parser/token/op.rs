//! Binary and postfix operators, and their precedence.

use crate::tokenizer::{Token, TokenKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of a binary operation, in order from lowest precedence (split first, evaluated
/// last) to highest precedence (split last, evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of equality (`=`).
    Eq,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors. Implicit
    /// multiplication also has this precedence.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,
}

impl Precedence {
    /// Every precedence level, loosest first. This is the order in which the parser looks for a
    /// place to split a range of tokens.
    pub const LOOSEST_FIRST: [Precedence; 4] = [
        Precedence::Eq,
        Precedence::Term,
        Precedence::Factor,
        Precedence::Exp,
    ];

    /// Returns the kind of token whose operators have this precedence.
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::Eq => TokenKind::Equals,
            Self::Term => TokenKind::LowOp,
            Self::Factor => TokenKind::MedOp,
            Self::Exp => TokenKind::HighOp,
        }
    }
}

/// The binary operation that is being performed.
///
/// Binary operators are always left-associative, exponentiation included: `2^3^2` is `(2^3)^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Eq,
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// Returns the binary operator matching the given token, or [`None`] if the token is not a
    /// binary operator.
    pub fn from_token(token: &Token) -> Option<Self> {
        match token.lexeme {
            "=" => Some(Self::Eq),
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Exp),
            _ => None,
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Eq => Precedence::Eq,
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the kind of token this operator is written with.
    pub fn token_kind(self) -> TokenKind {
        self.precedence().token_kind()
    }

    /// Returns true if the operator is one of the arithmetic operators `+`, `-`, `*`, `/`, `^`.
    pub fn is_arithmetic(self) -> bool {
        !matches!(self, Self::Eq)
    }

    /// Returns the symbol used to write this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The postfix operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PostfixOpKind {
    Factorial,
}

impl PostfixOpKind {
    /// Returns the postfix operator matching the given token, or [`None`] if the token is not a
    /// postfix operator.
    pub fn from_token(token: &Token) -> Option<Self> {
        match token.lexeme {
            "!" => Some(Self::Factorial),
            _ => None,
        }
    }

    /// Returns the symbol used to write this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Factorial => "!",
        }
    }
}

impl fmt::Display for PostfixOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(Precedence::Eq < Precedence::Term);
        assert!(Precedence::Term < Precedence::Factor);
        assert!(Precedence::Factor < Precedence::Exp);
        assert_eq!(BinOpKind::Div.token_kind(), TokenKind::MedOp);
        assert_eq!(BinOpKind::Eq.token_kind(), TokenKind::Equals);
    }

    #[test]
    fn operator_from_token() {
        let token = Token { span: 0..1, kind: TokenKind::HighOp, lexeme: "^" };
        assert_eq!(BinOpKind::from_token(&token), Some(BinOpKind::Exp));

        let token = Token { span: 0..1, kind: TokenKind::PostfixFunction, lexeme: "!" };
        assert_eq!(BinOpKind::from_token(&token), None);
        assert_eq!(PostfixOpKind::from_token(&token), Some(PostfixOpKind::Factorial));
    }
}
