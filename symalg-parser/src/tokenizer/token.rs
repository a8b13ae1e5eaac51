use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// The variants are listed in matching priority: when two patterns could claim the same
/// characters, the one declared first wins. For the operator kinds, the order is also the order
/// of binding looseness used by the parser, so comparisons such as `kind >= TokenKind::LowOp`
/// ("is this an operator or `=`?") are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// A number, such as `2`, `0.5` or `1.5e-3`.
    Number = 0,

    /// A function applied to the expression after it, such as `sin` or `arccosh`.
    PrefixFunction = 1,

    /// A named constant: `e`, `i` or `pi`.
    Constant = 2,

    /// A single-letter variable.
    Variable = 3,

    #[doc = "`(`"]
    OpenParen = 4,

    #[doc = "`)`"]
    CloseParen = 5,

    /// A function applied to the expression before it, such as `!`.
    PostfixFunction = 6,

    /// `+` or `-`.
    LowOp = 7,

    /// `*` or `/`.
    MedOp = 8,

    /// `^`.
    HighOp = 9,

    #[doc = "`=`"]
    Equals = 10,
}

impl TokenKind {
    /// Returns true if a token of this kind can be the last token of a value, such as `2`, `x`
    /// or `)`.
    pub fn ends_value(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Constant
                | TokenKind::Variable
                | TokenKind::CloseParen
                | TokenKind::PostfixFunction
        )
    }

    /// Returns true if a token of this kind can be the first token of a value, such as `2`,
    /// `sin` or `(`.
    pub fn starts_value(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::PrefixFunction
                | TokenKind::Constant
                | TokenKind::Variable
                | TokenKind::OpenParen
        )
    }

    /// Returns true if the token is a binary operator or `=`.
    pub fn is_operator(self) -> bool {
        self >= TokenKind::LowOp
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was matched for this token.
    pub lexeme: &'source str,
}
