use crate::{
    parser::{
        ast::{
            binary::Binary,
            call::{Call, Func},
            literal::{Constant, Literal},
            unary::Postfix,
        },
        fmt::TreeFormatter,
        iter::ExprIter,
        token::op::BinOpKind,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the expression tree.
///
/// Every node owns its children; there is no sharing between trees. The loosely-typed view of a
/// node, its operator text, token kind, and optional left and right children, is available
/// through [`Expr::op`], [`Expr::kind`], [`Expr::left`], and [`Expr::right`].
///
/// [`Display`](fmt::Display) renders the expression linearly, fully parenthesized, such that
/// parsing the output produces the same tree. Use [`Expr::render_tree`] to see its shape instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number, constant, or variable.
    Literal(Literal),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// A prefix function applied to an argument, such as `sin(x)`.
    Call(Call),

    /// A postfix function applied to an operand, such as `3!`.
    Postfix(Postfix),
}

impl Expr {
    /// Creates a number literal from its decimal text.
    pub fn number(text: impl Into<String>) -> Self {
        Self::Literal(Literal::Number(text.into()))
    }

    /// Creates an integer number literal.
    pub fn integer(value: i64) -> Self {
        Self::number(value.to_string())
    }

    /// Creates a constant literal.
    pub fn constant(constant: Constant) -> Self {
        Self::Literal(Literal::Constant(constant))
    }

    /// Creates a variable literal.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Literal(Literal::Variable(name.into()))
    }

    /// Creates a binary expression.
    pub fn binary(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Self::Binary(Binary::new(lhs, op, rhs))
    }

    /// Creates a call of a prefix function.
    pub fn call(func: Func, arg: Expr) -> Self {
        Self::Call(Call { func, arg: Box::new(arg) })
    }

    /// Creates the expression `base ^ exp`.
    pub fn pow(self, exp: Expr) -> Self {
        Self::binary(self, BinOpKind::Exp, exp)
    }

    /// Returns the kind of token that created this node. Leaves have the kind of their token;
    /// interior nodes have the kind of their operator or function.
    pub fn kind(&self) -> TokenKind {
        match self {
            Expr::Literal(Literal::Number(_)) => TokenKind::Number,
            Expr::Literal(Literal::Constant(_)) => TokenKind::Constant,
            Expr::Literal(Literal::Variable(_)) => TokenKind::Variable,
            Expr::Binary(binary) => binary.op.token_kind(),
            Expr::Call(_) => TokenKind::PrefixFunction,
            Expr::Postfix(_) => TokenKind::PostfixFunction,
        }
    }

    /// Returns the operator text of this node: the literal itself for leaves, and the operator
    /// symbol or canonical function name otherwise.
    pub fn op(&self) -> &str {
        match self {
            Expr::Literal(literal) => literal.as_str(),
            Expr::Binary(binary) => binary.op.symbol(),
            Expr::Call(call) => call.func.name(),
            Expr::Postfix(postfix) => postfix.op.symbol(),
        }
    }

    /// Returns the left child of this node. Unary nodes keep their only child here.
    pub fn left(&self) -> Option<&Expr> {
        match self {
            Expr::Literal(_) => None,
            Expr::Binary(binary) => Some(&binary.lhs),
            Expr::Call(call) => Some(&call.arg),
            Expr::Postfix(postfix) => Some(&postfix.operand),
        }
    }

    /// Returns the right child of this node, which only binary nodes have.
    pub fn right(&self) -> Option<&Expr> {
        match self {
            Expr::Binary(binary) => Some(&binary.rhs),
            _ => None,
        }
    }

    /// Returns the text of this node if it is a number literal.
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Expr::Literal(Literal::Number(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns true if this node is the number literal written exactly as `text`.
    pub fn is_number(&self, text: &str) -> bool {
        self.as_number() == Some(text)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns true if a variable appears anywhere in the tree.
    pub fn contains_variable(&self) -> bool {
        self.post_order_iter()
            .any(|expr| matches!(expr, Expr::Literal(Literal::Variable(_))))
    }

    /// Renders the expression linearly, fully parenthesized, such as `((2 * x) + 1)`.
    ///
    /// Postfix nodes cannot be rendered this way and are replaced by a marker.
    pub fn render_linear(&self) -> String {
        self.to_string()
    }

    /// Renders the shape of the tree, one node per line, with branch markers showing each node's
    /// children.
    pub fn render_tree(&self) -> String {
        self.as_tree().to_string()
    }

    /// Wraps the expression in a [`TreeFormatter`], which implements [`Display`](fmt::Display)
    /// by rendering the shape of the tree.
    pub fn as_tree(&self) -> TreeFormatter<'_> {
        TreeFormatter(self)
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Binary> for Expr {
    fn from(binary: Binary) -> Self {
        Self::Binary(binary)
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Self::Call(call)
    }
}

impl From<Postfix> for Expr {
    fn from(postfix: Postfix) -> Self {
        Self::Postfix(postfix)
    }
}

/// Implements a binary operator trait for [`Expr`], building a plain binary node.
macro_rules! impl_bin_op {
    ($( $trait:ident, $method:ident, $kind:ident );* $(;)?) => {
        $(
            impl ops::$trait for Expr {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Expr {
                    Expr::binary(self, BinOpKind::$kind, rhs)
                }
            }
        )*
    };
}

impl_bin_op!(
    Add, add, Add;
    Sub, sub, Sub;
    Mul, mul, Mul;
    Div, div, Div;
);

impl ops::Neg for Expr {
    type Output = Expr;

    /// Negates the expression by multiplying it by `-1`.
    fn neg(self) -> Expr {
        Expr::integer(-1) * self
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Postfix(postfix) => postfix.fmt(f),
        }
    }
}
