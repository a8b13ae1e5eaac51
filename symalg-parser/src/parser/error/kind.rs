use ariadne::Fmt;
use symalg_attrs::ErrorKind;
use symalg_error::{ErrorKind, EXPR};

/// A closing parenthesis was found with no opening parenthesis before it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unmatched closing parenthesis",
    labels = ["this parenthesis has no matching opening parenthesis"],
    help = format!("remove it, or add a {} before it", "`(`".fg(EXPR)),
)]
pub struct UnmatchedCloseParen;

/// An opening parenthesis was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing closing parenthesis",
    labels = ["this parenthesis is never closed"],
    help = format!("add a {} to the end of the expression", "`)`".fg(EXPR)),
)]
pub struct UnmatchedOpenParen;

/// A range of tokens could not be turned into an expression: it is empty, or it holds no
/// operator, function, or single value that the parser could build a node from.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "could not parse expression",
    labels = [format!("I could not find a valid {} here", "expression".fg(EXPR))],
    help = "check for a missing operand, or an operator with nothing on one of its sides",
)]
pub struct UnparsableRange;
