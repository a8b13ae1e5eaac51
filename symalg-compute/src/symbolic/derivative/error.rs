use symalg_attrs::ErrorKind;
use symalg_error::ErrorKind;

/// The expression contains an operator that has no derivative rule, such as `=` or `!`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate the `{}` operator", name),
    labels = ["this expression"],
    help = "only numbers, constants, variables, arithmetic operators, and prefix functions can be differentiated",
)]
pub struct UnknownOperator {
    /// The operator that could not be differentiated.
    pub name: String,
}
