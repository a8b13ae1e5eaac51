//! Exact constant folding.
//!
//! A number literal, or the division of two number literals, has an exact rational value. An
//! arithmetic operation on two such values is replaced by its canonical result: an integer
//! literal, or a fraction in lowest terms with the sign on the numerator.

use crate::primitive::{rational_from_str, rational_to_expr, within_fold_budget, MAX_FOLD_EXPONENT};
use rug::{ops::Pow, Rational};
use std::cmp::Ordering;
use symalg_parser::parser::{
    ast::{binary::Binary, expr::Expr, literal::Literal},
    token::op::BinOpKind,
};

/// Returns the exact value of a number literal, or of a fraction of two number literals.
fn numeric_value(expr: &Expr) -> Option<Rational> {
    match expr {
        Expr::Literal(Literal::Number(text)) => rational_from_str(text),
        Expr::Binary(Binary { lhs, op: BinOpKind::Div, rhs }) => {
            let numer = rational_from_str(lhs.as_number()?)?;
            let denom = rational_from_str(rhs.as_number()?)?;
            divide(numer, denom)
        },
        _ => None,
    }
}

/// Divides two values, or returns [`None`] when dividing by zero.
fn divide(lhs: Rational, rhs: Rational) -> Option<Rational> {
    if rhs.cmp0() == Ordering::Equal {
        None
    } else {
        Some(lhs / rhs)
    }
}

/// Raises `base` to an integer power.
///
/// Returns [`None`] if the exponent is not an integer, if its magnitude exceeds
/// [`MAX_FOLD_EXPONENT`], if zero is raised to a negative power, or if the result would need more
/// than [`MAX_FOLD_BITS`](crate::primitive::MAX_FOLD_BITS) bits.
fn power(base: Rational, exp: Rational) -> Option<Rational> {
    if *exp.denom() != 1 {
        return None;
    }

    let magnitude = exp.numer().to_i64()?.unsigned_abs();
    if magnitude > u64::from(MAX_FOLD_EXPONENT) {
        return None;
    }

    let negative = exp.cmp0() == Ordering::Less;
    if negative && base.cmp0() == Ordering::Equal {
        return None;
    }

    let bits = u64::from(base.numer().significant_bits().max(base.denom().significant_bits()));
    if !within_fold_budget(bits.saturating_mul(magnitude)) {
        return None;
    }

    let magnitude = magnitude as u32;
    let (numer, denom) = base.into_numer_denom();
    let (numer, denom) = (numer.pow(magnitude), denom.pow(magnitude));
    if negative {
        Some(Rational::from((denom, numer)))
    } else {
        Some(Rational::from((numer, denom)))
    }
}

/// Computes the result of the arithmetic operation, or returns [`None`] if it cannot be computed
/// exactly.
fn apply(op: BinOpKind, lhs: Rational, rhs: Rational) -> Option<Rational> {
    match op {
        BinOpKind::Add => Some(lhs + rhs),
        BinOpKind::Sub => Some(lhs - rhs),
        BinOpKind::Mul => Some(lhs * rhs),
        BinOpKind::Div => divide(lhs, rhs),
        BinOpKind::Exp => power(lhs, rhs),
        BinOpKind::Eq => None,
    }
}

/// Folds the given node, whose children must already be folded.
///
/// Returns `Some(expr)` with the canonical form of the node if it differs from the node.
pub fn fold(expr: &Expr) -> Option<Expr> {
    let folded = match expr {
        Expr::Literal(Literal::Number(text)) => rational_to_expr(rational_from_str(text)?),
        Expr::Binary(binary) if binary.op.is_arithmetic() => {
            let lhs = numeric_value(&binary.lhs)?;
            let rhs = numeric_value(&binary.rhs)?;
            rational_to_expr(apply(binary.op, lhs, rhs)?)
        },
        _ => return None,
    };

    if folded == *expr {
        None
    } else {
        Some(folded)
    }
}
