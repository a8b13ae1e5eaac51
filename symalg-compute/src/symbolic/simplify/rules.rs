//! Identity rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. The rules only look at the node's own operator and its immediate
//! children, and at most one of them applies to any node.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use symalg_parser::parser::{
    ast::{call::Func, expr::Expr, literal::{Constant, Literal}},
    token::op::BinOpKind,
};

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side of the expression.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(binary) if binary.op == op => f(&binary.lhs, &binary.rhs),
        _ => None,
    }
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if lhs.is_number("0") {
            Some(rhs.clone())
        } else if rhs.is_number("0") {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        rhs.is_number("0").then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (lhs.is_number("0") || rhs.is_number("0")).then(|| Expr::integer(0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_number("1") {
            Some(rhs.clone())
        } else if rhs.is_number("1") {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `0/a = 0`
///
/// `0/0` is left as written.
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        (lhs.is_number("0") && !rhs.is_number("0")).then(|| Expr::integer(0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, rhs| {
        rhs.is_number("1").then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `ln(e) = 1`
pub fn ln_e(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr {
        Expr::Call(call)
            if call.func == Func::Ln
                && *call.arg == Expr::Literal(Literal::Constant(Constant::E)) =>
        {
            step_collector.push(Step::LnE);
            Some(Expr::integer(1))
        },
        _ => None,
    }
}

/// Applies the first rule that matches.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| divide_zero(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| ln_e(expr, step_collector))
}
