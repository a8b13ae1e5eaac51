//! Simplification of expression trees.
//!
//! See the [module-level documentation](super) for an overview.

pub mod fold;
pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use step::Step;
use symalg_parser::parser::ast::{expr::Expr, unary::Postfix};

/// Simplifies the children of the node, then folds the node and applies at most one identity
/// rule to it.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let expr = match expr {
        Expr::Literal(_) => expr.clone(),
        Expr::Binary(binary) => Expr::binary(
            inner_simplify(&binary.lhs, step_collector),
            binary.op,
            inner_simplify(&binary.rhs, step_collector),
        ),
        Expr::Call(call) => Expr::call(call.func, inner_simplify(&call.arg, step_collector)),
        Expr::Postfix(postfix) => Postfix {
            operand: Box::new(inner_simplify(&postfix.operand, step_collector)),
            op: postfix.op,
        }.into(),
    };

    let expr = match fold::fold(&expr) {
        Some(folded) => {
            tracing::trace!(from = %expr, to = %folded, "folded constant");
            step_collector.push(Step::FoldConstant);
            folded
        },
        None => expr,
    };

    match rules::all(&expr, step_collector) {
        Some(rewritten) => {
            tracing::trace!(from = %expr, to = %rewritten, "applied identity rule");
            rewritten
        },
        None => expr,
    }
}

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplifies the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}
