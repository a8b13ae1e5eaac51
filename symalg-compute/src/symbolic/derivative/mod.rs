pub mod error;
mod function;

use error::UnknownOperator;
use symalg_error::Error;
use symalg_parser::parser::{
    ast::{call::Func, expr::Expr, literal::Literal},
    token::op::BinOpKind,
};

/// Computes the derivative of the given expression with respect to the variable named `with`.
///
/// The result is a new tree built directly from the differentiation rules, with no cleanup; see
/// [`simplify`](super::simplify()). Returns an [`UnknownOperator`] error if the expression
/// contains an equation or a postfix function, neither of which can be differentiated. The error
/// has no spans, since expression trees do not remember where they came from.
pub fn differentiate(expr: &Expr, with: &str) -> Result<Expr, Error> {
    derivative(expr, with).map_err(|err| {
        tracing::debug!(?err, %expr, with, "failed to differentiate expression");
        err
    })
}

fn derivative(expr: &Expr, with: &str) -> Result<Expr, Error> {
    match expr {
        Expr::Literal(Literal::Number(_) | Literal::Constant(_)) => Ok(Expr::integer(0)),
        Expr::Literal(Literal::Variable(name)) => {
            Ok(Expr::integer(if name == with { 1 } else { 0 }))
        },
        Expr::Binary(binary) => {
            let f = || (*binary.lhs).clone();
            let g = || (*binary.rhs).clone();
            // an equation is rejected before either side is differentiated
            let fd = || derivative(&binary.lhs, with);
            let gd = || derivative(&binary.rhs, with);

            Ok(match binary.op {
                // (f + g)' = f' + g'
                BinOpKind::Add => fd()? + gd()?,

                // (f - g)' = f' - g'
                BinOpKind::Sub => fd()? - gd()?,

                // (f * g)' = f' * g + f * g'
                BinOpKind::Mul => fd()? * g() + f() * gd()?,

                // (f / g)' = (f' * g - f * g') / g^2
                BinOpKind::Div => (fd()? * g() - f() * gd()?) / g().pow(Expr::integer(2)),

                // (f ^ g)' = f^(g - 1) * (g * f' + f * (g' * ln(f)))
                BinOpKind::Exp => {
                    let ln_f = Expr::call(Func::Ln, f());
                    f().pow(g() - Expr::integer(1)) * (g() * fd()? + f() * (gd()? * ln_f))
                },

                BinOpKind::Eq => return Err(unknown_operator(expr)),
            })
        },
        Expr::Call(call) => {
            let fd = derivative(&call.arg, with)?;
            Ok(function::function_derivative(call.func, &call.arg, fd))
        },
        Expr::Postfix(_) => Err(unknown_operator(expr)),
    }
}

/// Creates the error for an expression whose operator has no derivative rule.
fn unknown_operator(expr: &Expr) -> Error {
    Error::new(Vec::new(), UnknownOperator { name: expr.op().to_string() })
}

#[cfg(test)]
mod tests {
    use crate::symbolic::simplify;
    use pretty_assertions::assert_eq;
    use symalg_parser::{parse, parser::ast::literal::Constant};
    use super::*;

    /// Parses the input, differentiates it with respect to `x`, and simplifies the result.
    fn d_dx(input: &str) -> Expr {
        let expr = parse(input).unwrap();
        simplify(&differentiate(&expr, "x").unwrap())
    }

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn leaves() {
        assert_eq!(differentiate(&parse("7").unwrap(), "x").unwrap(), Expr::integer(0));
        assert_eq!(differentiate(&parse("pi").unwrap(), "x").unwrap(), Expr::integer(0));
        assert_eq!(differentiate(&parse("x").unwrap(), "x").unwrap(), Expr::integer(1));
        assert_eq!(differentiate(&parse("y").unwrap(), "x").unwrap(), Expr::integer(0));
    }

    #[test]
    fn raw_product_rule() {
        let derivative = differentiate(&parse("2x").unwrap(), "x").unwrap();
        assert_eq!(
            derivative,
            Expr::integer(0) * x() + Expr::integer(2) * Expr::integer(1),
        );
    }

    #[test]
    fn input_is_untouched() {
        let expr = parse("x^2 + sin(x)").unwrap();
        let copy = expr.clone();
        differentiate(&expr, "x").unwrap();
        assert_eq!(expr, copy);
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(d_dx("2x"), Expr::integer(2));
    }

    #[test]
    fn sum_and_difference() {
        assert_eq!(d_dx("x + 5"), Expr::integer(1));
        assert_eq!(d_dx("3 - x"), Expr::integer(-1));
    }

    #[test]
    fn power_rule() {
        assert_eq!(d_dx("x^2"), x() * Expr::integer(2));
        assert_eq!(
            d_dx("x^3"),
            x().pow(Expr::integer(2)) * Expr::integer(3),
        );
    }

    #[test]
    fn exponential() {
        let e = Expr::constant(Constant::E);
        assert_eq!(
            d_dx("e^x"),
            e.clone().pow(x() - Expr::integer(1)) * e,
        );
    }

    #[test]
    fn quotient_rule() {
        // (0 * x - 1 * 1) / x^2
        assert_eq!(
            d_dx("1/x"),
            Expr::integer(-1) / x().pow(Expr::integer(2)),
        );
    }

    #[test]
    fn trigonometry() {
        assert_eq!(d_dx("sin(x)"), Expr::call(Func::Cos, x()));
        assert_eq!(d_dx("sin(x)").to_string(), "cos(x)");
        assert_eq!(d_dx("cos(x)"), Expr::integer(-1) * Expr::call(Func::Sin, x()));
        assert_eq!(
            d_dx("tan(x)"),
            Expr::call(Func::Sec, x()).pow(Expr::integer(2)),
        );
    }

    #[test]
    fn chain_rule() {
        // 2 * cos(2x)
        assert_eq!(
            d_dx("sin(2x)"),
            Expr::integer(2) * Expr::call(Func::Cos, Expr::integer(2) * x()),
        );
    }

    #[test]
    fn logarithms() {
        assert_eq!(d_dx("ln(x)"), Expr::integer(1) / x());
        assert_eq!(
            d_dx("log(x)"),
            Expr::integer(1) / (Expr::call(Func::Ln, Expr::integer(10)) * x()),
        );
    }

    #[test]
    fn inverse_and_hyperbolic() {
        assert_eq!(
            d_dx("arcsin(x)"),
            Expr::integer(1) / Expr::call(Func::Sqrt, Expr::integer(1) - x().pow(Expr::integer(2))),
        );
        assert_eq!(d_dx("sinh(x)"), Expr::call(Func::Cosh, x()));
        assert_eq!(
            d_dx("atanh(x)"),
            Expr::integer(1) / (Expr::integer(1) - x().pow(Expr::integer(2))),
        );
    }

    #[test]
    fn every_function_has_a_rule() {
        for name in [
            "sin", "cos", "tan", "sec", "csc", "cosec", "cot",
            "asin", "arcos", "arctan", "asec", "arccsc", "acot",
            "sinh", "cosh", "tanh", "sech", "csch", "coth",
            "asinh", "acosh", "atanh", "asech", "acsch", "acoth",
            "ln", "log", "sqrt",
        ] {
            let expr = parse(&format!("{}(x^2)", name)).unwrap();
            assert!(differentiate(&expr, "x").is_ok(), "{} has no derivative", name);
        }
    }

    #[test]
    fn unknown_operators() {
        let err = differentiate(&parse("x!").unwrap(), "x").unwrap_err();
        assert_eq!(
            err.downcast_kind::<UnknownOperator>(),
            Some(&UnknownOperator { name: "!".to_string() }),
        );
        assert!(err.spans.is_empty());

        let err = differentiate(&parse("2 + (y = x)").unwrap(), "x").unwrap_err();
        assert_eq!(
            err.downcast_kind::<UnknownOperator>(),
            Some(&UnknownOperator { name: "=".to_string() }),
        );

        let err = differentiate(&parse("x! = 1").unwrap(), "x").unwrap_err();
        assert_eq!(
            err.downcast_kind::<UnknownOperator>(),
            Some(&UnknownOperator { name: "=".to_string() }),
        );
    }

    #[test]
    fn report_without_spans() {
        let err = differentiate(&parse("3!").unwrap(), "x").unwrap_err();
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", ariadne::Source::from("3!")), &mut buf)
            .unwrap();
        assert!(String::from_utf8_lossy(&buf).contains("cannot differentiate the `!` operator"));
    }
}
