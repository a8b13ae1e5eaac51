//! Derivatives of the prefix functions.

use symalg_parser::parser::ast::{call::Func, expr::Expr};

/// Returns the number literal `n`.
fn n(n: i64) -> Expr {
    Expr::integer(n)
}

/// Returns the derivative of `func(arg)`, given `fd`, the derivative of `arg`, applying the chain
/// rule.
pub(super) fn function_derivative(func: Func, arg: &Expr, fd: Expr) -> Expr {
    let f = || arg.clone();
    let call = |func| Expr::call(func, f());
    let square = || f().pow(n(2));

    match func {
        // sin(f) -> f' * cos(f)
        Func::Sin => fd * call(Func::Cos),

        // cos(f) -> -f' * sin(f)
        Func::Cos => -fd * call(Func::Sin),

        // tan(f) -> f' * sec(f)^2
        Func::Tan => fd * call(Func::Sec).pow(n(2)),

        // sec(f) -> f' * tan(f) sec(f)
        Func::Sec => fd * (call(Func::Tan) * call(Func::Sec)),

        // csc(f) -> -f' * cot(f) csc(f)
        Func::Csc => -fd * (call(Func::Cot) * call(Func::Csc)),

        // cot(f) -> -f' * csc(f)^2
        Func::Cot => -fd * call(Func::Csc).pow(n(2)),

        // asin(f) -> f' / sqrt(1 - f^2)
        Func::Asin => fd / Expr::call(Func::Sqrt, n(1) - square()),

        // acos(f) -> -f' / sqrt(1 - f^2)
        Func::Acos => -fd / Expr::call(Func::Sqrt, n(1) - square()),

        // atan(f) -> f' / (1 + f^2)
        Func::Atan => fd / (n(1) + square()),

        // asec(f) -> f' / (sqrt(1 - 1/f^2) f^2)
        Func::Asec => fd / (Expr::call(Func::Sqrt, n(1) - n(1) / square()) * square()),

        // acsc(f) -> -f' / (sqrt(1 - 1/f^2) f^2)
        Func::Acsc => -fd / (Expr::call(Func::Sqrt, n(1) - n(1) / square()) * square()),

        // acot(f) -> -f' / (1 + f^2)
        Func::Acot => -fd / (n(1) + square()),

        // sinh(f) -> f' * cosh(f)
        Func::Sinh => fd * call(Func::Cosh),

        // cosh(f) -> f' * sinh(f)
        Func::Cosh => fd * call(Func::Sinh),

        // tanh(f) -> f' * sech(f)^2
        Func::Tanh => fd * call(Func::Sech).pow(n(2)),

        // sech(f) -> -f' * tanh(f) sech(f)
        Func::Sech => -fd * (call(Func::Tanh) * call(Func::Sech)),

        // csch(f) -> -f' * coth(f) csch(f)
        Func::Csch => -fd * (call(Func::Coth) * call(Func::Csch)),

        // coth(f) -> -f' * csch(f)^2
        Func::Coth => -fd * call(Func::Csch).pow(n(2)),

        // asinh(f) -> f' / sqrt(1 + f^2)
        Func::Asinh => fd / Expr::call(Func::Sqrt, n(1) + square()),

        // acosh(f) -> f' / (sqrt(f - 1) sqrt(1 + f))
        Func::Acosh => fd / (Expr::call(Func::Sqrt, f() - n(1)) * Expr::call(Func::Sqrt, n(1) + f())),

        // atanh(f) -> f' / (1 - f^2)
        Func::Atanh => fd / (n(1) - square()),

        // asech(f) -> -f' / (f sqrt(1 - f^2))
        Func::Asech => -fd / (f() * Expr::call(Func::Sqrt, n(1) - square())),

        // acsch(f) -> -f' / (sqrt(1 + 1/f^2) f^2)
        Func::Acsch => -fd / (Expr::call(Func::Sqrt, n(1) + n(1) / square()) * square()),

        // acoth(f) -> f' / (1 - f^2)
        Func::Acoth => fd / (n(1) - square()),

        // ln(f) -> f' / f
        Func::Ln => fd / f(),

        // log(f) -> f' / (ln(10) f)
        Func::Log => fd / (Expr::call(Func::Ln, n(10)) * f()),

        // sqrt(f) -> f' / (2 sqrt(f))
        Func::Sqrt => fd / (n(2) * call(Func::Sqrt)),
    }
}
