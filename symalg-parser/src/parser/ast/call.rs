use crate::parser::ast::expr::Expr;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function that is written before its argument, such as `sin` in `sin(x)`.
///
/// Every spelling accepted by the tokenizer maps onto one of these variants: the inverse
/// functions may be written with an `a`, `ar` or `arc` prefix (`asin`, `arsin`, `arcsin`), and
/// the cosecant family may be written `csc` or `cosec`. Functions are always displayed with their
/// canonical name, as returned by [`Func::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Asin,
    Acos,
    Atan,
    Asec,
    Acsc,
    Acot,
    Sinh,
    Cosh,
    Tanh,
    Sech,
    Csch,
    Coth,
    Asinh,
    Acosh,
    Atanh,
    Asech,
    Acsch,
    Acoth,

    /// Natural logarithm.
    Ln,

    /// Base-10 logarithm.
    Log,

    /// Square root.
    Sqrt,
}

impl Func {
    /// Returns the function with the given name, accepting every spelling variant. Returns
    /// [`None`] if the name is not a known function.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ln" => return Some(Self::Ln),
            "log" => return Some(Self::Log),
            "sqrt" => return Some(Self::Sqrt),
            _ => (),
        }

        [("arc", true), ("ar", true), ("a", true), ("", false)]
            .into_iter()
            .find_map(|(prefix, inverse)| {
                let rest = name.strip_prefix(prefix)?;
                match rest.strip_suffix('h') {
                    Some(base) => Self::trig(base, inverse, true),
                    None => Self::trig(rest, inverse, false),
                }
            })
    }

    /// Returns the member of the trigonometric family named by `base` (`sin`, `cos`, `tan`,
    /// `sec`, `csc` / `cosec`, or `cot`).
    fn trig(base: &str, inverse: bool, hyperbolic: bool) -> Option<Self> {
        use Func::*;
        let [plain, inv, hyp, inv_hyp] = match base {
            "sin" => [Sin, Asin, Sinh, Asinh],
            "cos" => [Cos, Acos, Cosh, Acosh],
            "tan" => [Tan, Atan, Tanh, Atanh],
            "sec" => [Sec, Asec, Sech, Asech],
            "csc" | "cosec" => [Csc, Acsc, Csch, Acsch],
            "cot" => [Cot, Acot, Coth, Acoth],
            _ => return None,
        };

        Some(match (inverse, hyperbolic) {
            (false, false) => plain,
            (true, false) => inv,
            (false, true) => hyp,
            (true, true) => inv_hyp,
        })
    }

    /// Returns the canonical name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Asec => "asec",
            Self::Acsc => "acsc",
            Self::Acot => "acot",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Sech => "sech",
            Self::Csch => "csch",
            Self::Coth => "coth",
            Self::Asinh => "asinh",
            Self::Acosh => "acosh",
            Self::Atanh => "atanh",
            Self::Asech => "asech",
            Self::Acsch => "acsch",
            Self::Acoth => "acoth",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A prefix function applied to a single argument, such as `sin(x)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function being applied.
    pub func: Func,

    /// The argument of the function.
    pub arg: Box<Expr>,
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.func, self.arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_variants() {
        assert_eq!(Func::from_name("asin"), Some(Func::Asin));
        assert_eq!(Func::from_name("arsin"), Some(Func::Asin));
        assert_eq!(Func::from_name("arcsin"), Some(Func::Asin));
        assert_eq!(Func::from_name("arcos"), Some(Func::Acos));
        assert_eq!(Func::from_name("cosec"), Some(Func::Csc));
        assert_eq!(Func::from_name("arccosech"), Some(Func::Acsch));
        assert_eq!(Func::from_name("arcsc"), Some(Func::Acsc));
        assert_eq!(Func::from_name("sech"), Some(Func::Sech));
        assert_eq!(Func::from_name("cosh"), Some(Func::Cosh));
        assert_eq!(Func::from_name("log"), Some(Func::Log));
        assert_eq!(Func::from_name("exp"), None);
        assert_eq!(Func::from_name("sinhh"), None);
    }

    #[test]
    fn canonical_names_round_trip() {
        for name in [
            "sin", "cos", "tan", "sec", "csc", "cot",
            "asin", "acos", "atan", "asec", "acsc", "acot",
            "sinh", "cosh", "tanh", "sech", "csch", "coth",
            "asinh", "acosh", "atanh", "asech", "acsch", "acoth",
            "ln", "log", "sqrt",
        ] {
            let func = Func::from_name(name).unwrap();
            assert_eq!(func.name(), name);
        }
    }
}
