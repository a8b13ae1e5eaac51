use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named constant.
///
/// Constants are opaque symbols: they are never replaced by an approximation of their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constant {
    /// Euler's number, `e`.
    E,

    /// The imaginary unit, `i`.
    I,

    /// `pi`.
    Pi,
}

impl Constant {
    /// Returns the constant with the given name, or [`None`] if there is no such constant.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "e" => Some(Self::E),
            "i" => Some(Self::I),
            "pi" => Some(Self::Pi),
            _ => None,
        }
    }

    /// Returns the name of the constant.
    pub fn name(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::I => "i",
            Self::Pi => "pi",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A leaf of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number, stored as the decimal text it was written with, such as `2`, `0.5`, `1.5e-3`, or
    /// `-3` for negative numbers produced by simplification.
    Number(String),

    /// A named constant, such as `pi`.
    Constant(Constant),

    /// A variable, such as `x`.
    Variable(String),
}

impl Literal {
    /// Returns the text of the literal.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(num) => num,
            Self::Constant(constant) => constant.name(),
            Self::Variable(name) => name,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
