pub mod ast;
pub mod error;
pub mod fmt;
pub mod iter;
pub mod token;

use ast::{
    call::Func,
    expr::Expr,
    literal::Constant,
    unary::Postfix,
};
use error::{kind::{UnmatchedCloseParen, UnmatchedOpenParen, UnparsableRange}, Error};
use super::tokenizer::{tokenize, Token, TokenKind};
use symalg_error::ErrorKind;
use std::ops::Range;
use token::op::{BinOpKind, PostfixOpKind, Precedence};

/// A parser for algebraic expressions.
///
/// The parser works on the whole token stream at once. It repeatedly looks for the loosest
/// operator at bracket depth zero, scanning from the right, and splits the range of tokens
/// around it. Since the rightmost such operator is chosen, every binary operator groups to the
/// left, exponentiation included.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is parsing.
    tokens: Box<[Token<'source>]>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source. The source is expected to be lower-case.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize(source).into_boxed_slice(),
        }
    }

    /// Parses the whole token stream into an expression tree.
    pub fn parse(&self) -> Result<Expr, Error> {
        self.check_balance()?;
        self.parse_range(0..self.tokens.len())
    }

    /// Verifies that every opening parenthesis has a matching closing parenthesis, and vice
    /// versa.
    fn check_balance(&self) -> Result<(), Error> {
        let mut open = Vec::new();
        for token in self.tokens.iter() {
            match token.kind {
                TokenKind::OpenParen => open.push(token.span.clone()),
                TokenKind::CloseParen => {
                    if open.pop().is_none() {
                        return Err(Error::new(vec![token.span.clone()], UnmatchedCloseParen));
                    }
                },
                _ => (),
            }
        }

        // the innermost unclosed parenthesis is reported
        match open.pop() {
            Some(span) => Err(Error::new(vec![span], UnmatchedOpenParen)),
            None => Ok(()),
        }
    }

    /// Returns the span of source covered by the given range of tokens.
    ///
    /// An empty range has no source of its own, so the span of the token next to it is used
    /// instead, which is usually the operator missing an operand.
    fn span(&self, range: Range<usize>) -> Range<usize> {
        if range.is_empty() {
            let neighbor = range.start.checked_sub(1)
                .and_then(|i| self.tokens.get(i))
                .or_else(|| self.tokens.get(range.start));
            return neighbor.map_or(0..0, |token| token.span.clone());
        }

        self.tokens[range.start].span.start..self.tokens[range.end - 1].span.end
    }

    /// Creates an error that points at the given range of tokens.
    fn error(&self, range: Range<usize>, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span(range)], kind)
    }

    /// Returns true if the range is wrapped in a single pair of parentheses, where the opening
    /// parenthesis is only closed by the last token.
    fn is_enclosed(&self, range: &Range<usize>) -> bool {
        if range.len() < 3
            || self.tokens[range.start].kind != TokenKind::OpenParen
            || self.tokens[range.end - 1].kind != TokenKind::CloseParen
        {
            return false;
        }

        let mut depth = 0;
        for token in &self.tokens[range.start..range.end - 1] {
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => depth -= 1,
                _ => (),
            }

            if depth == 0 {
                return false;
            }
        }

        true
    }

    /// Parses the given range of tokens into an expression.
    fn parse_range(&self, mut range: Range<usize>) -> Result<Expr, Error> {
        while self.is_enclosed(&range) {
            range = range.start + 1..range.end - 1;
        }

        match range.len() {
            0 => return Err(self.error(range, UnparsableRange)),
            1 => return self.parse_leaf(range.start),
            _ => (),
        }

        for precedence in Precedence::LOOSEST_FIRST {
            if let Some(result) = self.split(range.clone(), precedence) {
                return result;
            }
        }

        if let Some(result) = self.parse_affix(range.clone()) {
            return result;
        }

        Err(self.error(range, UnparsableRange))
    }

    /// Parses the token at the given index as a leaf of the tree.
    fn parse_leaf(&self, index: usize) -> Result<Expr, Error> {
        let token = &self.tokens[index];
        match token.kind {
            TokenKind::Number => Ok(Expr::number(token.lexeme)),
            TokenKind::Variable => Ok(Expr::variable(token.lexeme)),
            TokenKind::Constant => Constant::from_name(token.lexeme)
                .map(Expr::constant)
                .ok_or_else(|| self.error(index..index + 1, UnparsableRange)),
            _ => Err(self.error(index..index + 1, UnparsableRange)),
        }
    }

    /// Parses both sides of a binary operation and joins them.
    fn binary(&self, lhs: Range<usize>, op: BinOpKind, rhs: Range<usize>) -> Result<Expr, Error> {
        let lhs = self.parse_range(lhs)?;
        let rhs = self.parse_range(rhs)?;
        Ok(Expr::binary(lhs, op, rhs))
    }

    /// Looks for the rightmost place at bracket depth zero where the range can be split by an
    /// operator of the given precedence, and parses the range split there.
    ///
    /// Returns [`None`] if there is no such place.
    fn split(&self, range: Range<usize>, precedence: Precedence) -> Option<Result<Expr, Error>> {
        let kind = precedence.token_kind();
        let mut depth = 0;

        // scanning backwards, so a closing parenthesis goes one level deeper
        for i in range.clone().rev() {
            let token = &self.tokens[i];
            match token.kind {
                TokenKind::CloseParen => depth += 1,
                TokenKind::OpenParen => depth -= 1,
                _ => (),
            }

            if depth != 0 {
                continue;
            }

            // implicit multiplication, such as `2x` or `(x + 1)(x - 1)`
            if precedence == Precedence::Factor
                && i != range.start
                && self.tokens[i - 1].kind.ends_value()
                && token.kind.starts_value()
            {
                return Some(self.binary(range.start..i, BinOpKind::Mul, i..range.end));
            }

            if token.kind != kind {
                continue;
            }

            let is_unary = i == range.start || self.tokens[i - 1].kind.is_operator();
            if token.lexeme == "-" && is_unary {
                if i == range.start {
                    let rhs = self.parse_range(i + 1..range.end);
                    return Some(rhs.map(|rhs| Expr::integer(0) - rhs));
                }

                // the minus belongs to the operand on its right
                continue;
            }

            let op = BinOpKind::from_token(token)?;
            return Some(self.binary(range.start..i, op, i + 1..range.end));
        }

        None
    }

    /// Parses a range that starts with a prefix function, or ends with a postfix function.
    ///
    /// Returns [`None`] if the range does neither.
    fn parse_affix(&self, range: Range<usize>) -> Option<Result<Expr, Error>> {
        let first = &self.tokens[range.start];
        if first.kind == TokenKind::PrefixFunction {
            if let Some(func) = Func::from_name(first.lexeme) {
                let arg = self.parse_range(range.start + 1..range.end);
                return Some(arg.map(|arg| Expr::call(func, arg)));
            }
        }

        let last = &self.tokens[range.end - 1];
        let op = PostfixOpKind::from_token(last)?;
        let operand = self.parse_range(range.start..range.end - 1);
        Some(operand.map(|operand| Postfix { operand: Box::new(operand), op }.into()))
    }
}

/// Parses the given text into an expression tree.
///
/// The text is case-insensitive. Whitespace and any character that is not part of a token are
/// ignored, so the spans of an error point into `input` itself.
pub fn parse(input: &str) -> Result<Expr, Error> {
    let source = input.to_ascii_lowercase();
    Parser::new(&source)
        .parse()
        .map_err(|err| {
            tracing::debug!(?err, input, "failed to parse expression");
            err
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(text: &str) -> Expr {
        Expr::number(text)
    }

    fn var(name: &str) -> Expr {
        Expr::variable(name)
    }

    /// Parses the input, panicking with the error if parsing fails.
    fn parse_ok(input: &str) -> Expr {
        match parse(input) {
            Ok(expr) => expr,
            Err(err) => panic!("failed to parse {:?}: {:?}", input, err),
        }
    }

    /// Asserts that parsing the input fails with the given kind, pointing at the given span.
    fn assert_error<K: ErrorKind + PartialEq + 'static>(input: &str, kind: K, span: Range<usize>) {
        let err = parse(input).unwrap_err();
        assert_eq!(err.downcast_kind::<K>(), Some(&kind));
        assert_eq!(err.spans, vec![span]);
    }

    #[test]
    fn leaves() {
        assert_eq!(parse_ok("42"), num("42"));
        assert_eq!(parse_ok("1.5e-3"), num("1.5e-3"));
        assert_eq!(parse_ok("x"), var("x"));
        assert_eq!(parse_ok("pi"), Expr::constant(Constant::Pi));
    }

    #[test]
    fn precedence() {
        assert_eq!(parse_ok("1 + 2 * 3"), num("1") + num("2") * num("3"));
        assert_eq!(parse_ok("1 * 2 + 3"), num("1") * num("2") + num("3"));
        assert_eq!(parse_ok("2 * x ^ 2"), num("2") * var("x").pow(num("2")));
        assert_eq!(
            parse_ok("y = 2x + 1"),
            Expr::binary(var("y"), BinOpKind::Eq, num("2") * var("x") + num("1")),
        );
    }

    #[test]
    fn left_associative() {
        assert_eq!(parse_ok("1 - 2 - 3"), (num("1") - num("2")) - num("3"));
        assert_eq!(parse_ok("8 / 4 / 2"), (num("8") / num("4")) / num("2"));
        assert_eq!(parse_ok("2^3^2"), num("2").pow(num("3")).pow(num("2")));
    }

    #[test]
    fn brackets() {
        assert_eq!(parse_ok("(1 + 2) * 3"), (num("1") + num("2")) * num("3"));
        assert_eq!(parse_ok("((x))"), var("x"));
        assert_eq!(parse_ok("((1 + x))"), num("1") + var("x"));
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(parse_ok("2x"), num("2") * var("x"));
        assert_eq!(parse_ok("2(x + 1)"), num("2") * (var("x") + num("1")));
        assert_eq!(
            parse_ok("(x + 1)(x - 1)"),
            (var("x") + num("1")) * (var("x") - num("1")),
        );
        assert_eq!(
            parse_ok("2sin(x)"),
            num("2") * Expr::call(Func::Sin, var("x")),
        );
        assert_eq!(parse_ok("2 pi x"), (num("2") * Expr::constant(Constant::Pi)) * var("x"));
    }

    #[test]
    fn unary_minus() {
        assert_eq!(parse_ok("-x"), num("0") - var("x"));
        assert_eq!(parse_ok("-x + 1"), (num("0") - var("x")) + num("1"));
        assert_eq!(parse_ok("2 * -3"), num("2") * (num("0") - num("3")));
        assert_eq!(parse_ok("2^-1"), num("2").pow(num("0") - num("1")));
        assert_eq!(
            parse_ok("x = -1"),
            Expr::binary(var("x"), BinOpKind::Eq, num("0") - num("1")),
        );
    }

    #[test]
    fn prefix_functions() {
        assert_eq!(parse_ok("sin(x)"), Expr::call(Func::Sin, var("x")));
        assert_eq!(parse_ok("sin x"), Expr::call(Func::Sin, var("x")));
        assert_eq!(parse_ok("arcsin(x)"), Expr::call(Func::Asin, var("x")));
        assert_eq!(parse_ok("cosech(x)"), Expr::call(Func::Csch, var("x")));
        assert_eq!(
            parse_ok("ln(x + 1)^2"),
            Expr::call(Func::Ln, var("x") + num("1")).pow(num("2")),
        );
        assert_eq!(
            parse_ok("sqrt(sin(x))"),
            Expr::call(Func::Sqrt, Expr::call(Func::Sin, var("x"))),
        );
    }

    #[test]
    fn postfix_functions() {
        let factorial = |operand| Expr::from(Postfix {
            operand: Box::new(operand),
            op: PostfixOpKind::Factorial,
        });
        assert_eq!(parse_ok("3!"), factorial(num("3")));
        assert_eq!(parse_ok("(x + 1)!"), factorial(var("x") + num("1")));
        assert_eq!(parse_ok("x!y"), factorial(var("x")) * var("y"));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            parse_ok("SIN(X) + PI"),
            Expr::call(Func::Sin, var("x")) + Expr::constant(Constant::Pi),
        );
    }

    #[test]
    fn unmatched_parens() {
        assert_error("(1+2", UnmatchedOpenParen, 0..1);
        assert_error("1+2)", UnmatchedCloseParen, 3..4);
        assert_error("(x", UnmatchedOpenParen, 0..1);
        assert_error("((x) + 1", UnmatchedOpenParen, 0..1);
        assert_error("(x)(y + (1)", UnmatchedOpenParen, 3..4);
        assert_error("x)", UnmatchedCloseParen, 1..2);
        assert_error("(x))(", UnmatchedCloseParen, 3..4);
    }

    #[test]
    fn unparsable() {
        assert_error("", UnparsableRange, 0..0);
        assert_error("   ", UnparsableRange, 0..0);
        assert_error("2 +", UnparsableRange, 2..3);
        assert_error("+ 2", UnparsableRange, 0..1);
        assert_error("sin", UnparsableRange, 0..3);
        assert_error("()", UnparsableRange, 0..2);
        assert_error("2 * / 3", UnparsableRange, 2..3);
    }

    #[test]
    fn linear_round_trip() {
        for input in [
            "1 + 2 * 3",
            "2^3^2",
            "(x + 1)(x - 1)",
            "-x + 1",
            "2 * -3",
            "sin(x)^2 + cos(x)^2 = 1",
            "arcsinh(2x) / log(x)",
            "sqrt(1 - x^2) * e^x",
            "1.5e-3 x - pi",
        ] {
            let expr = parse_ok(input);
            let rendered = expr.render_linear();
            assert_eq!(parse_ok(&rendered), expr, "round trip of {:?} through {:?}", input, rendered);
        }
    }
}
