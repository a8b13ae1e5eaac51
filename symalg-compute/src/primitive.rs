//! Functions to construct exact [`Integer`]s and [`Rational`]s, and to convert between them and
//! number literals.

use rug::{ops::Pow, Integer, Rational};
use symalg_parser::parser::ast::expr::Expr;

/// The largest magnitude of a power of ten or an integer exponent that is computed exactly.
///
/// Literals such as `1e100000`, and powers such as `2^100000`, are left as written rather than
/// expanded.
pub const MAX_FOLD_EXPONENT: u32 = 1 << 16;

/// The largest number of bits the numerator or denominator of a folded value may need.
///
/// Powers and literals whose estimated size exceeds this are left as written, so chains such as
/// `2^65536^65536` cannot grow without bound.
pub const MAX_FOLD_BITS: u64 = 1 << 20;

/// Returns true if a value whose numerator or denominator needs `bits` bits may be computed.
pub fn within_fold_budget(bits: u64) -> bool {
    bits <= MAX_FOLD_BITS
}

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Parses a number literal into its exact value.
///
/// Accepts the forms produced by the tokenizer (`12`, `0.25`, `1.5e-3`, `2e+4`) as well as a
/// leading `-`, which folded literals can carry. Returns [`None`] if the text is not a number
/// literal, if its decimal exponent is larger than [`MAX_FOLD_EXPONENT`], or if its value would
/// need more than [`MAX_FOLD_BITS`] bits.
pub fn rational_from_str(s: &str) -> Option<Rational> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if whole.is_empty()
        || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
    {
        return None;
    }

    // 1.25e1 = 125 * 10^(1 - 2)
    let scale = exponent.checked_sub(fraction.len() as i64)?;
    if scale.unsigned_abs() > u64::from(MAX_FOLD_EXPONENT) {
        return None;
    }

    // log2(10) < 3.322
    let decimal_digits = (whole.len() + fraction.len()) as u64 + scale.unsigned_abs();
    if !within_fold_budget(decimal_digits * 3322 / 1000 + 1) {
        return None;
    }

    let digits = Integer::from_str_radix(&format!("{}{}", whole, fraction), 10).ok()?;
    let power = int(10).pow(scale.unsigned_abs() as u32);
    let value = if scale >= 0 {
        Rational::from(digits * power)
    } else {
        Rational::from((digits, power))
    };

    Some(if negative { -value } else { value })
}

/// Converts an exact value into its canonical expression: an integer literal, or the division of
/// two integer literals in lowest terms if the value is not an integer.
pub fn rational_to_expr(value: Rational) -> Expr {
    let (numer, denom) = value.into_numer_denom();
    if denom == 1 {
        Expr::number(numer.to_string())
    } else {
        Expr::number(numer.to_string()) / Expr::number(denom.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn ratio(numer: i64, denom: i64) -> Rational {
        Rational::from((int(numer), int(denom)))
    }

    #[test]
    fn parse_integers() {
        assert_eq!(rational_from_str("42"), Some(ratio(42, 1)));
        assert_eq!(rational_from_str("-7"), Some(ratio(-7, 1)));
        assert_eq!(rational_from_str("007"), Some(ratio(7, 1)));
    }

    #[test]
    fn parse_decimals() {
        assert_eq!(rational_from_str("0.25"), Some(ratio(1, 4)));
        assert_eq!(rational_from_str("1.5e-3"), Some(ratio(3, 2000)));
        assert_eq!(rational_from_str("2e+4"), Some(ratio(20000, 1)));
        assert_eq!(rational_from_str("1.25e1"), Some(ratio(25, 2)));
    }

    #[test]
    fn reject_malformed() {
        assert_eq!(rational_from_str(""), None);
        assert_eq!(rational_from_str("x"), None);
        assert_eq!(rational_from_str("1.2.3"), None);
        assert_eq!(rational_from_str("--1"), None);
        assert_eq!(rational_from_str("1e"), None);
    }

    #[test]
    fn reject_huge_exponent() {
        assert_eq!(rational_from_str("1e100000"), None);
        assert!(rational_from_str("1e65536").is_some());
    }

    #[test]
    fn reject_huge_literal() {
        // about 1.1 million bits
        let digits = "9".repeat(340_000);
        assert_eq!(rational_from_str(&digits), None);
        assert_eq!(rational_from_str(&format!("{}e60000", "9".repeat(280_000))), None);
        assert!(rational_from_str(&"9".repeat(300_000)).is_some());
    }

    #[test]
    fn canonical_expr() {
        assert_eq!(rational_to_expr(ratio(10, 5)), Expr::number("2"));
        assert_eq!(
            rational_to_expr(ratio(-6, 4)),
            Expr::number("-3") / Expr::number("2"),
        );
    }
}
