pub mod token;

use once_cell::sync::Lazy;
use regex::Regex;
pub use token::{Token, TokenKind};

/// One pattern per token kind, in matching priority.
///
/// Longer function spellings are listed before their prefixes (`cosec` before `cos`, `arc` before
/// `ar` before `a`) since alternation prefers the leftmost alternative that matches.
static MATCHERS: Lazy<[(TokenKind, Regex); 11]> = Lazy::new(|| {
    let re = |pattern: &str| Regex::new(pattern).expect("token pattern is valid");
    [
        (TokenKind::Number, re(r"[0-9]+(\.[0-9]+)?(e[+-]?[0-9]+)?")),
        (TokenKind::PrefixFunction, re(r"(arc|ar|a)?(cosec|csc|sin|cos|tan|sec|cot)h?|ln|log|sqrt")),
        (TokenKind::Constant, re(r"pi|e|i")),
        (TokenKind::Variable, re(r"[a-z]")),
        (TokenKind::OpenParen, re(r"\(")),
        (TokenKind::CloseParen, re(r"\)")),
        (TokenKind::PostfixFunction, re(r"!")),
        (TokenKind::LowOp, re(r"[+-]")),
        (TokenKind::MedOp, re(r"[*/]")),
        (TokenKind::HighOp, re(r"\^")),
        (TokenKind::Equals, re(r"=")),
    ]
});

/// Splits the input into tokens, in the order they appear in the input.
///
/// The input is expected to be lower-case already. Each token kind is matched over the whole
/// input in priority order; a match that overlaps any character already claimed by a kind with
/// higher priority is discarded entirely. Characters that no pattern claims, including
/// whitespace, are dropped: malformed input is reported by the parser, never here.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut claimed = vec![false; input.len()];
    let mut tokens = Vec::new();

    for (kind, matcher) in MATCHERS.iter() {
        for m in matcher.find_iter(input) {
            let range = m.range();
            if claimed[range.clone()].iter().any(|&c| c) {
                continue;
            }

            claimed[range.clone()].fill(true);
            tokens.push(Token {
                span: range,
                kind: *kind,
                lexeme: m.as_str(),
            });
        }
    }

    // matching happened kind by kind; restore document order
    tokens.sort_by_key(|token| token.span.start);
    tracing::trace!(?tokens, "tokenized input");
    tokens
}
