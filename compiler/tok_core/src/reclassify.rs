//! Post-hoc relabeling of single-byte tokens.
//!
//! Rules form an ordered list evaluated first-match-wins, so the result is
//! deterministic even if two rules share a byte. Rule sets should still be
//! kept disjoint.

use crate::byte_set::ByteSet;
use crate::token::{Token, TokenType};

/// Relabel a single-byte token as `kind` when its byte is in `bytes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub kind: TokenType,
    pub bytes: ByteSet,
}

impl Rule {
    pub const fn new(kind: TokenType, bytes: &[u8]) -> Self {
        Self {
            kind,
            bytes: ByteSet::new(bytes),
        }
    }

    /// Returns `true` if `value` is exactly one byte and that byte is in
    /// this rule's set.
    pub fn matches(&self, value: &[u8]) -> bool {
        matches!(value, [b] if self.bytes.contains(*b))
    }
}

/// Structural single characters used by the element tokenizer.
pub static STRUCTURAL_RULES: [Rule; 7] = [
    Rule::new(TokenType::OpenCurlyBracket, b"{"),
    Rule::new(TokenType::CloseCurlyBracket, b"}"),
    Rule::new(TokenType::AtSign, b"@"),
    Rule::new(TokenType::EqualSign, b"="),
    Rule::new(TokenType::DoubleQuote, b"\""),
    Rule::new(TokenType::SingleQuote, b"'"),
    Rule::new(TokenType::Comma, b","),
];

/// Open and close brackets of each kind.
pub static BRACKET_RULES: [Rule; 6] = [
    Rule::new(TokenType::OpenCurlyBracket, b"{"),
    Rule::new(TokenType::CloseCurlyBracket, b"}"),
    Rule::new(TokenType::OpenSquareBracket, b"["),
    Rule::new(TokenType::CloseSquareBracket, b"]"),
    Rule::new(TokenType::OpenAngleBracket, b"<"),
    Rule::new(TokenType::CloseAngleBracket, b">"),
];

/// Brackets tagged by kind only, either side of the pair.
pub static BRACKET_PAIR_RULES: [Rule; 3] = [
    Rule::new(TokenType::CurlyBracket, b"{}"),
    Rule::new(TokenType::SquareBracket, b"[]"),
    Rule::new(TokenType::AngleBracket, b"<>"),
];

/// Return `token` relabeled by the first rule that matches its value.
///
/// Tokens that match no rule, including all multi-byte tokens, are
/// returned unchanged.
pub fn reclassify(token: Token, rules: &[Rule]) -> Token {
    match rules.iter().find(|rule| rule.matches(&token.value)) {
        Some(rule) => Token {
            kind: rule.kind.clone(),
            value: token.value,
        },
        None => token,
    }
}
