//! Base tokenizer and lookahead composition hook.
//!
//! [`step`] consumes exactly one byte and returns a one-byte token plus the
//! remaining buffer. [`step_with`] hands that result to a refine function,
//! which may consume more bytes from the remainder to build a longer token.
//!
//! End of input is signaled by an [`EndOfInput`](TokenType::EndOfInput)
//! token and an empty remainder, never by an error.

use crate::classifier::Classifier;
use crate::token::{Token, TokenType};

impl Classifier {
    /// Consume one byte from `buf` and classify it.
    ///
    /// For non-empty input the returned slice is exactly one byte shorter.
    pub fn step<'a>(&self, buf: &'a [u8]) -> (Token, &'a [u8]) {
        match buf.split_first() {
            None => (Token::end_of_input(), buf),
            Some((&byte, rest)) => (
                Token {
                    kind: self.classify(byte),
                    value: vec![byte],
                },
                rest,
            ),
        }
    }

    /// [`step`](Self::step), then pass the token and remainder to `refine`.
    pub fn step_with<'a, F>(&self, buf: &'a [u8], refine: F) -> (Token, &'a [u8])
    where
        F: FnOnce(Token, &'a [u8]) -> (Token, &'a [u8]),
    {
        let (token, rest) = self.step(buf);
        refine(token, rest)
    }

    /// Type of the next byte without consuming it. `EndOfInput` if empty.
    #[inline]
    pub(crate) fn peek_type(&self, buf: &[u8]) -> TokenType {
        buf.first()
            .map_or(TokenType::EndOfInput, |&b| self.classify(b))
    }
}

/// [`Classifier::step`] with the standard classifier.
pub fn step(buf: &[u8]) -> (Token, &[u8]) {
    Classifier::STANDARD.step(buf)
}

/// [`Classifier::step_with`] with the standard classifier.
pub fn step_with<'a, F>(buf: &'a [u8], refine: F) -> (Token, &'a [u8])
where
    F: FnOnce(Token, &'a [u8]) -> (Token, &'a [u8]),
{
    Classifier::STANDARD.step_with(buf, refine)
}

/// Pass-through refine function: `step_with(b, identity) == step(b)`.
pub fn identity(token: Token, rest: &[u8]) -> (Token, &[u8]) {
    (token, rest)
}
