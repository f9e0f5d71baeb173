//! Bulk-discard of a run of one token type.

use crate::classifier::Classifier;
use crate::token::{Token, TokenType};

/// Result of a skip: what was discarded, the first token of another type,
/// and the buffer remaining after that token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped<'a> {
    /// Concatenated values of the skipped tokens.
    pub skipped: Vec<u8>,
    /// First token whose type differs from the target, or `EndOfInput`.
    pub token: Token,
    /// Remainder after `token`. Empty when `token` is `EndOfInput`.
    pub rest: &'a [u8],
}

impl Classifier {
    /// Skip consecutive base tokens of type `target`.
    pub fn skip<'a>(&self, target: &TokenType, buf: &'a [u8]) -> Skipped<'a> {
        self.skip_with(target, buf, |token, rest| (token, rest))
    }

    /// Skip consecutive tokens of type `target`, where each token comes from
    /// [`step_with`](Self::step_with) with `refine`.
    ///
    /// Terminates at the first token of another type or at `EndOfInput`,
    /// whichever comes first. `EndOfInput` stops the loop even when it is
    /// itself the target, so the call always terminates.
    pub fn skip_with<'a, F>(&self, target: &TokenType, mut buf: &'a [u8], mut refine: F) -> Skipped<'a>
    where
        F: FnMut(Token, &'a [u8]) -> (Token, &'a [u8]),
    {
        let mut skipped = Vec::new();
        loop {
            let (token, rest) = self.step_with(buf, &mut refine);
            if token.is_end_of_input() || token.kind != *target {
                tracing::trace!(
                    target_type = %target,
                    skipped = skipped.len(),
                    stop = %token.kind,
                    "skip done"
                );
                return Skipped {
                    skipped,
                    token,
                    rest,
                };
            }
            skipped.extend_from_slice(&token.value);
            buf = rest;
        }
    }
}

/// [`Classifier::skip`] with the standard classifier.
pub fn skip<'a>(target: &TokenType, buf: &'a [u8]) -> Skipped<'a> {
    Classifier::STANDARD.skip(target, buf)
}

/// [`Classifier::skip_with`] with the standard classifier.
pub fn skip_with<'a, F>(target: &TokenType, buf: &'a [u8], refine: F) -> Skipped<'a>
where
    F: FnMut(Token, &'a [u8]) -> (Token, &'a [u8]),
{
    Classifier::STANDARD.skip_with(target, buf, refine)
}
