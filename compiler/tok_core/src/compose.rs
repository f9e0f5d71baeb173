//! Composed tokenizers: refine functions for [`step_with`](crate::step_with).
//!
//! Both merge letters greedily into a longer token. Matched bytes are
//! accumulated in the token's own buffer inside a loop, so a long run of
//! letters never deepens the call stack.

use crate::classifier::Classifier;
use crate::reclassify::{reclassify, STRUCTURAL_RULES};
use crate::token::{Token, TokenType};

impl Classifier {
    /// Absorb the run of `Letter` bytes at the front of `rest` into `token`.
    ///
    /// If at least one byte is absorbed the token is relabeled `kind`. The
    /// first non-letter byte is left in the returned remainder.
    fn absorb_letters<'a>(
        &self,
        token: &mut Token,
        mut rest: &'a [u8],
        kind: &TokenType,
    ) -> &'a [u8] {
        let start = rest.len();
        while self.peek_type(rest) == TokenType::Letter {
            let (next, tail) = self.step(rest);
            token.value.extend_from_slice(&next.value);
            rest = tail;
        }
        if rest.len() != start {
            token.kind = kind.clone();
            tracing::trace!(kind = %kind, len = token.value.len(), "merged letters");
        }
        rest
    }

    /// Merge consecutive letters into one `Word`.
    ///
    /// `Letter` and `Word` tokens absorb every following letter; any other
    /// token is returned unchanged.
    pub fn merge_words<'a>(&self, mut token: Token, rest: &'a [u8]) -> (Token, &'a [u8]) {
        match token.kind {
            TokenType::Letter | TokenType::Word => {
                let rest = self.absorb_letters(&mut token, rest, &TokenType::Word);
                (token, rest)
            }
            _ => (token, rest),
        }
    }

    /// Merge `@name` into an `Element`, letters into a `Word`, and give
    /// structural characters their own tags.
    ///
    /// Checked in order:
    /// 1. an element start (`AtSign`, `Element`, or a punctuation `@`)
    ///    absorbs the following letters as an `Element`;
    /// 2. `Letter` and `Word` merge as in [`merge_words`](Self::merge_words);
    /// 3. anything else is relabeled by [`STRUCTURAL_RULES`].
    ///
    /// A fresh `@` directly followed by letters becomes a single
    /// `Element` (`@article`), not an `AtSign` followed by a `Word`. Only an
    /// `@` with no letters after it is relabeled `AtSign`.
    pub fn merge_element<'a>(&self, mut token: Token, rest: &'a [u8]) -> (Token, &'a [u8]) {
        if is_element_start(&token) {
            let rest = self.absorb_letters(&mut token, rest, &TokenType::Element);
            if token.kind == TokenType::Element {
                return (token, rest);
            }
            // A lone `@`: fall through to the structural rules.
            return (reclassify(token, &STRUCTURAL_RULES), rest);
        }
        match token.kind {
            TokenType::Letter | TokenType::Word => self.merge_words(token, rest),
            _ => (reclassify(token, &STRUCTURAL_RULES), rest),
        }
    }
}

fn is_element_start(token: &Token) -> bool {
    match token.kind {
        TokenType::AtSign | TokenType::Element => true,
        TokenType::Punctuation => token.value == b"@",
        _ => false,
    }
}

/// [`Classifier::merge_words`] with the standard classifier.
pub fn merge_words(token: Token, rest: &[u8]) -> (Token, &[u8]) {
    Classifier::STANDARD.merge_words(token, rest)
}

/// [`Classifier::merge_element`] with the standard classifier.
pub fn merge_element(token: Token, rest: &[u8]) -> (Token, &[u8]) {
    Classifier::STANDARD.merge_element(token, rest)
}

#[cfg(test)]
mod tests;
