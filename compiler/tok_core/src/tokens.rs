//! Iterator driving [`step_with`](crate::step_with) to end of input.

use std::iter::FusedIterator;

use crate::classifier::Classifier;
use crate::compose::{merge_element, merge_words};
use crate::step::identity;
use crate::token::Token;

/// Refine function pointer accepted by the convenience constructors.
pub type RefineFn = for<'r> fn(Token, &'r [u8]) -> (Token, &'r [u8]);

/// Yields one token per [`Classifier::step_with`] call.
///
/// `EndOfInput` is never yielded; once it is reached the iterator is
/// exhausted and [`rest`](Self::rest) is empty.
pub struct Tokens<'a, F> {
    classifier: Classifier,
    rest: &'a [u8],
    refine: F,
    done: bool,
}

impl<'a, F> Tokens<'a, F>
where
    F: FnMut(Token, &'a [u8]) -> (Token, &'a [u8]),
{
    /// Iterate with [`Classifier::STANDARD`].
    pub fn new(buf: &'a [u8], refine: F) -> Self {
        Self::with_classifier(Classifier::STANDARD, buf, refine)
    }

    /// Iterate with a custom classifier for the base step.
    ///
    /// `refine` is called as given. The free refine functions such as
    /// [`merge_words`] always use [`Classifier::STANDARD`]; to merge with
    /// `classifier` too, pass a closure such as `|t, b| c.merge_words(t, b)`.
    pub fn with_classifier(classifier: Classifier, buf: &'a [u8], refine: F) -> Self {
        Self {
            classifier,
            rest: buf,
            refine,
            done: false,
        }
    }

    /// The bytes not yet consumed.
    pub fn rest(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a, F> Iterator for Tokens<'a, F>
where
    F: FnMut(Token, &'a [u8]) -> (Token, &'a [u8]),
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let (token, rest) = self.classifier.step_with(self.rest, &mut self.refine);
        self.rest = rest;
        if token.is_end_of_input() {
            self.done = true;
            return None;
        }
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // Every token consumes at least one byte.
            (usize::from(!self.rest.is_empty()), Some(self.rest.len()))
        }
    }
}

impl<'a, F> FusedIterator for Tokens<'a, F> where F: FnMut(Token, &'a [u8]) -> (Token, &'a [u8]) {}

/// Base tokens of `buf`, one per byte.
pub fn tokens(buf: &[u8]) -> Tokens<'_, RefineFn> {
    Tokens::new(buf, identity as RefineFn)
}

/// `buf` tokenized with [`merge_words`].
pub fn words(buf: &[u8]) -> Tokens<'_, RefineFn> {
    Tokens::new(buf, merge_words as RefineFn)
}

/// `buf` tokenized with [`merge_element`].
pub fn elements(buf: &[u8]) -> Tokens<'_, RefineFn> {
    Tokens::new(buf, merge_element as RefineFn)
}
