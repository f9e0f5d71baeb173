//! Single-byte classifier and composable lookahead tokenizer.
//!
//! The base tokenizer ([`step`]) consumes exactly one byte and classifies it
//! as a `Letter`, `Numeral`, `Punctuation` or `Space`. Longer tokens are
//! built by composition: [`step_with`] hands each one-byte token and the
//! remaining buffer to a refine function, which may consume more bytes.
//!
//! ```text
//! step(b"abc 1")                   -> ({Letter, "a"}, b"bc 1")
//! step_with(b"abc 1", merge_words) -> ({Word, "abc"}, b" 1")
//! skip(&Space, b"   x")            -> Skipped { skipped: "   ", token: {Letter, "x"}, rest: "" }
//! ```
//!
//! End of input is not an error: every function is total, and an empty
//! buffer yields an `EndOfInput` token with an empty value.
//!
//! Free functions use [`Classifier::STANDARD`]. For custom byte sets, build a
//! [`Classifier`] and call the methods of the same name on it.

mod byte_set;
mod classifier;
mod compose;
mod reclassify;
mod skip;
mod step;
mod token;
mod tokens;

pub use byte_set::ByteSet;
pub use classifier::{
    classify, is_numeral, is_punctuation, is_space, Classifier, NUMERALS, PUNCTUATION_MARKS,
    SPACES,
};
pub use compose::{merge_element, merge_words};
pub use reclassify::{reclassify, Rule, BRACKET_PAIR_RULES, BRACKET_RULES, STRUCTURAL_RULES};
pub use skip::{skip, skip_with, Skipped};
pub use step::{identity, step, step_with};
pub use token::{Token, TokenType};
pub use tokens::{elements, tokens, words, RefineFn, Tokens};
