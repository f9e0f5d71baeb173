//! Single-byte classification.
//!
//! A [`Classifier`] holds three byte sets: punctuation, spaces and
//! numerals. Classification tests them in that order and falls back to
//! [`TokenType::Letter`], so every byte (including non-ASCII bytes) has
//! exactly one base type even if the sets overlap.

use crate::byte_set::ByteSet;
use crate::token::TokenType;

/// Digit marks.
pub const NUMERALS: &[u8] = b"0123456789";

/// Whitespace marks.
pub const SPACES: &[u8] = b" \t\r\n";

/// Punctuation marks.
pub const PUNCTUATION_MARKS: &[u8] = b"~!@#$%^&*()_+`-=:{}|[]\\;\"'<>?,./";

/// Byte classifier configured with three byte sets.
///
/// The sets are expected to be pairwise disjoint ([`is_disjoint`]). If they
/// are not, punctuation wins over space, and space over numeral.
///
/// [`is_disjoint`]: Classifier::is_disjoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classifier {
    punctuation: ByteSet,
    spaces: ByteSet,
    numerals: ByteSet,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Classifier {
    /// ASCII punctuation, space/tab/CR/LF, and the decimal digits.
    pub const STANDARD: Classifier = Classifier::new(
        ByteSet::new(PUNCTUATION_MARKS),
        ByteSet::new(SPACES),
        ByteSet::new(NUMERALS),
    );

    /// Build a classifier from explicit sets.
    pub const fn new(punctuation: ByteSet, spaces: ByteSet, numerals: ByteSet) -> Self {
        Self {
            punctuation,
            spaces,
            numerals,
        }
    }

    /// Replace the punctuation set.
    #[must_use]
    pub const fn with_punctuation(mut self, set: ByteSet) -> Self {
        self.punctuation = set;
        self
    }

    /// Replace the space set.
    #[must_use]
    pub const fn with_spaces(mut self, set: ByteSet) -> Self {
        self.spaces = set;
        self
    }

    /// Replace the numeral set.
    #[must_use]
    pub const fn with_numerals(mut self, set: ByteSet) -> Self {
        self.numerals = set;
        self
    }

    /// The punctuation set.
    pub const fn punctuation(&self) -> &ByteSet {
        &self.punctuation
    }

    /// The space set.
    pub const fn spaces(&self) -> &ByteSet {
        &self.spaces
    }

    /// The numeral set.
    pub const fn numerals(&self) -> &ByteSet {
        &self.numerals
    }

    #[inline]
    pub const fn is_punctuation(&self, byte: u8) -> bool {
        self.punctuation.contains(byte)
    }

    #[inline]
    pub const fn is_space(&self, byte: u8) -> bool {
        self.spaces.contains(byte)
    }

    #[inline]
    pub const fn is_numeral(&self, byte: u8) -> bool {
        self.numerals.contains(byte)
    }

    /// Returns `true` when no byte belongs to more than one set.
    pub const fn is_disjoint(&self) -> bool {
        self.punctuation.is_disjoint(&self.spaces)
            && self.punctuation.is_disjoint(&self.numerals)
            && self.spaces.is_disjoint(&self.numerals)
    }

    /// Classify one byte. Total: anything unlisted is a `Letter`.
    #[inline]
    pub fn classify(&self, byte: u8) -> TokenType {
        if self.is_punctuation(byte) {
            TokenType::Punctuation
        } else if self.is_space(byte) {
            TokenType::Space
        } else if self.is_numeral(byte) {
            TokenType::Numeral
        } else {
            TokenType::Letter
        }
    }
}

/// Classify one byte with [`Classifier::STANDARD`].
#[inline]
pub fn classify(byte: u8) -> TokenType {
    Classifier::STANDARD.classify(byte)
}

#[inline]
pub fn is_punctuation(byte: u8) -> bool {
    Classifier::STANDARD.is_punctuation(byte)
}

#[inline]
pub fn is_space(byte: u8) -> bool {
    Classifier::STANDARD.is_space(byte)
}

#[inline]
pub fn is_numeral(byte: u8) -> bool {
    Classifier::STANDARD.is_numeral(byte)
}
