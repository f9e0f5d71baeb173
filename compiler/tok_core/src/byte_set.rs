//! Immutable 256-bit byte membership set.
//!
//! Classifier tables and reclassification rules are fixed for the process
//! lifetime, so sets are built in `const` context and never mutated.

use std::fmt;

/// Set of byte values, one bit per possible `u8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet {
    bits: [u64; 4],
}

impl ByteSet {
    /// The empty set.
    pub const EMPTY: ByteSet = ByteSet { bits: [0; 4] };

    /// Build a set from a list of members. Duplicates are allowed.
    pub const fn new(members: &[u8]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < members.len() {
            let b = members[i];
            bits[(b >> 6) as usize] |= 1u64 << (b & 63);
            i += 1;
        }
        Self { bits }
    }

    /// Returns `true` if `byte` is a member.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    /// Returns `true` if no byte is a member of both sets.
    pub const fn is_disjoint(&self, other: &ByteSet) -> bool {
        let mut i = 0;
        while i < 4 {
            if self.bits[i] & other.bits[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Number of distinct members.
    pub const fn len(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        while i < 4 {
            n += self.bits[i].count_ones() as usize;
            i += 1;
        }
        n
    }

    /// Returns `true` if the set has no members.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&b| self.contains(b))
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<u8> = self.iter().collect();
        write!(f, "ByteSet(\"{}\")", members.escape_ascii())
    }
}

#[cfg(test)]
mod tests;
