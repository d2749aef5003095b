//! Submitted guesses

use crate::core::{WORDS_PER_CATEGORY, Word};
use std::fmt;

/// Four words submitted together
///
/// Keeps the order in which the words were selected, but two guesses compare
/// as the same guess when they hold the same words in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess([Word; WORDS_PER_CATEGORY]);

impl Guess {
    #[must_use]
    pub const fn new(words: [Word; WORDS_PER_CATEGORY]) -> Self {
        Self(words)
    }

    /// Build a guess from a selection
    ///
    /// Returns `None` unless the slice holds exactly four words.
    #[must_use]
    pub fn from_slice(words: &[Word]) -> Option<Self> {
        words.to_vec().try_into().ok().map(Self)
    }

    /// Words in selection order
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[Word; WORDS_PER_CATEGORY] {
        &self.0
    }

    /// Words in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> [Word; WORDS_PER_CATEGORY] {
        let mut words = self.0.clone();
        words.sort();
        words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word)
    }

    /// Order-insensitive comparison
    #[must_use]
    pub fn same_words(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let texts: Vec<&str> = self.0.iter().map(Word::text).collect();
        write!(f, "[{}]", texts.join(", "))
    }
}
