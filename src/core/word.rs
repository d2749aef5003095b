//! Puzzle word representation
//!
//! A Word is a normalized tile label: trimmed and lowercased so that equality,
//! hashing and alphabetical ordering are deterministic.

use std::fmt;

/// A single puzzle tile
///
/// Multi-word labels ("new york") are allowed; only surrounding whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing remains after trimming.
    ///
    /// # Examples
    /// ```
    /// use connections_puzzle::core::Word;
    ///
    /// let word = Word::new("  New York ").unwrap();
    /// assert_eq!(word.text(), "new york");
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("orca").unwrap();
        assert_eq!(word.text(), "orca");
    }

    #[test]
    fn word_creation_normalized() {
        assert_eq!(Word::new("ORCA").unwrap().text(), "orca");
        assert_eq!(Word::new("  Spa Mask\t").unwrap().text(), "spa mask");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new(" \n "), Err(WordError::Empty));
    }

    #[test]
    fn word_keeps_inner_whitespace() {
        let word = Word::new("fresh made flapjacks").unwrap();
        assert_eq!(word.text(), "fresh made flapjacks");
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![
            Word::new("sun").unwrap(),
            Word::new("Gaia").unwrap(),
            Word::new("wild").unwrap(),
            Word::new("lei").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["gaia", "lei", "sun", "wild"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Hula").unwrap();
        assert_eq!(format!("{word}"), "hula");
    }

    #[test]
    fn word_equality() {
        assert_eq!(Word::new("nene").unwrap(), Word::new(" NENE").unwrap());
        assert_ne!(Word::new("nene").unwrap(), Word::new("hula").unwrap());
    }
}
