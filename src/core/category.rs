//! Categories and their positional colors
//!
//! A category is addressed by its position in the puzzle definition (0-3).
//! Its color comes from that position, never from the puzzle data.

use super::{CATEGORY_COUNT, WORDS_PER_CATEGORY, Word};
use std::fmt;

/// Index of a category within a puzzle (0-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(u8);

impl CategoryId {
    /// All category ids in positional order
    pub const ALL: [Self; CATEGORY_COUNT] = [Self(0), Self(1), Self(2), Self(3)];

    /// Create a category id from a raw index
    ///
    /// Returns `None` if `index >= CATEGORY_COUNT`.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CATEGORY_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the positional index (0-3)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The banner color assigned to this position
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        Color::PALETTE[self.0 as usize]
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Banner color of a finished category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    /// Fixed palette, indexed by category position
    pub const PALETTE: [Self; CATEGORY_COUNT] =
        [Self::Yellow, Self::Green, Self::Blue, Self::Purple];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }
}

/// One validated category: a label and its four words
///
/// Words are stored in alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    words: [Word; WORDS_PER_CATEGORY],
}

impl Category {
    /// Words are sorted on construction; validation of names and uniqueness is
    /// the caller's job.
    pub(crate) fn new(id: CategoryId, name: String, mut words: [Word; WORDS_PER_CATEGORY]) -> Self {
        words.sort();
        Self { id, name, words }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[Word; WORDS_PER_CATEGORY] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.color()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: [&str; 4]) -> [Word; 4] {
        texts.map(|t| Word::new(t).unwrap())
    }

    #[test]
    fn category_id_bounds() {
        assert_eq!(CategoryId::new(0).map(CategoryId::index), Some(0));
        assert_eq!(CategoryId::new(3).map(CategoryId::index), Some(3));
        assert!(CategoryId::new(4).is_none());
    }

    #[test]
    fn category_id_all_in_order() {
        let indices: Vec<usize> = CategoryId::ALL.iter().map(|id| id.index()).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn colors_follow_position() {
        assert_eq!(CategoryId::ALL[0].color(), Color::Yellow);
        assert_eq!(CategoryId::ALL[1].color(), Color::Green);
        assert_eq!(CategoryId::ALL[2].color(), Color::Blue);
        assert_eq!(CategoryId::ALL[3].color(), Color::Purple);
    }

    #[test]
    fn category_words_sorted() {
        let category = Category::new(
            CategoryId::ALL[0],
            "cities".to_string(),
            words(["seattle", "charlotte", "san francisco", "new york"]),
        );
        let texts: Vec<&str> = category.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["charlotte", "new york", "san francisco", "seattle"]);
    }

    #[test]
    fn category_contains() {
        let category = Category::new(
            CategoryId::ALL[2],
            "implements".to_string(),
            words(["orca", "ikea shelf", "spa mask", "fresh made flapjacks"]),
        );
        assert!(category.contains(&Word::new("Orca").unwrap()));
        assert!(!category.contains(&Word::new("lei").unwrap()));
        assert_eq!(category.color(), Color::Blue);
    }
}
