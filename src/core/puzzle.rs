//! Validated puzzle definition
//!
//! A `PuzzleDefinition` can only be built through validation, so every value of
//! this type satisfies the 4×4 shape and the word-uniqueness invariant.

use super::{CATEGORY_COUNT, Category, CategoryId, WORDS_PER_CATEGORY, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Puzzle document as it appears inside an encoded blob
///
/// Field lengths are checked by validation rather than by the deserializer so
/// that shape problems get a precise error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPuzzle {
    pub title: String,
    pub author: String,
    pub names: Vec<String>,
    pub words: Vec<Vec<String>>,
}

/// Error type for puzzle loading and validation
#[derive(Debug)]
pub enum PuzzleError {
    /// Blob is not valid base64
    Decode(base64::DecodeError),
    /// Document is not valid puzzle JSON
    Json(serde_json::Error),
    /// Puzzle file could not be read
    Io(std::io::Error),
    /// No bundled puzzle with this name
    UnknownPuzzle(String),
    /// Wrong number of category names or word groups
    CategoryCount { names: usize, groups: usize },
    /// Category name is blank
    EmptyName(usize),
    /// Category does not have exactly four words
    WordCount { category: usize, count: usize },
    /// A word is blank
    InvalidWord { category: usize, position: usize },
    /// The same word appears more than once
    DuplicateWord(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "Puzzle blob is not valid base64: {e}"),
            Self::Json(e) => write!(f, "Puzzle document is not valid JSON: {e}"),
            Self::Io(e) => write!(f, "Could not read puzzle file: {e}"),
            Self::UnknownPuzzle(name) => write!(f, "No bundled puzzle named '{name}'"),
            Self::CategoryCount { names, groups } => write!(
                f,
                "Puzzle must have exactly {CATEGORY_COUNT} categories, got {names} names and {groups} word groups"
            ),
            Self::EmptyName(category) => write!(f, "Category {category} has an empty name"),
            Self::WordCount { category, count } => write!(
                f,
                "Category {category} must have exactly {WORDS_PER_CATEGORY} words, got {count}"
            ),
            Self::InvalidWord { category, position } => {
                write!(f, "Word {position} of category {category} is empty")
            }
            Self::DuplicateWord(word) => write!(f, "Word '{word}' appears more than once"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for PuzzleError {
    fn from(e: base64::DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<serde_json::Error> for PuzzleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Immutable, validated puzzle
#[derive(Debug, Clone)]
pub struct PuzzleDefinition {
    title: String,
    author: String,
    categories: [Category; CATEGORY_COUNT],
    membership: FxHashMap<Word, CategoryId>,
}

impl PuzzleDefinition {
    /// Validate a raw puzzle document
    ///
    /// # Errors
    /// Returns the first `PuzzleError` found, checking in order: category count,
    /// category names, word counts, blank words, duplicate words.
    ///
    /// # Examples
    /// ```
    /// use connections_puzzle::core::{PuzzleDefinition, RawPuzzle};
    ///
    /// let raw = RawPuzzle {
    ///     title: "demo".into(),
    ///     author: String::new(),
    ///     names: vec!["a".into(), "b".into(), "c".into(), "d".into()],
    ///     words: (0..4)
    ///         .map(|c| (0..4).map(|w| format!("w{c}{w}")).collect())
    ///         .collect(),
    /// };
    /// let puzzle = PuzzleDefinition::from_raw(raw).unwrap();
    /// assert_eq!(puzzle.all_words().count(), 16);
    /// ```
    pub fn from_raw(raw: RawPuzzle) -> Result<Self, PuzzleError> {
        let RawPuzzle {
            title,
            author,
            names,
            words,
        } = raw;

        if names.len() != CATEGORY_COUNT || words.len() != CATEGORY_COUNT {
            return Err(PuzzleError::CategoryCount {
                names: names.len(),
                groups: words.len(),
            });
        }

        if let Some(blank) = names.iter().position(|name| name.trim().is_empty()) {
            return Err(PuzzleError::EmptyName(blank));
        }

        if let Some((category, group)) = words
            .iter()
            .enumerate()
            .find(|(_, group)| group.len() != WORDS_PER_CATEGORY)
        {
            return Err(PuzzleError::WordCount {
                category,
                count: group.len(),
            });
        }

        let mut membership = FxHashMap::default();
        let mut categories = Vec::with_capacity(CATEGORY_COUNT);

        for ((id, name), group) in CategoryId::ALL.into_iter().zip(names).zip(words) {
            let mut normalized = Vec::with_capacity(WORDS_PER_CATEGORY);
            for (position, text) in group.iter().enumerate() {
                let word = Word::new(text).map_err(|_| PuzzleError::InvalidWord {
                    category: id.index(),
                    position,
                })?;
                if membership.insert(word.clone(), id).is_some() {
                    return Err(PuzzleError::DuplicateWord(word.text().to_string()));
                }
                normalized.push(word);
            }

            let count = normalized.len();
            let words: [Word; WORDS_PER_CATEGORY] =
                normalized.try_into().map_err(|_| PuzzleError::WordCount {
                    category: id.index(),
                    count,
                })?;
            categories.push(Category::new(id, name.trim().to_string(), words));
        }

        let groups = categories.len();
        let categories: [Category; CATEGORY_COUNT] =
            categories
                .try_into()
                .map_err(|_| PuzzleError::CategoryCount {
                    names: groups,
                    groups,
                })?;

        Ok(Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            categories,
            membership,
        })
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Categories in positional order
    #[inline]
    #[must_use]
    pub const fn categories(&self) -> &[Category; CATEGORY_COUNT] {
        &self.categories
    }

    #[inline]
    #[must_use]
    pub const fn category(&self, id: CategoryId) -> &Category {
        &self.categories[id.index()]
    }

    /// Category owning `word`, or `None` if the word is not part of this puzzle
    #[inline]
    #[must_use]
    pub fn category_of(&self, word: &Word) -> Option<CategoryId> {
        self.membership.get(word).copied()
    }

    /// All sixteen words, category by category
    pub fn all_words(&self) -> impl Iterator<Item = &Word> {
        self.categories.iter().flat_map(|category| category.words().iter())
    }

    /// Convert back into the document form (words in normalized, sorted order)
    #[must_use]
    pub fn to_raw(&self) -> RawPuzzle {
        RawPuzzle {
            title: self.title.clone(),
            author: self.author.clone(),
            names: self.categories.iter().map(|c| c.name().to_string()).collect(),
            words: self
                .categories
                .iter()
                .map(|c| c.words().iter().map(|w| w.text().to_string()).collect())
                .collect(),
        }
    }
}
