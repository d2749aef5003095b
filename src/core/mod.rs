//! Core domain types for the puzzle
//!
//! This module contains the validated data model. Nothing here knows about
//! sessions, shuffling or rendering.

mod category;
mod puzzle;
mod word;

pub use category::{Category, CategoryId, Color};
pub use puzzle::{PuzzleDefinition, PuzzleError, RawPuzzle};
pub use word::{Word, WordError};

/// Number of categories in a puzzle
pub const CATEGORY_COUNT: usize = 4;

/// Number of words in every category, and therefore in every guess
pub const WORDS_PER_CATEGORY: usize = 4;

/// Non-matching guesses allowed before the session is lost
pub const MISTAKE_BUDGET: usize = WORDS_PER_CATEGORY;
