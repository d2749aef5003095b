//! Guess evaluation
//!
//! Pure functions classifying a guess against the puzzle definition.

use super::Guess;
use crate::core::{CATEGORY_COUNT, CategoryId, PuzzleDefinition, WORDS_PER_CATEGORY, Word};

/// Classification of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// All four words belong to this category
    Solved(CategoryId),
    /// Exactly three words share a category
    OneAway,
    /// Two or fewer words share any category
    Miss,
}

/// Category owning `word`
///
/// Every word in a session pool belongs to the puzzle, so `None` only shows up
/// for words from outside the game.
#[inline]
#[must_use]
pub fn category_of(puzzle: &PuzzleDefinition, word: &Word) -> Option<CategoryId> {
    puzzle.category_of(word)
}

/// Size of the largest group of guessed words sharing one category
///
/// Equals 4 exactly when the guess is a full match.
#[must_use]
pub fn common_color_count(puzzle: &PuzzleDefinition, guess: &Guess) -> usize {
    let mut counts = [0usize; CATEGORY_COUNT];
    for id in guess.words().iter().filter_map(|w| category_of(puzzle, w)) {
        counts[id.index()] += 1;
    }
    counts.into_iter().max().unwrap_or(0)
}

/// The category all four words belong to, if there is one
#[must_use]
pub fn matched_category(puzzle: &PuzzleDefinition, guess: &Guess) -> Option<CategoryId> {
    let mut ids = guess.words().iter().map(|w| category_of(puzzle, w));
    let first = ids.next()??;
    ids.all(|id| id == Some(first)).then_some(first)
}

#[inline]
#[must_use]
pub fn is_full_match(puzzle: &PuzzleDefinition, guess: &Guess) -> bool {
    matched_category(puzzle, guess).is_some()
}

/// Classify a guess
///
/// # Examples
/// ```
/// use connections_puzzle::core::{PuzzleDefinition, RawPuzzle, Word};
/// use connections_puzzle::game::{Guess, Verdict, evaluate};
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
///
/// let words = ["w00", "w01", "w02", "w13"].map(|t| Word::new(t).unwrap());
/// assert_eq!(evaluate(&puzzle, &Guess::new(words)), Verdict::OneAway);
/// ```
#[must_use]
pub fn evaluate(puzzle: &PuzzleDefinition, guess: &Guess) -> Verdict {
    if let Some(id) = matched_category(puzzle, guess) {
        return Verdict::Solved(id);
    }

    if common_color_count(puzzle, guess) == WORDS_PER_CATEGORY - 1 {
        Verdict::OneAway
    } else {
        Verdict::Miss
    }
}

/// Categories solved by `guesses`, in the order they were solved
#[must_use]
pub fn solved_categories(puzzle: &PuzzleDefinition, guesses: &[Guess]) -> Vec<CategoryId> {
    guesses
        .iter()
        .filter_map(|guess| matched_category(puzzle, guess))
        .collect()
}

/// Number of guesses that were not full matches
#[must_use]
pub fn count_mistakes(puzzle: &PuzzleDefinition, guesses: &[Guess]) -> usize {
    guesses
        .iter()
        .filter(|guess| !is_full_match(puzzle, guess))
        .count()
}
