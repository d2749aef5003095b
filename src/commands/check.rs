//! Puzzle check command
//!
//! Validates a puzzle source and summarizes it without revealing any answers.

use crate::core::{CATEGORY_COUNT, Color, PuzzleError};
use crate::puzzles::{PuzzleSource, SourceType};

/// Spoiler-free summary of a valid puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub origin: String,
    pub title: String,
    pub author: String,
    pub category_count: usize,
    pub word_count: usize,
    pub colors: [Color; CATEGORY_COUNT],
}

/// Load and validate a puzzle
///
/// # Errors
///
/// Returns the `PuzzleError` raised while decoding or validating.
pub fn check_puzzle(source: &SourceType) -> Result<CheckResult, PuzzleError> {
    let puzzle = source.load()?;

    Ok(CheckResult {
        origin: source.describe(),
        title: puzzle.title().to_string(),
        author: puzzle.author().to_string(),
        category_count: puzzle.categories().len(),
        word_count: puzzle.all_words().count(),
        colors: puzzle.categories().each_ref().map(|category| category.color()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_bundled_puzzle() {
        let result = check_puzzle(&SourceType::from_arg("kaimana")).unwrap();
        assert_eq!(result.title, "kaimana konnections");
        assert_eq!(result.author, "");
        assert_eq!(result.category_count, 4);
        assert_eq!(result.word_count, 16);
        assert_eq!(result.colors, Color::PALETTE);
        assert_eq!(result.origin, "bundled puzzle 'kaimana'");
    }

    #[test]
    fn check_reports_errors() {
        let result = check_puzzle(&SourceType::from_arg("%%%not a blob%%%"));
        assert!(matches!(result, Err(PuzzleError::Decode(_))));
    }
}
