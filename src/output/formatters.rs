//! Formatting utilities for terminal output

use crate::core::{Color, MISTAKE_BUDGET, PuzzleDefinition, Word};
use crate::game::Guess;

/// Square emoji for a category color
#[must_use]
pub const fn color_square(color: Color) -> &'static str {
    match color {
        Color::Yellow => "🟨",
        Color::Green => "🟩",
        Color::Blue => "🟦",
        Color::Purple => "🟪",
    }
}

/// One emoji row per guess, one square per word
///
/// Words outside the puzzle render as a white square.
#[must_use]
pub fn guess_to_emoji(puzzle: &PuzzleDefinition, guess: &Guess) -> String {
    guess
        .words()
        .iter()
        .map(|word| {
            puzzle
                .category_of(word)
                .map_or("⬜", |id| color_square(id.color()))
        })
        .collect()
}

/// Filled dots for mistakes left, hollow dots for mistakes made
#[must_use]
pub fn mistake_dots(remaining: usize) -> String {
    let remaining = remaining.min(MISTAKE_BUDGET);
    let mut dots = vec!["●"; remaining];
    dots.resize(MISTAKE_BUDGET, "○");
    dots.join(" ")
}

/// Uppercase tile label fitted to `width` characters
///
/// Longer labels are cut and end with `…`.
#[must_use]
pub fn tile_label(word: &Word, width: usize) -> String {
    let label = word.text().to_uppercase();
    if label.chars().count() <= width {
        return label;
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = label.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{guess, sample_puzzle};

    #[test]
    fn color_squares() {
        assert_eq!(color_square(Color::Yellow), "🟨");
        assert_eq!(color_square(Color::Purple), "🟪");
    }

    #[test]
    fn guess_emoji_row() {
        let puzzle = sample_puzzle();
        let g = guess(&["bass", "earth", "cod", "foot"]);
        assert_eq!(guess_to_emoji(&puzzle, &g), "🟨🟩🟨🟪");
    }

    #[test]
    fn mistake_dots_all_left() {
        assert_eq!(mistake_dots(4), "● ● ● ●");
    }

    #[test]
    fn mistake_dots_some_used() {
        assert_eq!(mistake_dots(1), "● ○ ○ ○");
        assert_eq!(mistake_dots(0), "○ ○ ○ ○");
    }

    #[test]
    fn mistake_dots_clamped() {
        assert_eq!(mistake_dots(9), "● ● ● ●");
    }

    #[test]
    fn tile_label_fits() {
        let word = Word::new("orca").unwrap();
        assert_eq!(tile_label(&word, 10), "ORCA");
    }

    #[test]
    fn tile_label_truncated() {
        let word = Word::new("fresh made flapjacks").unwrap();
        assert_eq!(tile_label(&word, 8), "FRESH M…");
        assert_eq!(tile_label(&word, 0), "");
    }
}
