//! Puzzle definitions
//!
//! Bundled puzzles compiled into the binary, plus loaders for blobs and files.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{BUNDLED, BUNDLED_COUNT};
pub use source::{PuzzleSource, SourceType};

/// Puzzle played when none is named
pub const DEFAULT_PUZZLE: &str = "kaimana";

/// Blob of the bundled puzzle called `name`
#[must_use]
pub fn bundled(name: &str) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|(bundled_name, _)| *bundled_name == name)
        .map(|&(_, blob)| blob)
}

/// Names of all bundled puzzles, sorted
#[must_use]
pub fn bundled_names() -> Vec<&'static str> {
    BUNDLED.iter().map(|&(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_count_matches_const() {
        assert_eq!(BUNDLED.len(), BUNDLED_COUNT);
    }

    #[test]
    fn default_puzzle_is_bundled() {
        assert!(bundled(DEFAULT_PUZZLE).is_some());
    }

    #[test]
    fn bundled_names_sorted() {
        let names = bundled_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"starter"));
    }

    #[test]
    fn every_bundled_puzzle_is_valid() {
        for &(name, blob) in BUNDLED {
            assert!(
                loader::decode_blob(blob).is_ok(),
                "Bundled puzzle '{name}' does not validate"
            );
        }
    }

    #[test]
    fn kaimana_contents() {
        let puzzle = loader::decode_blob(bundled("kaimana").unwrap()).unwrap();
        assert_eq!(puzzle.title(), "kaimana konnections");
        assert_eq!(puzzle.author(), "");
        assert_eq!(puzzle.categories()[0].name(), "(some) cities we come from");
        let symbols: Vec<&str> = puzzle.categories()[1]
            .words()
            .iter()
            .map(crate::core::Word::text)
            .collect();
        assert_eq!(symbols, ["hula", "nene", "shaka", "ukulele"]);
    }
}
