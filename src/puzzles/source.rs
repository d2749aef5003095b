//! Puzzle sources
//!
//! Defines the `PuzzleSource` trait and the concrete places a puzzle can come from.

use super::{bundled, loader};
use crate::core::{PuzzleDefinition, PuzzleError};
use std::path::{Path, PathBuf};

/// Somewhere a validated puzzle can be loaded from
pub trait PuzzleSource {
    /// Decode and validate the puzzle
    ///
    /// # Errors
    /// Returns `PuzzleError` if the payload is missing, malformed or fails validation.
    fn load(&self) -> Result<PuzzleDefinition, PuzzleError>;
}

/// Enum wrapper for all source types
///
/// Allows choosing the source from a single CLI argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceType {
    /// Puzzle compiled into the binary
    Bundled(BundledPuzzle),
    /// JSON or `.b64` file on disk
    File(PuzzleFile),
    /// Base64 blob given inline
    Blob(EncodedPuzzle),
}

impl PuzzleSource for SourceType {
    fn load(&self) -> Result<PuzzleDefinition, PuzzleError> {
        let result = match self {
            Self::Bundled(s) => s.load(),
            Self::File(s) => s.load(),
            Self::Blob(s) => s.load(),
        };

        match &result {
            Ok(puzzle) => log::info!(
                "loaded puzzle '{}' by '{}' from {}",
                puzzle.title(),
                puzzle.author(),
                self.describe()
            ),
            Err(e) => log::error!("could not load puzzle from {}: {e}", self.describe()),
        }

        result
    }
}

impl SourceType {
    /// Pick a source from a CLI argument
    ///
    /// - an existing file, or anything ending in `.json` / `.b64`, is a file
    /// - short names (letters, digits, `-`, `_`) are bundled puzzle names
    /// - everything else is treated as an inline blob
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        let arg = arg.trim();
        let path = Path::new(arg);

        if path.is_file() {
            Self::File(PuzzleFile {
                path: path.to_path_buf(),
            })
        } else if is_puzzle_name(arg) {
            Self::Bundled(BundledPuzzle {
                name: arg.to_string(),
            })
        } else if arg.ends_with(".json") || arg.ends_with(".b64") {
            Self::File(PuzzleFile {
                path: path.to_path_buf(),
            })
        } else {
            Self::Blob(EncodedPuzzle {
                blob: arg.to_string(),
            })
        }
    }

    /// Short human-readable origin for log lines
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Bundled(s) => format!("bundled puzzle '{}'", s.name),
            Self::File(s) => format!("file {}", s.path.display()),
            Self::Blob(s) => format!("inline blob ({} bytes)", s.blob.len()),
        }
    }
}

/// Longest string treated as a bundled puzzle name rather than a blob
const MAX_NAME_LEN: usize = 32;

fn is_puzzle_name(arg: &str) -> bool {
    !arg.is_empty()
        && arg.len() <= MAX_NAME_LEN
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Puzzle compiled into the binary, looked up by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledPuzzle {
    pub name: String,
}

impl PuzzleSource for BundledPuzzle {
    fn load(&self) -> Result<PuzzleDefinition, PuzzleError> {
        let blob =
            bundled(&self.name).ok_or_else(|| PuzzleError::UnknownPuzzle(self.name.clone()))?;
        loader::decode_blob(blob)
    }
}

/// Puzzle stored in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleFile {
    pub path: PathBuf,
}

impl PuzzleSource for PuzzleFile {
    fn load(&self) -> Result<PuzzleDefinition, PuzzleError> {
        loader::load_from_file(&self.path)
    }
}

/// Puzzle passed as a base64 blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPuzzle {
    pub blob: String,
}

impl PuzzleSource for EncodedPuzzle {
    fn load(&self) -> Result<PuzzleDefinition, PuzzleError> {
        loader::decode_blob(&self.blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_arg_bundled_name() {
        assert_eq!(
            SourceType::from_arg("kaimana"),
            SourceType::Bundled(BundledPuzzle {
                name: "kaimana".to_string()
            })
        );
    }

    #[test]
    fn from_arg_paths() {
        assert!(matches!(
            SourceType::from_arg("puzzles/today.json"),
            SourceType::File(_)
        ));
        assert!(matches!(
            SourceType::from_arg("today.b64"),
            SourceType::File(_)
        ));
    }

    #[test]
    fn from_arg_blob() {
        let blob = bundled("kaimana").unwrap();
        assert!(matches!(SourceType::from_arg(blob), SourceType::Blob(_)));
    }

    #[test]
    fn bundled_source_loads() {
        let puzzle = SourceType::from_arg("starter").load().unwrap();
        assert_eq!(puzzle.title(), "starter pack");
    }

    #[test]
    fn unknown_bundled_name() {
        match SourceType::from_arg("nope").load() {
            Err(PuzzleError::UnknownPuzzle(name)) => assert_eq!(name, "nope"),
            other => panic!("Expected UnknownPuzzle, got {other:?}"),
        }
    }

    #[test]
    fn inline_blob_loads() {
        let blob = bundled("kaimana").unwrap().to_string();
        let puzzle = EncodedPuzzle { blob }.load().unwrap();
        assert_eq!(puzzle.categories()[1].words().len(), 4);
    }

    #[test]
    fn describe_mentions_origin() {
        assert_eq!(
            SourceType::from_arg("starter").describe(),
            "bundled puzzle 'starter'"
        );
    }
}
