//! Puzzle decoding utilities
//!
//! Turns base64 blobs, JSON documents and files into validated puzzles.

use crate::core::{PuzzleDefinition, PuzzleError, RawPuzzle};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

/// Decode a base64-encoded JSON puzzle
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `PuzzleError::Decode` for invalid base64, `PuzzleError::Json` for a
/// malformed document, or a validation error from `PuzzleDefinition::from_raw`.
///
/// # Examples
/// ```
/// use connections_puzzle::puzzles::loader::decode_blob;
/// use connections_puzzle::puzzles::bundled;
///
/// let puzzle = decode_blob(bundled("kaimana").unwrap()).unwrap();
/// assert_eq!(puzzle.title(), "kaimana konnections");
/// ```
pub fn decode_blob(blob: &str) -> Result<PuzzleDefinition, PuzzleError> {
    let bytes = STANDARD.decode(blob.trim())?;
    from_json_slice(&bytes)
}

/// Parse and validate a JSON puzzle document
///
/// # Errors
///
/// Returns `PuzzleError::Json` or a validation error.
pub fn from_json(json: &str) -> Result<PuzzleDefinition, PuzzleError> {
    from_json_slice(json.as_bytes())
}

fn from_json_slice(bytes: &[u8]) -> Result<PuzzleDefinition, PuzzleError> {
    let raw: RawPuzzle = serde_json::from_slice(bytes)?;
    PuzzleDefinition::from_raw(raw)
}

/// Load a puzzle from a file
///
/// Files ending in `.b64` hold a blob; anything else is read as JSON.
///
/// # Errors
///
/// Returns `PuzzleError::Io` if the file cannot be read, otherwise the same
/// errors as `decode_blob` / `from_json`.
///
/// # Examples
/// ```no_run
/// use connections_puzzle::puzzles::loader::load_from_file;
///
/// let puzzle = load_from_file("data/puzzles/kaimana.b64").unwrap();
/// println!("Loaded '{}'", puzzle.title());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PuzzleDefinition, PuzzleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    if path.extension().is_some_and(|ext| ext == "b64") {
        decode_blob(&content)
    } else {
        from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTER_JSON: &str = r#"{
        "title": "starter pack",
        "author": "konnections",
        "names": ["Fish", "Planets", "Chess pieces", "___ball"],
        "words": [
            ["bass", "cod", "perch", "sole"],
            ["earth", "mars", "venus", "mercury"],
            ["bishop", "king", "knight", "rook"],
            ["basket", "foot", "hand", "snow"]
        ]
    }"#;

    #[test]
    fn from_json_valid() {
        let puzzle = from_json(STARTER_JSON).unwrap();
        assert_eq!(puzzle.title(), "starter pack");
        assert_eq!(puzzle.author(), "konnections");
        assert_eq!(puzzle.categories()[3].name(), "___ball");
    }

    #[test]
    fn decode_blob_round_trip() {
        let blob = STANDARD.encode(STARTER_JSON);
        let puzzle = decode_blob(&format!("  {blob}\n")).unwrap();
        assert_eq!(puzzle.title(), "starter pack");
    }

    #[test]
    fn decode_blob_rejects_bad_base64() {
        assert!(matches!(
            decode_blob("not*base64!"),
            Err(PuzzleError::Decode(_))
        ));
    }

    #[test]
    fn decode_blob_rejects_bad_json() {
        let blob = STANDARD.encode("{\"title\": 4}");
        assert!(matches!(decode_blob(&blob), Err(PuzzleError::Json(_))));
    }

    #[test]
    fn missing_field_is_json_error() {
        let json = r#"{"title": "t", "names": [], "words": []}"#;
        assert!(matches!(from_json(json), Err(PuzzleError::Json(_))));
    }

    #[test]
    fn validation_errors_pass_through() {
        let json = STARTER_JSON.replace("\"snow\"", "\"bass\"");
        assert!(matches!(
            from_json(&json),
            Err(PuzzleError::DuplicateWord(_))
        ));
    }

    #[test]
    fn load_from_missing_file() {
        assert!(matches!(
            load_from_file("no/such/puzzle.json"),
            Err(PuzzleError::Io(_))
        ));
    }

    #[test]
    fn load_from_json_and_blob_files() {
        let dir = std::env::temp_dir();
        let json_path = dir.join(format!("connections-{}.json", std::process::id()));
        let blob_path = dir.join(format!("connections-{}.b64", std::process::id()));
        fs::write(&json_path, STARTER_JSON).unwrap();
        fs::write(&blob_path, STANDARD.encode(STARTER_JSON)).unwrap();

        let from_json_file = load_from_file(&json_path).unwrap();
        let from_blob_file = load_from_file(&blob_path).unwrap();

        fs::remove_file(&json_path).unwrap();
        fs::remove_file(&blob_path).unwrap();
        assert_eq!(from_json_file.to_raw(), from_blob_file.to_raw());
    }
}
