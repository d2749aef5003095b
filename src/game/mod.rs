//! Puzzle game logic
//!
//! Pool management, guess evaluation and the session state machine.

pub mod evaluator;
mod guess;
mod pool;
mod session;

pub use evaluator::{Verdict, common_color_count, evaluate, is_full_match};
pub use guess::Guess;
pub use pool::Pool;
pub use session::{PoolTransition, RejectReason, Session, Status, SubmitOutcome};

#[cfg(test)]
pub(crate) mod test_support {
    use super::Guess;
    use crate::core::{PuzzleDefinition, RawPuzzle, Word};

    /// Fish, planets, chess pieces, ___ball
    pub fn sample_puzzle() -> PuzzleDefinition {
        let raw = RawPuzzle {
            title: "starter pack".to_string(),
            author: "konnections".to_string(),
            names: ["Fish", "Planets", "Chess pieces", "___ball"]
                .map(String::from)
                .to_vec(),
            words: [
                ["bass", "cod", "perch", "sole"],
                ["earth", "mars", "venus", "mercury"],
                ["bishop", "king", "knight", "rook"],
                ["basket", "foot", "hand", "snow"],
            ]
            .map(|group| group.map(String::from).to_vec())
            .to_vec(),
        };
        PuzzleDefinition::from_raw(raw).unwrap()
    }

    pub fn guess(texts: &[&str]) -> Guess {
        let words: Vec<Word> = texts.iter().map(|t| Word::new(t).unwrap()).collect();
        Guess::from_slice(&words).unwrap()
    }
}
