//! Single play session
//!
//! Owns the guess history, the current selection and the pool. Every player
//! action is a method; constraint violations leave the state untouched.

use super::evaluator::{self, Verdict};
use super::{Guess, Pool};
use crate::core::{CategoryId, MISTAKE_BUDGET, PuzzleDefinition, WORDS_PER_CATEGORY, Word};
use rand::Rng;

/// Outcome of the session so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submit was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Selection does not hold exactly four words
    IncompleteSelection,
    /// These four words were already submitted
    AlreadyGuessed,
    /// The session is already won or lost
    GameOver,
}

/// Pool snapshots around a solved category
///
/// `pre_removal` has the matched words moved to the front; `post_removal` is the
/// live pool after they are filtered out. Renderers may animate between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolTransition {
    pub pre_removal: Vec<Word>,
    pub post_removal: Vec<Word>,
}

/// Result of `Session::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing changed
    Rejected(RejectReason),
    /// Full match; the category's words left the pool
    Solved {
        category: CategoryId,
        transition: PoolTransition,
    },
    /// Recorded mistake with exactly three words sharing a category
    OneAway,
    /// Recorded mistake
    Miss,
}

impl SubmitOutcome {
    /// Whether the guess was recorded
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Mutable state of one game over a borrowed puzzle
#[derive(Debug, Clone)]
pub struct Session<'a> {
    puzzle: &'a PuzzleDefinition,
    guesses: Vec<Guess>,
    selection: Vec<Word>,
    pool: Pool,
}

impl<'a> Session<'a> {
    /// Start a session with a freshly shuffled pool
    #[must_use]
    pub fn new(puzzle: &'a PuzzleDefinition) -> Self {
        Self::with_rng(puzzle, &mut rand::rng())
    }

    /// Start a session shuffling with the given RNG
    pub fn with_rng<R: Rng + ?Sized>(puzzle: &'a PuzzleDefinition, rng: &mut R) -> Self {
        Self {
            puzzle,
            guesses: Vec::new(),
            selection: Vec::with_capacity(WORDS_PER_CATEGORY),
            pool: Pool::regenerate(puzzle, &[], rng),
        }
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &'a PuzzleDefinition {
        self.puzzle
    }

    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        self.pool.words()
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> &[Word] {
        &self.selection
    }

    /// Past guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn mistakes(&self) -> usize {
        evaluator::count_mistakes(self.puzzle, &self.guesses)
    }

    #[must_use]
    pub fn remaining_mistakes(&self) -> usize {
        MISTAKE_BUDGET.saturating_sub(self.mistakes())
    }

    /// Solved categories in the order they were solved
    #[must_use]
    pub fn solved_categories(&self) -> Vec<CategoryId> {
        evaluator::solved_categories(self.puzzle, &self.guesses)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.mistakes() >= MISTAKE_BUDGET {
            Status::Lost
        } else if self.pool.is_empty() {
            Status::Won
        } else {
            Status::InProgress
        }
    }

    #[must_use]
    pub fn is_selected(&self, word: &Word) -> bool {
        self.selection.contains(word)
    }

    /// Add a pool word to the selection
    ///
    /// Returns whether the selection changed. Ignored when the selection is
    /// full, the word is not in the pool or already selected, or the game is over.
    pub fn select(&mut self, word: &Word) -> bool {
        if self.status().is_terminal()
            || self.selection.len() >= WORDS_PER_CATEGORY
            || !self.pool.contains(word)
            || self.is_selected(word)
        {
            return false;
        }
        self.selection.push(word.clone());
        true
    }

    /// Remove a word from the selection; returns whether it was selected
    pub fn deselect(&mut self, word: &Word) -> bool {
        let before = self.selection.len();
        self.selection.retain(|w| w != word);
        self.selection.len() != before
    }

    /// Tile click: deselect if selected, otherwise select
    pub fn toggle(&mut self, word: &Word) -> bool {
        if self.is_selected(word) {
            self.deselect(word)
        } else {
            self.select(word)
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Reorder the pool; membership, guesses and selection are untouched
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.status().is_terminal() {
            return;
        }
        self.pool = Pool::regenerate(self.puzzle, &self.guesses, rng);
        log::debug!("pool reshuffled ({} words)", self.pool.len());
    }

    /// Why the current selection cannot be submitted, if it cannot
    #[must_use]
    pub fn submit_blocker(&self) -> Option<RejectReason> {
        if self.status().is_terminal() {
            return Some(RejectReason::GameOver);
        }
        let Some(candidate) = Guess::from_slice(&self.selection) else {
            return Some(RejectReason::IncompleteSelection);
        };
        if self.guesses.iter().any(|past| past.same_words(&candidate)) {
            return Some(RejectReason::AlreadyGuessed);
        }
        None
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submit_blocker().is_none()
    }

    /// Submit the current selection as a guess
    ///
    /// On a full match the words are aligned to the front of the pool, then
    /// removed; both snapshots are returned. Any accepted submit clears the
    /// selection.
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Some(reason) = self.submit_blocker() {
            log::debug!("submit rejected: {reason:?}");
            return SubmitOutcome::Rejected(reason);
        }
        let Some(guess) = Guess::from_slice(&self.selection) else {
            return SubmitOutcome::Rejected(RejectReason::IncompleteSelection);
        };
        self.selection.clear();

        match evaluator::evaluate(self.puzzle, &guess) {
            Verdict::Solved(category) => {
                self.pool.align_to(&guess);
                let pre_removal = self.pool.words().to_vec();
                self.pool.remove(&guess);
                self.guesses.push(guess);

                log::info!(
                    "solved category {category} '{}' ({} words left)",
                    self.puzzle.category(category).name(),
                    self.pool.len()
                );

                SubmitOutcome::Solved {
                    category,
                    transition: PoolTransition {
                        pre_removal,
                        post_removal: self.pool.words().to_vec(),
                    },
                }
            }
            Verdict::OneAway => {
                log::debug!("one away: {guess}");
                self.guesses.push(guess);
                SubmitOutcome::OneAway
            }
            Verdict::Miss => {
                log::debug!("miss: {guess}");
                self.guesses.push(guess);
                SubmitOutcome::Miss
            }
        }
    }
}
