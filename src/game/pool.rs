//! Pool of unsolved words
//!
//! The pool is the visible grid: every word of every unsolved category, in
//! display order.

use super::{Guess, evaluator};
use crate::core::{PuzzleDefinition, Word};
use rand::Rng;
use rand::seq::SliceRandom;

/// Ordered words still on the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    words: Vec<Word>,
}

impl Pool {
    /// Recompute the pool from scratch in a fresh random order
    ///
    /// Contains the words of every category not yet solved by `guesses`.
    pub fn regenerate<R: Rng + ?Sized>(
        puzzle: &PuzzleDefinition,
        guesses: &[Guess],
        rng: &mut R,
    ) -> Self {
        let solved = evaluator::solved_categories(puzzle, guesses);

        let mut words: Vec<Word> = puzzle
            .categories()
            .iter()
            .filter(|category| !solved.contains(&category.id()))
            .flat_map(|category| category.words().iter().cloned())
            .collect();
        words.shuffle(rng);

        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Move the guessed words to the front of the pool in alphabetical order
    ///
    /// Slot `a` receives the `a`-th word of the sorted guess by swapping with
    /// wherever that word currently sits.
    pub fn align_to(&mut self, guess: &Guess) {
        for (slot, word) in guess.sorted().iter().enumerate() {
            let current = self.position(word);
            debug_assert!(current.is_some(), "guessed word '{word}' is not in the pool");
            if let Some(current) = current {
                self.words.swap(slot, current);
            }
        }
    }

    /// Drop the guessed words, keeping the order of the rest
    pub fn remove(&mut self, guess: &Guess) {
        self.words.retain(|word| !guess.contains(word));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::{guess, sample_puzzle};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn membership(pool: &Pool) -> FxHashSet<Word> {
        pool.words().iter().cloned().collect()
    }

    #[test]
    fn fresh_pool_has_all_words() {
        let puzzle = sample_puzzle();
        let pool = Pool::regenerate(&puzzle, &[], &mut StdRng::seed_from_u64(7));
        assert_eq!(pool.len(), 16);
        assert_eq!(
            membership(&pool),
            puzzle.all_words().cloned().collect::<FxHashSet<Word>>()
        );
    }

    #[test]
    fn solved_categories_are_excluded() {
        let puzzle = sample_puzzle();
        let guesses = vec![
            guess(&["earth", "mars", "venus", "mercury"]),
            guess(&["bass", "cod", "perch", "earth"]),
        ];
        let pool = Pool::regenerate(&puzzle, &guesses, &mut StdRng::seed_from_u64(7));
        assert_eq!(pool.len(), 12);
        assert!(!pool.contains(&Word::new("mars").unwrap()));
        assert!(pool.contains(&Word::new("bass").unwrap()));
    }

    #[test]
    fn reshuffle_keeps_membership() {
        let puzzle = sample_puzzle();
        let a = Pool::regenerate(&puzzle, &[], &mut StdRng::seed_from_u64(1));
        let b = Pool::regenerate(&puzzle, &[], &mut StdRng::seed_from_u64(2));
        assert_eq!(membership(&a), membership(&b));
    }

    #[test]
    fn reshuffle_order_can_differ() {
        let puzzle = sample_puzzle();
        let mut rng = StdRng::seed_from_u64(3);
        let first = Pool::regenerate(&puzzle, &[], &mut rng);
        let differs = (0..20).any(|_| Pool::regenerate(&puzzle, &[], &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn align_moves_sorted_guess_to_front() {
        let puzzle = sample_puzzle();
        let mut pool = Pool::regenerate(&puzzle, &[], &mut StdRng::seed_from_u64(11));
        let before = membership(&pool);
        let g = guess(&["sole", "perch", "bass", "cod"]);

        pool.align_to(&g);

        let front: Vec<&str> = pool.words()[..4].iter().map(Word::text).collect();
        assert_eq!(front, ["bass", "cod", "perch", "sole"]);
        assert_eq!(membership(&pool), before);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let puzzle = sample_puzzle();
        let mut pool = Pool::regenerate(&puzzle, &[], &mut StdRng::seed_from_u64(5));
        let g = guess(&["king", "rook", "bishop", "knight"]);
        let expected: Vec<Word> = pool
            .words()
            .iter()
            .filter(|w| !g.contains(w))
            .cloned()
            .collect();

        pool.remove(&g);

        assert_eq!(pool.words(), expected.as_slice());
    }
}
