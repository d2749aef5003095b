//! Connections Puzzle
//!
//! A word-grouping puzzle engine: sixteen words hide four categories of four,
//! and the player has four mistakes to find them all.
//!
//! # Quick Start
//!
//! ```rust
//! use connections_puzzle::core::Word;
//! use connections_puzzle::game::{Session, Status, SubmitOutcome};
//! use connections_puzzle::puzzles::{PuzzleSource, SourceType};
//!
//! let puzzle = SourceType::from_arg("starter").load().unwrap();
//! let mut session = Session::new(&puzzle);
//!
//! for text in ["bass", "cod", "perch", "sole"] {
//!     session.select(&Word::new(text).unwrap());
//! }
//! assert!(matches!(session.submit(), SubmitOutcome::Solved { .. }));
//! assert_eq!(session.pool().len(), 12);
//! assert_eq!(session.status(), Status::InProgress);
//! ```

// Core domain types
pub mod core;

// Guess evaluation and session state
pub mod game;

// Bundled and loaded puzzle definitions
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
