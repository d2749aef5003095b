//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_puzzle};
pub use simple::run_simple;

use std::time::Duration;

/// Presentation settings shared by the TUI and the line mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    /// How long solved tiles stay at the front of the board before leaving
    pub reveal_delay: Duration,
}

impl PlayConfig {
    /// Default pause between aligning solved tiles and removing them
    pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

    #[must_use]
    pub const fn new(reveal_delay: Duration) -> Self {
        Self { reveal_delay }
    }

    /// No pause at all, for scripted play
    #[must_use]
    pub const fn headless() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REVEAL_DELAY)
    }
}
