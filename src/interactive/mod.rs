//! Interactive TUI interface
//!
//! Keyboard-driven board built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Direction, Message, MessageStyle, Reveal, run_tui};
