//! TUI application state and logic

use crate::commands::PlayConfig;
use crate::core::{CategoryId, PuzzleDefinition, WORDS_PER_CATEGORY, Word};
use crate::game::{RejectReason, Session, Status, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::thread;

/// Solved tiles shown at the front of the board before they leave
#[derive(Debug, Clone)]
pub struct Reveal {
    pub category: CategoryId,
    pub words: Vec<Word>,
}

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub config: PlayConfig,
    pub cursor: usize,
    pub reveal: Option<Reveal>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Cursor movement on the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(puzzle: &'a PuzzleDefinition, config: PlayConfig) -> Self {
        Self {
            session: Session::new(puzzle),
            config,
            cursor: 0,
            reveal: None,
            messages: vec![Message {
                text: "Create four groups of four!".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Tiles currently on screen: the reveal snapshot while one is pending
    #[must_use]
    pub fn displayed_pool(&self) -> &[Word] {
        self.reveal
            .as_ref()
            .map_or_else(|| self.session.pool(), |reveal| reveal.words.as_slice())
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let len = self.session.pool().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }

        self.cursor = match direction {
            Direction::Left => self.cursor.saturating_sub(1),
            Direction::Right => (self.cursor + 1).min(len - 1),
            Direction::Up => self.cursor.saturating_sub(WORDS_PER_CATEGORY),
            Direction::Down => {
                let below = self.cursor + WORDS_PER_CATEGORY;
                if below < len { below } else { self.cursor }
            }
        };
    }

    /// Select or deselect the tile under the cursor
    pub fn toggle_at_cursor(&mut self) {
        let Some(word) = self.session.pool().get(self.cursor).cloned() else {
            return;
        };
        if !self.session.toggle(&word) && !self.session.is_selected(&word) {
            self.add_message("Only four words can be selected.", MessageStyle::Error);
        }
    }

    pub fn shuffle(&mut self) {
        self.session.shuffle();
    }

    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            SubmitOutcome::Solved {
                category,
                transition,
            } => {
                let name = self.session.puzzle().category(category).name().to_string();
                self.add_message(&format!("Solved: {name}"), MessageStyle::Success);
                self.reveal = Some(Reveal {
                    category,
                    words: transition.pre_removal,
                });
            }
            SubmitOutcome::OneAway => self.add_message("One away...", MessageStyle::Info),
            SubmitOutcome::Miss => {}
            SubmitOutcome::Rejected(RejectReason::AlreadyGuessed) => {
                self.add_message("Already guessed!", MessageStyle::Error);
            }
            SubmitOutcome::Rejected(_) => {}
        }

        match self.session.status() {
            Status::Won if self.reveal.is_none() => self.announce_win(),
            Status::Lost => {
                self.add_message("You lost! Press 'r' to try again.", MessageStyle::Error);
            }
            _ => {}
        }
    }

    /// Drop the reveal snapshot so the live pool is shown again
    pub fn finish_reveal(&mut self) {
        if self.reveal.take().is_some() {
            self.cursor = self.cursor.min(self.session.pool().len().saturating_sub(1));
            if self.session.status() == Status::Won {
                self.announce_win();
            }
        }
    }

    fn announce_win(&mut self) {
        self.add_message(
            "Thanks for solving our little puzzle, and we hope you enjoyed it!",
            MessageStyle::Success,
        );
    }

    pub fn restart(&mut self) {
        self.session = Session::new(self.session.puzzle());
        self.cursor = 0;
        self.reveal = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Input stays buffered by the terminal until the solved tiles have left
        if app.reveal.is_some() {
            thread::sleep(app.config.reveal_delay);
            app.finish_reveal();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('r') => app.restart(),
                _ if app.session.status().is_terminal() => {}
                KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
                KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
                KeyCode::Char(' ') => app.toggle_at_cursor(),
                KeyCode::Enter => app.submit(),
                KeyCode::Char('s') => app.shuffle(),
                KeyCode::Char('d') => app.clear_selection(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
