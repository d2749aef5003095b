//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use super::PlayConfig;
use crate::core::{PuzzleDefinition, Word};
use crate::game::{Session, Status, SubmitOutcome};
use crate::output::display::{
    print_board, print_game_over, print_simple_help, print_submit_outcome, print_tiles,
};
use std::io::{self, BufRead, Write};
use std::thread;

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Select or deselect these tiles
    Toggle(Vec<Word>),
    Submit,
    Shuffle,
    Clear,
    Restart,
    Help,
    Quit,
    Unknown(String),
}

/// Interpret one line of input against the current pool
///
/// A line naming a pool word toggles that word. Otherwise a few command words
/// are recognized, and finally a list of 1-based tile numbers.
#[must_use]
pub fn parse_command(input: &str, pool: &[Word]) -> Command {
    if let Ok(word) = Word::new(input)
        && pool.contains(&word)
    {
        return Command::Toggle(vec![word]);
    }

    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" | "submit" | "go" => return Command::Submit,
        "shuffle" | "s" => return Command::Shuffle,
        "clear" | "deselect" | "c" => return Command::Clear,
        "restart" | "new" | "r" => return Command::Restart,
        "help" | "h" | "?" => return Command::Help,
        "quit" | "q" | "exit" => return Command::Quit,
        _ => {}
    }

    let tiles: Option<Vec<Word>> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let number: usize = token.parse().ok()?;
            pool.get(number.checked_sub(1)?).cloned()
        })
        .collect();

    match tiles {
        Some(words) if !words.is_empty() => Command::Toggle(words),
        _ => Command::Unknown(input),
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(puzzle: &PuzzleDefinition, config: &PlayConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Connections - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find four groups of four words that share something in common.");
    print_simple_help();

    let stdin = io::stdin();
    play_lines(puzzle, config, &mut stdin.lock())?;
    Ok(())
}

/// Play from any line source until the player quits or input runs out
///
/// Returns the status of the last session.
///
/// # Errors
///
/// Returns an error if reading from `reader` or flushing stdout fails.
pub fn play_lines<R: BufRead>(
    puzzle: &PuzzleDefinition,
    config: &PlayConfig,
    reader: &mut R,
) -> Result<Status, String> {
    let mut session = Session::new(puzzle);

    loop {
        print_board(&session);

        if session.status().is_terminal() {
            print_game_over(&session);

            match read_line(reader, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    session = Session::new(puzzle);
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(session.status());
                }
            }
        }

        let Some(line) = read_line(reader, "Tiles, word, or command")? else {
            return Ok(session.status());
        };

        match parse_command(&line, session.pool()) {
            Command::Toggle(words) => {
                for word in &words {
                    if !session.toggle(word) {
                        println!("Selection is full. Submit or deselect first.");
                    }
                }
            }
            Command::Submit => {
                let outcome = session.submit();
                print_submit_outcome(puzzle, &outcome);
                if let SubmitOutcome::Solved { transition, .. } = &outcome
                    && !config.reveal_delay.is_zero()
                {
                    print_tiles(&transition.pre_removal, &[]);
                    thread::sleep(config.reveal_delay);
                }
            }
            Command::Shuffle => session.shuffle(),
            Command::Clear => session.clear_selection(),
            Command::Restart => {
                session = Session::new(puzzle);
                println!("\n🔄 New game started!\n");
            }
            Command::Help => print_simple_help(),
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(session.status());
            }
            Command::Unknown(input) => {
                println!("❌ Unknown input '{input}'. Type 'help' for commands.");
            }
        }
    }
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::sample_puzzle;
    use std::io::Cursor;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn script(lines: &[&str]) -> Cursor<String> {
        Cursor::new(lines.iter().map(|line| format!("{line}\n")).collect())
    }

    #[test]
    fn parse_word_toggle() {
        let pool = words(&["new york", "orca", "sun"]);
        assert_eq!(
            parse_command("New York", &pool),
            Command::Toggle(words(&["new york"]))
        );
    }

    #[test]
    fn parse_word_beats_command() {
        let pool = words(&["s", "orca"]);
        assert_eq!(parse_command("s", &pool), Command::Toggle(words(&["s"])));
    }

    #[test]
    fn parse_commands() {
        let pool = words(&["orca"]);
        assert_eq!(parse_command("", &pool), Command::Submit);
        assert_eq!(parse_command("SUBMIT", &pool), Command::Submit);
        assert_eq!(parse_command("s", &pool), Command::Shuffle);
        assert_eq!(parse_command("clear", &pool), Command::Clear);
        assert_eq!(parse_command("r", &pool), Command::Restart);
        assert_eq!(parse_command("?", &pool), Command::Help);
        assert_eq!(parse_command("q", &pool), Command::Quit);
    }

    #[test]
    fn parse_tile_numbers() {
        let pool = words(&["a1", "b2", "c3", "d4", "e5"]);
        assert_eq!(
            parse_command("1 3, 5", &pool),
            Command::Toggle(words(&["a1", "c3", "e5"]))
        );
    }

    #[test]
    fn parse_out_of_range_number() {
        let pool = words(&["a1", "b2"]);
        assert_eq!(
            parse_command("1 3", &pool),
            Command::Unknown("1 3".to_string())
        );
        assert_eq!(
            parse_command("0", &pool),
            Command::Unknown("0".to_string())
        );
    }

    #[test]
    fn parse_unknown() {
        let pool = words(&["orca"]);
        assert_eq!(
            parse_command("surfboard", &pool),
            Command::Unknown("surfboard".to_string())
        );
    }

    #[test]
    fn scripted_win() {
        let puzzle = sample_puzzle();
        let mut lines = Vec::new();
        for category in puzzle.categories() {
            lines.extend(category.words().iter().map(Word::text));
            lines.push("submit");
        }
        lines.push("no");

        let status = play_lines(&puzzle, &PlayConfig::headless(), &mut script(&lines)).unwrap();
        assert_eq!(status, Status::Won);
    }

    #[test]
    fn scripted_loss() {
        let puzzle = sample_puzzle();
        let lines = [
            "bass", "cod", "earth", "mars", "submit", //
            "bass", "perch", "earth", "venus", "submit", //
            "cod", "sole", "king", "rook", "submit", //
            "bass", "earth", "king", "foot", "submit", //
            "no",
        ];

        let status = play_lines(&puzzle, &PlayConfig::headless(), &mut script(&lines)).unwrap();
        assert_eq!(status, Status::Lost);
    }

    #[test]
    fn end_of_input_stops_play() {
        let puzzle = sample_puzzle();
        let status =
            play_lines(&puzzle, &PlayConfig::headless(), &mut script(&["bass", "cod"])).unwrap();
        assert_eq!(status, Status::InProgress);
    }

    #[test]
    fn quit_stops_play() {
        let puzzle = sample_puzzle();
        let status = play_lines(
            &puzzle,
            &PlayConfig::headless(),
            &mut script(&["shuffle", "clear", "help", "q"]),
        )
        .unwrap();
        assert_eq!(status, Status::InProgress);
    }
}
