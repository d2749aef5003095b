//! Display functions for command results

use super::formatters::{color_square, guess_to_emoji, mistake_dots, tile_label};
use crate::commands::CheckResult;
use crate::core::{Category, Color, PuzzleDefinition, WORDS_PER_CATEGORY, Word};
use crate::game::{RejectReason, Session, Status, SubmitOutcome};
use colored::{ColoredString, Colorize};

const TILE_WIDTH: usize = 14;

fn on_category_color(text: &str, color: Color) -> ColoredString {
    match color {
        Color::Yellow => text.black().on_yellow(),
        Color::Green => text.black().on_green(),
        Color::Blue => text.white().on_blue(),
        Color::Purple => text.white().on_magenta(),
    }
}

/// Print the banner of a solved category
pub fn print_finished_category(category: &Category) {
    let words: Vec<String> = category
        .words()
        .iter()
        .map(|word| word.text().to_uppercase())
        .collect();
    let banner = format!(
        " {:^60} \n {:^60} ",
        category.name().to_uppercase(),
        words.join(", ")
    );
    for line in banner.lines() {
        println!("{}", on_category_color(line, category.color()).bold());
    }
}

/// Print tiles in rows of four, numbered, with selected tiles highlighted
pub fn print_tiles(words: &[Word], selection: &[Word]) {
    for (row, chunk) in words.chunks(WORDS_PER_CATEGORY).enumerate() {
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, word)| {
                let number = row * WORDS_PER_CATEGORY + col + 1;
                let label = format!("{number:>2} {:<TILE_WIDTH$}", tile_label(word, TILE_WIDTH));
                if selection.contains(word) {
                    label.white().on_bright_black().bold().to_string()
                } else {
                    label
                }
            })
            .collect();
        println!("  {}", cells.join("  "));
    }
}

/// Print the whole board: title, solved banners, pool and mistakes left
pub fn print_board(session: &Session) {
    let puzzle = session.puzzle();

    println!("\n{}", "─".repeat(70).cyan());
    println!("{}", puzzle.title().to_uppercase().bright_yellow().bold());
    if !puzzle.author().is_empty() {
        println!("by {}", puzzle.author().bright_white());
    }
    println!("{}", "─".repeat(70).cyan());

    for id in session.solved_categories() {
        print_finished_category(puzzle.category(id));
    }

    if !session.pool().is_empty() {
        println!();
        print_tiles(session.pool(), session.selection());
    }

    println!(
        "\nMistakes remaining: {}   Selected: {}/{}",
        mistake_dots(session.remaining_mistakes()).bright_red(),
        session.selection().len(),
        WORDS_PER_CATEGORY
    );
}

/// Print the player-facing reaction to a submit
pub fn print_submit_outcome(puzzle: &PuzzleDefinition, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Solved { category, .. } => {
            let category = puzzle.category(*category);
            println!(
                "{} {}",
                color_square(category.color()),
                format!("Solved: {}", category.name()).green().bold()
            );
        }
        SubmitOutcome::OneAway => println!("{}", "One away...".yellow().bold()),
        SubmitOutcome::Miss => println!("{}", "Not a group.".red()),
        SubmitOutcome::Rejected(RejectReason::IncompleteSelection) => {
            println!("Select exactly {WORDS_PER_CATEGORY} words before submitting.");
        }
        SubmitOutcome::Rejected(RejectReason::AlreadyGuessed) => println!("Already guessed!"),
        SubmitOutcome::Rejected(RejectReason::GameOver) => println!("The game is over."),
    }
}

/// Print the end-of-game message and the guess history
pub fn print_game_over(session: &Session) {
    let puzzle = session.puzzle();

    println!("\n{}", "═".repeat(70).bright_cyan());
    match session.status() {
        Status::Won => {
            println!(
                "{}",
                "    🎉 🎊 ✨  P U Z Z L E   S O L V E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            println!(
                "\n  {}",
                "Thanks for solving our little puzzle, and we hope you enjoyed it!".bright_white()
            );
        }
        Status::Lost => {
            println!("{}", "  You lost! Try again?".bright_red().bold());
            for category in puzzle.categories() {
                if !session.solved_categories().contains(&category.id()) {
                    print_finished_category(category);
                }
            }
        }
        Status::InProgress => {}
    }

    println!("\n  Guess history:");
    for (i, guess) in session.guesses().iter().enumerate() {
        println!(
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            guess_to_emoji(puzzle, guess)
        );
    }
    println!("{}", "═".repeat(70).bright_cyan());
}

/// Print the commands understood by the line mode
pub fn print_simple_help() {
    println!("\nCommands:");
    println!("  - a tile's word, or tile numbers like '1 5 9': select / deselect");
    println!("  - Enter or 'submit': submit the four selected words");
    println!("  - 's' / 'shuffle', 'c' / 'clear', 'r' / 'restart', 'q' / 'quit'\n");
}

/// Print the result of a puzzle check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE CHECK:".bright_cyan().bold(),
        result.title.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n✅ {}", "Valid puzzle".green().bold());
    println!("   Source:      {}", result.origin);
    if !result.author.is_empty() {
        println!("   Author:      {}", result.author);
    }
    println!("   Categories:  {}", result.category_count);
    println!("   Words:       {}", result.word_count);
    let palette: String = result.colors.iter().map(|&c| color_square(c)).collect();
    println!("   Colors:      {palette}");
}

/// Print the bundled puzzle names
pub fn print_bundled_list(names: &[&str], default: &str) {
    println!("{}", "Bundled puzzles:".bright_cyan().bold());
    for name in names {
        if *name == default {
            println!("  • {} {}", name.bright_white().bold(), "(default)".bright_black());
        } else {
            println!("  • {name}");
        }
    }
}
