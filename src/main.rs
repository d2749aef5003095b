//! Connections - CLI
//!
//! Find four groups of four words, in a TUI or a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use connections_puzzle::{
    commands::{PlayConfig, check_puzzle, run_simple},
    core::PuzzleDefinition,
    output::{print_bundled_list, print_check_result},
    puzzles::{DEFAULT_PUZZLE, PuzzleSource, SourceType, bundled_names},
};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "connections",
    about = "Group sixteen words into four categories of four",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle: a bundled name, a path to a .json/.b64 file, or a base64 blob
    #[arg(short, long, global = true, default_value = DEFAULT_PUZZLE)]
    puzzle: String,

    /// Milliseconds solved tiles stay on the board before they leave
    #[arg(long, global = true, default_value_t = 500)]
    reveal_delay_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without the TUI)
    Simple,

    /// Validate a puzzle and print a summary without spoilers
    Check,

    /// List bundled puzzles
    List,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let source = SourceType::from_arg(&cli.puzzle);
    let config = PlayConfig::new(Duration::from_millis(cli.reveal_delay_ms));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&load_puzzle(&source)?, config),
        Commands::Simple => {
            run_simple(&load_puzzle(&source)?, &config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check => {
            let result = check_puzzle(&source)
                .with_context(|| format!("Invalid puzzle: {}", source.describe()))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::List => {
            print_bundled_list(&bundled_names(), DEFAULT_PUZZLE);
            Ok(())
        }
    }
}

fn load_puzzle(source: &SourceType) -> Result<PuzzleDefinition> {
    source
        .load()
        .with_context(|| format!("Failed to load {}", source.describe()))
}

fn run_play_command(puzzle: &PuzzleDefinition, config: PlayConfig) -> Result<()> {
    use connections_puzzle::interactive::{App, run_tui};

    let app = App::new(puzzle, config);
    run_tui(app)
}
