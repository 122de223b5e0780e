//! Wordle Board - CLI
//!
//! Terminal Wordle with TUI and line-based modes.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use std::io;
use wordle_board::{
    commands::run_simple,
    core::{GameSession, MAX_GUESSES_COUNT},
    interactive::{App, run_tui},
    wordlist::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Terminal Wordle with a framework-free game core",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a newline-delimited word-list file (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Fix the target word instead of picking one at random
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Number of allowed guesses
    #[arg(short, long, global = true, default_value_t = MAX_GUESSES_COUNT)]
    max_guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based CLI mode (no TUI)
    Simple,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let wordlist = match &cli.wordlist {
        Some(path) => WordList::from_file(path)
            .with_context(|| format!("failed to load word list from '{path}'"))?,
        None => WordList::embedded(),
    };
    ensure!(!wordlist.is_empty(), "word list contains no playable words");

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(&wordlist, cli.target.as_deref(), cli.max_guesses);
            run_tui(app)
        }
        Commands::Simple => {
            let target = match &cli.target {
                Some(word) => word.clone(),
                None => wordlist
                    .random_target()
                    .context("word list contains no playable words")?
                    .to_owned(),
            };
            let mut session = GameSession::with_max_guesses(&target, &wordlist, cli.max_guesses);
            run_simple(&mut session, io::stdin().lock(), io::stdout())?;
            Ok(())
        }
    }
}
