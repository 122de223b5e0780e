//! Wordle Board
//!
//! A terminal Wordle game built around a framework-free game core: input
//! sanitization, a single-session guess state machine, and win/loss
//! derivation, with the TUI and CLI as thin observers.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::core::{GameSession, Outcome, sanitize};
//! use wordle_board::wordlist::WordList;
//!
//! let mut session = GameSession::new("TESTS", WordList::embedded());
//!
//! let candidate = sanitize("t3e!sts");
//! let result = session.submit(&candidate);
//! assert_eq!(result.outcome, Outcome::Won);
//! ```

// Core game-state machine
pub mod core;

// Word-list dictionary
pub mod wordlist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
