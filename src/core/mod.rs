//! Core game-state types
//!
//! This module contains the guess-evaluation state machine with zero UI
//! dependencies. Everything here is pure, synchronous, and testable without
//! a terminal.

mod sanitize;
mod session;
mod tile;

pub use sanitize::sanitize;
pub use session::{Dictionary, GameSession, Outcome, Rejection, Submission, TargetWarning};
pub use tile::{Tile, score};

/// Length of every target word and accepted guess.
pub const WORD_SIZE: usize = 5;

/// Number of guesses a player gets before the session is lost.
pub const MAX_GUESSES_COUNT: usize = 6;
