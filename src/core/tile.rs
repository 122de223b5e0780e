//! Per-letter guess feedback for display
//!
//! Implements the standard Wordle coloring rules, including duplicate-letter
//! handling: exact matches consume a letter's budget before any
//! present-elsewhere marks are assigned. The session never consults tiles;
//! they exist purely so the presentation layer can color the board.

use rustc_hash::FxHashMap;

/// Color of one board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Letter does not appear in the target (or its budget is spent).
    Absent,
    /// Letter appears in the target at a different position.
    Present,
    /// Letter matches the target at this position.
    Correct,
}

/// Score an accepted guess against the target, one tile per guess letter.
///
/// Both strings are expected in canonical uppercase form. A target of a
/// different length than the guess still scores (misconfigured sessions play
/// out degraded rather than panicking); positions beyond the target's length
/// are simply never `Correct`.
///
/// # Examples
/// ```
/// use wordle_board::core::{Tile, score};
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(
///     score("CRANE", "SLATE"),
///     vec![Tile::Absent, Tile::Absent, Tile::Correct, Tile::Absent, Tile::Correct],
/// );
/// ```
#[must_use]
pub fn score(guess: &str, target: &str) -> Vec<Tile> {
    let guess_bytes = guess.as_bytes();
    let target_bytes = target.as_bytes();

    let mut tiles = vec![Tile::Absent; guess_bytes.len()];
    let mut available: FxHashMap<u8, usize> = FxHashMap::default();
    for &b in target_bytes {
        *available.entry(b).or_insert(0) += 1;
    }

    // First pass: exact position matches consume the letter budget
    for (i, &b) in guess_bytes.iter().enumerate() {
        if target_bytes.get(i) == Some(&b) {
            tiles[i] = Tile::Correct;
            if let Some(count) = available.get_mut(&b) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong-position marks from whatever budget remains
    for (i, &b) in guess_bytes.iter().enumerate() {
        if tiles[i] == Tile::Absent
            && let Some(count) = available.get_mut(&b)
            && *count > 0
        {
            tiles[i] = Tile::Present;
            *count -= 1;
        }
    }

    tiles
}
