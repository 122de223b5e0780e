//! Terminal output formatting
//!
//! Tile rendering and end-of-game messages shared by the line mode and
//! tests. Pure string building; no I/O.

use crate::core::Tile;
use colored::Colorize;

/// Shown once when the player finds the target word.
pub const VICTORY_MESSAGE: &str = "🎉 You won!";

/// Shown once when the player runs out of guesses.
pub const DEFEAT_MESSAGE: &str = "💀 Out of guesses - better luck next time!";

/// Format a scored row as emoji squares.
#[must_use]
pub fn tiles_to_emoji(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Tile::Absent => '⬜',
            Tile::Present => '🟨',
            Tile::Correct => '🟩',
        })
        .collect()
}

/// Format a guess with its letters colored by tile state.
#[must_use]
pub fn colored_row(guess: &str, tiles: &[Tile]) -> String {
    guess
        .chars()
        .zip(tiles)
        .map(|(letter, tile)| {
            let cell = format!(" {letter} ");
            match tile {
                Tile::Correct => cell.black().on_green().bold().to_string(),
                Tile::Present => cell.black().on_yellow().bold().to_string(),
                Tile::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_row_all_correct() {
        let tiles = vec![Tile::Correct; 5];
        assert_eq!(tiles_to_emoji(&tiles), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_row_mixed() {
        let tiles = vec![Tile::Absent, Tile::Present, Tile::Correct];
        assert_eq!(tiles_to_emoji(&tiles), "⬜🟨🟩");
    }

    #[test]
    fn colored_row_includes_every_letter() {
        let tiles = vec![Tile::Correct, Tile::Present, Tile::Absent];
        let row = colored_row("ABC", &tiles);
        for letter in ["A", "B", "C"] {
            assert!(row.contains(letter));
        }
    }
}
