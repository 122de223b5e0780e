//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Generic over reader and writer so
//! scripted sessions can drive it in tests.

use crate::core::{Dictionary, GameSession, Outcome, WORD_SIZE, sanitize, score};
use crate::output::{DEFEAT_MESSAGE, VICTORY_MESSAGE, colored_row, tiles_to_emoji};
use std::io::{self, BufRead, Write};

/// Run the line-based game until it is won, lost, or quit.
///
/// Each input line is sanitized the same way the TUI sanitizes keystrokes,
/// then submitted. `exit` or end of input quits early.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_simple<D, R, W>(
    session: &mut GameSession<D>,
    mut reader: R,
    mut writer: W,
) -> io::Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(writer, "Guess the {WORD_SIZE}-letter word.")?;

    while !session.is_locked() {
        writeln!(
            writer,
            "\nGuess {}/{} (or 'exit' to quit):",
            session.guesses().len() + 1,
            session.max_guesses()
        )?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer, "Exiting.")?;
            return Ok(());
        }
        if line.trim().eq_ignore_ascii_case("exit") {
            writeln!(writer, "Exiting.")?;
            return Ok(());
        }

        let candidate = sanitize(&line);
        let result = session.submit(&candidate);

        if let Some(reason) = result.rejection {
            writeln!(writer, "{reason}.")?;
            continue;
        }

        let guess = result
            .guesses
            .last()
            .map_or_else(String::new, Clone::clone);
        let tiles = score(&guess, session.target());
        writeln!(writer, "{}  {}", colored_row(&guess, &tiles), tiles_to_emoji(&tiles))?;

        match result.outcome {
            Outcome::Won => {
                writeln!(writer, "\n{VICTORY_MESSAGE}")?;
                writeln!(
                    writer,
                    "Solved in {}/{} guesses.",
                    result.guesses.len(),
                    session.max_guesses()
                )?;
            }
            Outcome::Lost => {
                writeln!(writer, "\n{DEFEAT_MESSAGE}")?;
                writeln!(writer, "The word was {}.", session.target())?;
            }
            Outcome::InProgress => {}
        }
    }

    Ok(())
}
