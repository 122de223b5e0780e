//! Raw input normalization
//!
//! The presentation layer runs every keystroke's full text through
//! [`sanitize`] and replaces the visible buffer with the result, so rejected
//! characters never appear on screen, even transiently.

use super::WORD_SIZE;

/// Normalize raw typed text into a guess candidate.
///
/// Strips everything that is not an ASCII letter, uppercases the remainder,
/// and truncates to [`WORD_SIZE`] characters. Total over all inputs and
/// idempotent.
///
/// # Examples
/// ```
/// use wordle_board::core::sanitize;
///
/// assert_eq!(sanitize("H3!RT"), "HRT");
/// assert_eq!(sanitize("crane"), "CRANE");
/// assert_eq!(sanitize("overlong"), "OVERL");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(WORD_SIZE)
        .collect()
}
