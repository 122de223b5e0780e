//! End-to-end tests driving the public API the way the presentation layer
//! does: sanitize raw input, submit, observe the returned state.

use std::io::Cursor;
use wordle_board::commands::run_simple;
use wordle_board::core::{
    GameSession, MAX_GUESSES_COUNT, Outcome, Rejection, TargetWarning, sanitize,
};
use wordle_board::output::{DEFEAT_MESSAGE, VICTORY_MESSAGE};
use wordle_board::wordlist::WordList;

fn dictionary() -> WordList {
    WordList::embedded()
}

#[test]
fn victory_on_exact_guess() {
    let mut session = GameSession::new("TESTS", dictionary());
    let result = session.submit("TESTS");

    assert!(result.accepted);
    assert_eq!(result.outcome, Outcome::Won);
    assert_eq!(result.guesses, vec!["TESTS"]);
    assert!(result.locked);
}

#[test]
fn victory_is_case_insensitive() {
    let mut session = GameSession::new("TESTS", dictionary());
    let result = session.submit("tests");

    assert_eq!(result.outcome, Outcome::Won);
    assert_eq!(result.guesses, vec!["TESTS"]);
}

#[test]
fn six_wrong_guesses_end_in_defeat() {
    let mut session = GameSession::new("TESTS", dictionary());

    for _ in 0..MAX_GUESSES_COUNT - 1 {
        let result = session.submit("WRONG");
        assert_eq!(result.outcome, Outcome::InProgress);
        assert!(!result.locked);
    }
    let result = session.submit("WRONG");
    assert_eq!(result.outcome, Outcome::Lost);
    assert!(result.locked);
}

#[test]
fn short_guess_rejected() {
    let mut session = GameSession::new("TESTS", dictionary());
    let result = session.submit("FLY");

    assert!(!result.accepted);
    assert_eq!(result.rejection, Some(Rejection::InvalidLength));
    assert!(result.guesses.is_empty());
}

#[test]
fn non_dictionary_guess_rejected() {
    let mut session = GameSession::new("TESTS", dictionary());
    let result = session.submit("QWERT");

    assert!(!result.accepted);
    assert_eq!(result.rejection, Some(Rejection::UnknownWord));
    assert!(result.guesses.is_empty());
}

#[test]
fn locked_session_never_grows_its_history() {
    let mut session = GameSession::new("TESTS", dictionary());
    session.submit("TESTS");

    for _ in 0..3 {
        let result = session.submit("CRANE");
        assert!(!result.accepted);
        assert_eq!(result.guesses.len(), 1);
    }
}

#[test]
fn misconfigured_targets_warn_but_still_construct() {
    let short = GameSession::new("FLY", dictionary());
    assert!(
        short
            .warnings()
            .iter()
            .any(|w| matches!(w, TargetWarning::WrongLength(3)))
    );

    let lowercase = GameSession::new("tests", dictionary());
    assert!(lowercase.warnings().contains(&TargetWarning::NotUppercase));

    let unknown = GameSession::new("QWERT", dictionary());
    assert!(unknown.warnings().contains(&TargetWarning::NotInDictionary));

    let valid = GameSession::new("TESTS", dictionary());
    assert!(valid.warnings().is_empty());
}

#[test]
fn sanitize_then_submit_matches_keystroke_flow() {
    let mut session = GameSession::new("TESTS", dictionary());

    // What a player typing "t3e!sts..." ends up submitting
    let candidate = sanitize("t3e!sts...");
    assert_eq!(candidate, "TESTS");
    assert_eq!(session.submit(&candidate).outcome, Outcome::Won);
}

#[test]
fn scripted_line_mode_win() {
    let mut session = GameSession::new("CRANE", dictionary());
    let mut out = Vec::new();
    let script = "slate\ncrane\n";

    run_simple(&mut session, Cursor::new(script), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains(VICTORY_MESSAGE));
    assert!(out.contains("2/6"));
}

#[test]
fn scripted_line_mode_defeat() {
    let mut session = GameSession::new("CRANE", dictionary());
    let mut out = Vec::new();
    let script = "WRONG\n".repeat(MAX_GUESSES_COUNT);

    run_simple(&mut session, Cursor::new(script.as_str()), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains(DEFEAT_MESSAGE));
    assert!(out.contains("The word was CRANE."));
}

#[test]
fn scripted_line_mode_handles_garbage_input() {
    let mut session = GameSession::new("CRANE", dictionary());
    let mut out = Vec::new();
    let script = "12345\nqwert\ncr4ane\nexit\n";

    run_simple(&mut session, Cursor::new(script), &mut out).unwrap();

    assert_eq!(session.guesses().len(), 1); // "cr4ane" sanitizes to CRANE
    assert_eq!(session.outcome(), Outcome::Won);
}
