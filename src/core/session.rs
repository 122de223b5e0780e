//! Game session state machine
//!
//! A [`GameSession`] owns the target word and the append-only guess sequence
//! for one game. The outcome is never stored: it is recomputed from the
//! guesses and target on every read, so it cannot diverge from the history.
//!
//! States are `InProgress`, `Won`, and `Lost`. The only transition trigger is
//! [`GameSession::submit`]; `Won` and `Lost` are terminal and freeze the
//! guess sequence.

use super::WORD_SIZE;
use std::fmt;

/// Word-validity predicate consumed by the session.
///
/// The session does not own or load word lists; it only asks whether a
/// canonical (uppercase) candidate is a real word. [`crate::wordlist::WordList`]
/// is the production implementation.
pub trait Dictionary {
    /// Whether `candidate` is an accepted word. Candidates are already
    /// uppercase when the session calls this.
    fn contains(&self, candidate: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, candidate: &str) -> bool {
        (**self).contains(candidate)
    }
}

/// Derived game result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Why a submission was rejected.
///
/// Rejections are expected gameplay, not errors: the session stays untouched
/// and the player may edit and resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Candidate is not exactly [`WORD_SIZE`] characters.
    InvalidLength,
    /// Candidate is well-formed but fails the dictionary predicate.
    UnknownWord,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "Not enough letters"),
            Self::UnknownWord => write!(f, "Not in word list"),
        }
    }
}

/// Result of one [`GameSession::submit`] call, carrying everything the
/// presentation layer needs to rerender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Whether the candidate was appended to the guess sequence.
    pub accepted: bool,
    /// Reason for a rejected candidate. `None` when accepted, and also
    /// `None` for submissions ignored because the session was already
    /// locked.
    pub rejection: Option<Rejection>,
    /// Outcome after this submission.
    pub outcome: Outcome,
    /// The guess sequence after this submission, in display order.
    pub guesses: Vec<String>,
    /// True once the outcome is terminal; the caller should disable input.
    pub locked: bool,
}

/// A rule the configured target word violated at construction.
///
/// Target misconfiguration is non-fatal: the session still runs, degraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetWarning {
    /// Target is not exactly [`WORD_SIZE`] characters.
    WrongLength(usize),
    /// Target was not supplied in uppercase.
    NotUppercase,
    /// Target is not in the dictionary.
    NotInDictionary,
}

impl fmt::Display for TargetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "target word must have {WORD_SIZE} letters, got {len}")
            }
            Self::NotUppercase => write!(f, "target word must be all in uppercase"),
            Self::NotInDictionary => write!(f, "target word is not a valid word"),
        }
    }
}

impl std::error::Error for TargetWarning {}

/// One Wordle game: a hidden target, up to `max_guesses` submissions, and a
/// derived outcome.
pub struct GameSession<D> {
    target: String,
    guesses: Vec<String>,
    max_guesses: usize,
    warnings: Vec<TargetWarning>,
    dictionary: D,
}

impl<D: Dictionary> GameSession<D> {
    /// Start a session with the default guess limit of
    /// [`MAX_GUESSES_COUNT`](super::MAX_GUESSES_COUNT).
    ///
    /// A target that violates its invariants (length, case, dictionary
    /// membership) does not fail construction; each violated rule is logged
    /// once and recorded in [`warnings`](Self::warnings). The target is
    /// canonicalized to uppercase either way.
    pub fn new(target: &str, dictionary: D) -> Self {
        Self::with_max_guesses(target, dictionary, super::MAX_GUESSES_COUNT)
    }

    /// Start a session with a custom guess limit.
    pub fn with_max_guesses(target: &str, dictionary: D, max_guesses: usize) -> Self {
        let canonical = target.to_uppercase();

        let mut warnings = Vec::new();
        if target.len() != WORD_SIZE {
            warnings.push(TargetWarning::WrongLength(target.len()));
        }
        if target != canonical {
            warnings.push(TargetWarning::NotUppercase);
        }
        if !dictionary.contains(&canonical) {
            warnings.push(TargetWarning::NotInDictionary);
        }
        for warning in &warnings {
            log::warn!("misconfigured target word: {warning}");
        }

        Self {
            target: canonical,
            guesses: Vec::new(),
            max_guesses,
            warnings,
            dictionary,
        }
    }

    /// Submit a guess candidate and advance the session by one turn.
    ///
    /// The candidate is uppercased, then validated in order: session not
    /// locked, length equals [`WORD_SIZE`], dictionary membership. A
    /// candidate failing any check is a state-preserving no-op. An accepted
    /// candidate is appended and the outcome rederived, checking the win
    /// condition strictly before guess exhaustion so a correct final guess
    /// wins.
    ///
    /// Calls made while the session is locked are ignored: the presentation
    /// layer's contract is to disable submission once locked, so this path
    /// returns `accepted: false` with no rejection reason rather than
    /// surfacing anything to the player.
    pub fn submit(&mut self, candidate: &str) -> Submission {
        if self.is_locked() {
            log::debug!("ignoring submission while locked: {candidate}");
            return self.submission(false, None);
        }

        let candidate = candidate.to_uppercase();
        if candidate.len() != WORD_SIZE {
            return self.submission(false, Some(Rejection::InvalidLength));
        }
        if !self.dictionary.contains(&candidate) {
            return self.submission(false, Some(Rejection::UnknownWord));
        }

        self.guesses.push(candidate);
        self.submission(true, None)
    }

    fn submission(&self, accepted: bool, rejection: Option<Rejection>) -> Submission {
        Submission {
            accepted,
            rejection,
            outcome: self.outcome(),
            guesses: self.guesses.clone(),
            locked: self.is_locked(),
        }
    }

    /// Current outcome, recomputed from the guess sequence and target.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.guesses.iter().any(|g| *g == self.target) {
            Outcome::Won
        } else if self.guesses.len() >= self.max_guesses {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Whether the session has reached a terminal state.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// Accepted guesses in submission order.
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// The canonical (uppercase) target word.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Guess limit for this session.
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Target misconfiguration warnings emitted at construction.
    #[must_use]
    pub fn warnings(&self) -> &[TargetWarning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES_COUNT;

    struct TestDict(&'static [&'static str]);

    impl Dictionary for TestDict {
        fn contains(&self, candidate: &str) -> bool {
            self.0.contains(&candidate)
        }
    }

    fn session() -> GameSession<TestDict> {
        GameSession::new("TESTS", TestDict(&["TESTS", "WRONG", "CRANE", "SLATE"]))
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = session();
        let result = game.submit("TESTS");

        assert!(result.accepted);
        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(result.guesses, vec!["TESTS"]);
        assert!(result.locked);
    }

    #[test]
    fn win_is_case_insensitive() {
        let mut game = session();
        let result = game.submit("tests");

        assert!(result.accepted);
        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(result.guesses, vec!["TESTS"]);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut game = session();
        for turn in 1..=MAX_GUESSES_COUNT {
            let result = game.submit("WRONG");
            assert!(result.accepted);
            if turn < MAX_GUESSES_COUNT {
                assert_eq!(result.outcome, Outcome::InProgress);
                assert!(!result.locked);
            } else {
                assert_eq!(result.outcome, Outcome::Lost);
                assert!(result.locked);
            }
        }
        assert_eq!(game.guesses().len(), MAX_GUESSES_COUNT);
    }

    #[test]
    fn win_on_final_guess_beats_exhaustion() {
        let mut game = session();
        for _ in 0..MAX_GUESSES_COUNT - 1 {
            game.submit("WRONG");
        }
        let result = game.submit("TESTS");

        assert_eq!(result.outcome, Outcome::Won);
        assert!(result.locked);
    }

    #[test]
    fn short_candidate_rejected_without_mutation() {
        let mut game = session();
        let result = game.submit("FLY");

        assert!(!result.accepted);
        assert_eq!(result.rejection, Some(Rejection::InvalidLength));
        assert_eq!(result.outcome, Outcome::InProgress);
        assert!(result.guesses.is_empty());
        assert!(!result.locked);
    }

    #[test]
    fn long_candidate_rejected() {
        let mut game = session();
        let result = game.submit("CRANES");

        assert_eq!(result.rejection, Some(Rejection::InvalidLength));
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn unknown_word_rejected_without_mutation() {
        let mut game = session();
        let result = game.submit("QWERT");

        assert!(!result.accepted);
        assert_eq!(result.rejection, Some(Rejection::UnknownWord));
        assert!(result.guesses.is_empty());
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn locked_after_win_ignores_submissions() {
        let mut game = session();
        game.submit("TESTS");

        let result = game.submit("WRONG");
        assert!(!result.accepted);
        assert_eq!(result.rejection, None);
        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn locked_after_loss_ignores_submissions() {
        let mut game = session();
        for _ in 0..MAX_GUESSES_COUNT {
            game.submit("WRONG");
        }

        let result = game.submit("CRANE");
        assert!(!result.accepted);
        assert_eq!(result.outcome, Outcome::Lost);
        assert_eq!(game.guesses().len(), MAX_GUESSES_COUNT);
    }

    #[test]
    fn outcome_is_derived_not_stored() {
        let mut game = session();
        assert_eq!(game.outcome(), Outcome::InProgress);
        game.submit("WRONG");
        assert_eq!(game.outcome(), Outcome::InProgress);
        game.submit("TESTS");
        assert_eq!(game.outcome(), Outcome::Won);
        // Repeated reads stay stable
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn valid_target_emits_no_warnings() {
        let game = session();
        assert!(game.warnings().is_empty());
    }

    #[test]
    fn short_target_warns_but_session_runs() {
        let mut game = GameSession::new("FLY", TestDict(&["TESTS", "WRONG"]));
        assert!(
            game.warnings()
                .contains(&TargetWarning::WrongLength("FLY".len()))
        );

        // Degraded but playable: every guess is accepted, none can win
        for _ in 0..MAX_GUESSES_COUNT {
            assert!(game.submit("WRONG").accepted);
        }
        assert_eq!(game.outcome(), Outcome::Lost);
    }

    #[test]
    fn lowercase_target_warns_but_is_winnable() {
        let mut game = GameSession::new("tests", TestDict(&["TESTS"]));
        assert!(game.warnings().contains(&TargetWarning::NotUppercase));

        let result = game.submit("TESTS");
        assert_eq!(result.outcome, Outcome::Won);
    }

    #[test]
    fn non_dictionary_target_warns() {
        let game = GameSession::new("QWERT", TestDict(&["TESTS"]));
        assert_eq!(game.warnings(), &[TargetWarning::NotInDictionary]);
    }

    #[test]
    fn custom_guess_limit() {
        let mut game = GameSession::with_max_guesses("TESTS", TestDict(&["TESTS", "WRONG"]), 2);
        game.submit("WRONG");
        let result = game.submit("WRONG");
        assert_eq!(result.outcome, Outcome::Lost);
    }
}
