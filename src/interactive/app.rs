//! TUI application state and logic
//!
//! The app is a thin collaborator around [`GameSession`]: it owns the
//! pending input buffer, forwards every keystroke through [`sanitize`], and
//! forwards the buffer to the session on Enter. All game rules live in the
//! session.

use crate::core::{GameSession, Outcome, sanitize};
use crate::output::{DEFEAT_MESSAGE, VICTORY_MESSAGE};
use crate::wordlist::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession<&'a WordList>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    wordlist: &'a WordList,
    fixed_target: Option<String>,
    max_guesses: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app with either a fixed target word or a random pick from
    /// the word list.
    pub fn new(wordlist: &'a WordList, target: Option<&str>, max_guesses: usize) -> Self {
        let fixed_target = target.map(str::to_owned);
        let chosen = fixed_target.clone().unwrap_or_else(|| {
            wordlist
                .random_target()
                .map_or_else(String::new, str::to_owned)
        });

        let mut app = Self {
            session: GameSession::with_max_guesses(&chosen, wordlist, max_guesses),
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            wordlist,
            fixed_target,
            max_guesses,
        };
        app.add_message("Type a five-letter word and press Enter.", MessageStyle::Info);
        app
    }

    /// Replace the full input buffer with its sanitized form after a
    /// keystroke. Re-sanitizing the whole text means rejected characters
    /// never show up, even transiently.
    pub fn push_key(&mut self, c: char) {
        self.input_buffer.push(c);
        self.input_buffer = sanitize(&self.input_buffer);
    }

    pub fn pop_key(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the pending input to the session.
    pub fn submit_current(&mut self) {
        let candidate = self.input_buffer.clone();
        let result = self.session.submit(&candidate);

        if let Some(reason) = result.rejection {
            self.add_message(&format!("{reason}!"), MessageStyle::Error);
            return;
        }
        if !result.accepted {
            // Locked; the key handler should not have let this through
            return;
        }

        self.input_buffer.clear();
        match result.outcome {
            Outcome::Won => {
                self.add_message(VICTORY_MESSAGE, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost => {
                self.add_message(DEFEAT_MESSAGE, MessageStyle::Error);
                self.add_message(
                    &format!("The word was {}.", self.session.target()),
                    MessageStyle::Info,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::InProgress => {}
        }
    }

    /// Start a fresh session. A fixed `--target` is reused; otherwise a new
    /// random target is drawn.
    pub fn new_game(&mut self) {
        let target = self.fixed_target.clone().unwrap_or_else(|| {
            self.wordlist
                .random_target()
                .map_or_else(String::new, str::to_owned)
        });

        self.session = GameSession::with_max_guesses(&target, self.wordlist, self.max_guesses);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ if app.session.is_locked() => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                KeyCode::Char(c) => app.push_key(c),
                KeyCode::Backspace => app.pop_key(),
                KeyCode::Enter => app.submit_current(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
