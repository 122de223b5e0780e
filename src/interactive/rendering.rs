//! TUI rendering with ratatui
//!
//! Draws the guess board, message log, and key hints. Pure observation of
//! app state; nothing here mutates the session.

use super::app::{App, MessageStyle};
use crate::core::{Tile, WORD_SIZE, score};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let guesses = app.session.guesses();
    let target = app.session.target();
    let mut lines: Vec<Line> = Vec::new();

    for row in 0..app.session.max_guesses() {
        lines.push(Line::default());
        if let Some(guess) = guesses.get(row) {
            lines.push(scored_row(guess, target));
        } else if row == guesses.len() && !app.session.is_locked() {
            lines.push(pending_row(&app.input_buffer, WORD_SIZE));
        } else {
            lines.push(empty_row(WORD_SIZE));
        }
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn scored_row<'a>(guess: &'a str, target: &str) -> Line<'a> {
    let tiles = score(guess, target);
    let mut spans = Vec::new();

    for (letter, tile) in guess.chars().zip(tiles) {
        let style = match tile {
            Tile::Correct => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Tile::Present => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Tile::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn pending_row(buffer: &str, width: usize) -> Line<'static> {
    let mut spans = Vec::new();

    for i in 0..width {
        let span = buffer.chars().nth(i).map_or_else(
            || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            |letter| {
                Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            },
        );
        spans.push(span);
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn empty_row(width: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for _ in 0..width {
        spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(msg.text.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let hints = if app.session.is_locked() {
        "n: new game │ q: quit │ Esc: quit"
    } else {
        "Type letters │ Enter: submit │ Backspace: delete │ Esc: quit"
    };

    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
