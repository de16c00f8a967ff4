//! Selectable list widget using ratatui
//!
//! Draws the menu in an inline viewport below whatever was printed before
//! (headers, previous results) and blocks until the user confirms a row.

use std::io::{self, stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{self, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{List, ListItem, ListState},
    TerminalOptions, Viewport,
};

use crate::menu::{Key, MenuError, Outcome, SelectState};

/// Show `labels` and return the confirmed index.
///
/// Disabled rows are dimmed and skipped by the cursor.
pub fn run_select(labels: &[String], disabled: &[usize]) -> Result<usize> {
    let mut state = SelectState::new(labels.len(), disabled)?;

    let (_, rows) = terminal::size()?;
    let height = (labels.len() as u16).min(rows.saturating_sub(1)).max(1);

    enable_raw_mode()?;
    let mut terminal = match Terminal::with_options(
        CrosstermBackend::new(stdout()),
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    ) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
    };

    let result = run_select_loop(&mut terminal, labels, &mut state);

    // Leave the final highlighted row visible, then park the cursor below it
    let mut bottom = 0;
    let _ = terminal.draw(|frame| {
        draw_list(frame, labels, &state);
        bottom = frame.area().bottom();
    });
    disable_raw_mode()?;
    terminal.set_cursor_position(Position::new(0, bottom.saturating_sub(1)))?;
    terminal.show_cursor()?;
    println!();

    result
}

fn run_select_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    labels: &[String],
    state: &mut SelectState,
) -> Result<usize> {
    loop {
        terminal.draw(|frame| draw_list(frame, labels, state))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not release
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(key) = translate_key(key) else {
                continue;
            };
            match state.handle(key) {
                Outcome::Chosen(index) => return Ok(index),
                Outcome::Cancelled => return Err(MenuError::Interrupted.into()),
                Outcome::Pending => {}
            }
        }
    }
}

/// Map a terminal key event onto a widget gesture
pub fn translate_key(key: KeyEvent) -> Option<Key> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Key::Cancel);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Key::Down),
        KeyCode::Home | KeyCode::PageUp => Some(Key::Home),
        KeyCode::End | KeyCode::PageDown => Some(Key::End),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Cancel),
        _ => None,
    }
}

fn draw_list(frame: &mut Frame, labels: &[String], state: &SelectState) {
    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let style = if state.is_selectable(index) {
                Style::default().fg(Color::White)
            } else {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            };
            ListItem::new(Line::from(Span::styled(label.as_str(), style)))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor()));
    frame.render_stateful_widget(list, frame.area(), &mut list_state);
}
