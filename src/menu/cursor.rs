//! Cursor model for the selectable list widget
//!
//! Pure state: no terminal access, so the navigation policy can be driven by a
//! real keyboard or by a script.

use super::error::MenuError;

/// A navigation gesture understood by the list widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Home,
    End,
    Enter,
    Cancel,
}

/// Result of feeding one key to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep waiting for input
    Pending,
    /// The user confirmed the row at this index
    Chosen(usize),
    /// The user aborted the selection
    Cancelled,
}

/// Cursor over a list where some rows cannot be chosen.
///
/// The cursor only ever rests on a selectable row, so confirming always yields
/// a selectable index. Movement does not wrap around.
#[derive(Debug, Clone)]
pub struct SelectState {
    selectable: Vec<bool>,
    cursor: usize,
}

impl SelectState {
    /// Build the cursor for `len` rows with `disabled` rows marked.
    ///
    /// Disabled indices outside the list are ignored.
    pub fn new(len: usize, disabled: &[usize]) -> Result<Self, MenuError> {
        if len == 0 {
            return Err(MenuError::Empty);
        }
        let mut selectable = vec![true; len];
        for &index in disabled {
            if let Some(slot) = selectable.get_mut(index) {
                *slot = false;
            }
        }
        let cursor = selectable
            .iter()
            .position(|&ok| ok)
            .ok_or(MenuError::NothingSelectable)?;
        Ok(Self { selectable, cursor })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.selectable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectable.is_empty()
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        self.selectable.get(index).copied().unwrap_or(false)
    }

    /// Apply one navigation gesture
    pub fn handle(&mut self, key: Key) -> Outcome {
        match key {
            Key::Up => {
                if let Some(index) = (0..self.cursor).rev().find(|&i| self.selectable[i]) {
                    self.cursor = index;
                }
            }
            Key::Down => {
                if let Some(index) = (self.cursor + 1..self.len()).find(|&i| self.selectable[i]) {
                    self.cursor = index;
                }
            }
            Key::Home => {
                if let Some(index) = self.selectable.iter().position(|&ok| ok) {
                    self.cursor = index;
                }
            }
            Key::End => {
                if let Some(index) = self.selectable.iter().rposition(|&ok| ok) {
                    self.cursor = index;
                }
            }
            Key::Enter => return Outcome::Chosen(self.cursor),
            Key::Cancel => return Outcome::Cancelled,
        }
        Outcome::Pending
    }
}
