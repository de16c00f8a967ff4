//! A console driven by a prepared script
//!
//! Feeds canned answers to menus and prompts and records everything that
//! would have been shown. When the script runs dry the console reports
//! [`MenuError::Interrupted`], exactly like a user pressing Ctrl-C.
//!
//! This is the console used by the crate's own tests, and it is public so that
//! code embedding the menu engine can drive its screens without a terminal.
//! Interactive runs use `cli::TermConsole` instead.
//!
//! ```
//! use filedeck::menu::{Choice, Menu, ScriptedConsole};
//!
//! let mut menu = Menu::<ScriptedConsole, u8>::new().keep_screen();
//! menu.push("One", |_: &mut ScriptedConsole| Ok(1));
//! menu.push("Two", |_: &mut ScriptedConsole| Ok(2));
//!
//! let mut console = ScriptedConsole::new().with_choices([Choice::label("Two")]);
//! assert_eq!(menu.select(&mut console)?, 2);
//! assert_eq!(console.menus()[0].0, ["One", "Two"]);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::collections::VecDeque;

use anyhow::Result;

use super::console::{Console, Interactive};
use super::cursor::{Key, Outcome, SelectState};
use super::error::MenuError;

/// A scripted answer to a list prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Report this index directly, bypassing the widget
    Index(usize),
    /// Report the index of the first row with this label, bypassing the widget
    Label(String),
    /// Drive the list widget with key presses
    Keys(Vec<Key>),
}

impl Choice {
    pub fn label(label: impl Into<String>) -> Self {
        Choice::Label(label.into())
    }
}

/// Something the console displayed or asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Clear,
    Line(String),
    Error(String),
    Prompt(String),
    Menu {
        labels: Vec<String>,
        disabled: Vec<usize>,
    },
    Confirm(String),
}

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    choices: VecDeque<Choice>,
    answers: VecDeque<bool>,
    records: Vec<Record>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }

    pub fn with_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.choices.extend(choices);
        self
    }

    pub fn with_answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.answers.extend(answers);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Regular output lines, in order
    pub fn lines(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| match record {
                Record::Line(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Error lines, in order
    pub fn errors(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| match record {
                Record::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every list rendered so far as `(labels, disabled)`
    pub fn menus(&self) -> Vec<(&[String], &[usize])> {
        self.records
            .iter()
            .filter_map(|record| match record {
                Record::Menu { labels, disabled } => Some((labels.as_slice(), disabled.as_slice())),
                _ => None,
            })
            .collect()
    }

    /// How many times a text prompt was shown
    pub fn prompt_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| matches!(record, Record::Prompt(_)))
            .count()
    }

    /// Whether every scripted answer has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.inputs.is_empty() && self.choices.is_empty() && self.answers.is_empty()
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> Result<()> {
        self.records.push(Record::Clear);
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.records.push(Record::Line(text.to_string()));
        Ok(())
    }

    fn error(&mut self, text: &str) -> Result<()> {
        self.records.push(Record::Error(text.to_string()));
        Ok(())
    }

    fn read_line(&mut self, label: &str) -> Result<String> {
        self.records.push(Record::Prompt(label.to_string()));
        self.inputs
            .pop_front()
            .ok_or_else(|| MenuError::Interrupted.into())
    }

    fn choose(&mut self, labels: &[String], disabled: &[usize]) -> Result<usize> {
        self.records.push(Record::Menu {
            labels: labels.to_vec(),
            disabled: disabled.to_vec(),
        });
        match self.choices.pop_front() {
            Some(Choice::Index(index)) => Ok(index),
            Some(Choice::Label(label)) => labels
                .iter()
                .position(|candidate| *candidate == label)
                .ok_or_else(|| MenuError::UnknownLabel(label).into()),
            Some(Choice::Keys(keys)) => {
                let mut state = SelectState::new(labels.len(), disabled)?;
                for key in keys {
                    match state.handle(key) {
                        Outcome::Chosen(index) => return Ok(index),
                        Outcome::Cancelled => break,
                        Outcome::Pending => {}
                    }
                }
                Err(MenuError::Interrupted.into())
            }
            None => Err(MenuError::Interrupted.into()),
        }
    }

    fn confirm(&mut self, question: &str, _confirm_text: &str, _reject_text: &str) -> Result<bool> {
        self.records.push(Record::Confirm(question.to_string()));
        self.answers
            .pop_front()
            .ok_or_else(|| MenuError::Interrupted.into())
    }
}

impl Interactive for ScriptedConsole {
    fn console(&mut self) -> &mut dyn Console {
        self
    }
}
