//! Interactive prompts using dialoguer, behind the [`Console`] trait

use std::io::ErrorKind;

use anyhow::Result;
use console::Term;
use dialoguer::{Input, Select};

use super::select::run_select;
use crate::menu::{Console, Interactive, MenuError};
use crate::utils::error_line;

/// Console backed by the real terminal
#[derive(Debug)]
pub struct TermConsole {
    term: Term,
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

/// Map dialoguer's abort errors onto the engine's interruption signal
fn interrupted(err: dialoguer::Error) -> anyhow::Error {
    #[allow(unreachable_patterns)]
    let aborted = match &err {
        dialoguer::Error::IO(io_err) => matches!(
            io_err.kind(),
            ErrorKind::Interrupted | ErrorKind::UnexpectedEof
        ),
        _ => false,
    };
    if aborted {
        MenuError::Interrupted.into()
    } else {
        err.into()
    }
}

impl Console for TermConsole {
    fn clear(&mut self) -> Result<()> {
        self.term.clear_screen()?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.term.write_line(text)?;
        Ok(())
    }

    fn error(&mut self, text: &str) -> Result<()> {
        Term::stderr().write_line(&error_line(text))?;
        Ok(())
    }

    fn read_line(&mut self, label: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(interrupted)
    }

    fn choose(&mut self, labels: &[String], disabled: &[usize]) -> Result<usize> {
        run_select(labels, disabled)
    }

    fn confirm(&mut self, question: &str, confirm_text: &str, reject_text: &str) -> Result<bool> {
        let choice = Select::new()
            .with_prompt(question)
            .items(&[confirm_text, reject_text])
            .default(0)
            .interact_opt()
            .map_err(interrupted)?;
        match choice {
            Some(index) => Ok(index == 0),
            None => Err(MenuError::Interrupted.into()),
        }
    }
}

impl Interactive for TermConsole {
    fn console(&mut self) -> &mut dyn Console {
        self
    }
}
