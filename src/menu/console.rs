//! The console seam: every byte the menu engine shows or reads goes through here

use anyhow::Result;

/// Terminal operations needed by menus and prompts.
///
/// Implementations block until the user has answered. Aborting (Esc, Ctrl-C,
/// end of input) is reported as [`super::MenuError::Interrupted`].
pub trait Console {
    /// Clear the visible screen
    fn clear(&mut self) -> Result<()>;

    /// Print one line of regular output
    fn line(&mut self, text: &str) -> Result<()>;

    /// Print one line describing a problem
    fn error(&mut self, text: &str) -> Result<()>;

    /// Show `label` and read one line of text
    fn read_line(&mut self, label: &str) -> Result<String>;

    /// Display `labels` as a navigable list and return the confirmed index.
    ///
    /// Rows listed in `disabled` are shown but can never be confirmed.
    fn choose(&mut self, labels: &[String], disabled: &[usize]) -> Result<usize>;

    /// Ask a yes/no question, highlighting the confirm option first
    fn confirm(&mut self, question: &str, confirm_text: &str, reject_text: &str) -> Result<bool>;
}

/// A context that can hand out its console.
///
/// Menu actions and prompt continuations receive the whole context, so they
/// can reach application state and the console without holding both borrows
/// up front.
pub trait Interactive {
    fn console(&mut self) -> &mut dyn Console;
}
