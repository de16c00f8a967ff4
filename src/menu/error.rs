//! Error types for the menu engine and input validation.

use thiserror::Error;

/// Errors raised by the menu engine itself.
///
/// Everything except `Interrupted` indicates a malformed menu definition or a
/// console implementation that broke the widget contract. None of them are
/// caught by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// The menu was rendered with no items at all.
    #[error("Menu has no items to display")]
    Empty,

    /// Every item in the menu is disabled.
    #[error("Menu has no selectable items")]
    NothingSelectable,

    /// The console reported a choice that is marked non-selectable.
    #[error("Menu item {0} is not selectable")]
    DisabledChoice(usize),

    /// The console reported a choice outside the rendered list.
    #[error("Choice {index} is out of range for a menu of {len} item(s)")]
    OutOfRange {
        /// Index reported by the console
        index: usize,
        /// Number of rendered items
        len: usize,
    },

    /// A label used to look up an item is not present in the menu.
    #[error("No menu item labelled '{0}'")]
    UnknownLabel(String),

    /// An item id does not belong to the menu.
    #[error("No menu item with id {0}")]
    UnknownItem(usize),

    /// A placeholder item without an action was activated.
    #[error("Menu item '{0}' has no action")]
    NoAction(String),

    /// The user aborted the prompt (Esc, Ctrl-C, or closed input).
    #[error("Interrupted by user")]
    Interrupted,
}

/// A candidate value was rejected by a validator.
///
/// The message is shown to the user verbatim. Aggregating validators join
/// several reasons with newlines; each line is displayed separately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Iterate over the individual reasons carried by this error
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.message.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = MenuError::OutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Choice 5 is out of range for a menu of 3 item(s)"
        );
    }

    #[test]
    fn test_unknown_label_display() {
        let err = MenuError::UnknownLabel("Settings".to_string());
        assert_eq!(err.to_string(), "No menu item labelled 'Settings'");
    }

    #[test]
    fn test_validation_error_reasons_split_on_lines() {
        let err = ValidationError::new("first\nsecond");
        let reasons: Vec<&str> = err.reasons().collect();
        assert_eq!(reasons, vec!["first", "second"]);
        assert_eq!(err.to_string(), "first\nsecond");
    }

    #[test]
    fn test_menu_error_converts_to_anyhow() {
        let err: anyhow::Error = MenuError::Interrupted.into();
        assert_eq!(
            err.downcast_ref::<MenuError>(),
            Some(&MenuError::Interrupted)
        );
    }
}
