//! Selectable actions: a label bound to a one-shot activation callable

use std::fmt;

use anyhow::Result;

use super::error::MenuError;

/// Activation callable of a menu item
pub type ActionFn<'a, C, T> = Box<dyn FnOnce(&mut C) -> Result<T> + 'a>;

/// Stable identifier of an item within one [`super::Menu`].
///
/// Assigned in push order and independent of the label, so duplicate labels
/// never make two items indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row in a menu
pub struct MenuItem<'a, C: ?Sized, T> {
    label: String,
    enabled: bool,
    action: Option<ActionFn<'a, C, T>>,
}

impl<'a, C: ?Sized, T> MenuItem<'a, C, T> {
    pub fn new(label: impl Into<String>, action: impl FnOnce(&mut C) -> Result<T> + 'a) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            action: Some(Box::new(action)),
        }
    }

    /// A row that is displayed but can never be chosen
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
            action: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Run the bound action, consuming the item
    pub fn activate(self, ctx: &mut C) -> Result<T> {
        match self.action {
            Some(action) => action(ctx),
            None => Err(MenuError::NoAction(self.label).into()),
        }
    }
}

impl<C: ?Sized, T> fmt::Debug for MenuItem<'_, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
