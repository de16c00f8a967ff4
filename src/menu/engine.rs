//! The render/select engine
//!
//! A [`Menu`] is built fresh for every render, rendered once, and consumed by
//! [`Menu::select`], which invokes the chosen item's action and hands back
//! whatever that action returns. There is no loop in here: callers that want
//! to show the menu again build and select it again.

use anyhow::Result;
use log::debug;

use super::console::Interactive;
use super::error::MenuError;
use super::item::{ItemId, MenuItem};

/// Hook run before the list is displayed
pub type RenderHook<'a, C> = Box<dyn FnOnce(&mut C) -> Result<()> + 'a>;

/// Prefix printed before the chosen label when echoing is enabled
pub const ECHO_PREFIX: &str = "Your choice: ";

/// An ordered list of selectable actions for one render/select cycle
pub struct Menu<'a, C: ?Sized, T> {
    items: Vec<MenuItem<'a, C, T>>,
    on_render: Option<RenderHook<'a, C>>,
    echo_selection: bool,
}

impl<'a, C, T> Default for Menu<'a, C, T>
where
    C: Interactive + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C, T> Menu<'a, C, T>
where
    C: Interactive + ?Sized,
{
    /// Create an empty menu that clears the screen before rendering
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            on_render: Some(Box::new(|ctx: &mut C| ctx.console().clear())),
            echo_selection: false,
        }
    }

    /// Replace the pre-render hook
    pub fn on_render(mut self, hook: impl FnOnce(&mut C) -> Result<()> + 'a) -> Self {
        self.on_render = Some(Box::new(hook));
        self
    }

    /// Render without clearing or printing anything first
    pub fn keep_screen(mut self) -> Self {
        self.on_render = None;
        self
    }

    /// Print the chosen label before running its action
    pub fn echo_selection(mut self, echo: bool) -> Self {
        self.echo_selection = echo;
        self
    }

    /// Append an item and return its id
    pub fn push(
        &mut self,
        label: impl Into<String>,
        action: impl FnOnce(&mut C) -> Result<T> + 'a,
    ) -> ItemId {
        self.push_item(MenuItem::new(label, action))
    }

    /// Append a row that is shown but never selectable
    pub fn push_disabled(&mut self, label: impl Into<String>) -> ItemId {
        self.push_item(MenuItem::placeholder(label))
    }

    pub fn push_item(&mut self, item: MenuItem<'a, C, T>) -> ItemId {
        self.items.push(item);
        ItemId(self.items.len() - 1)
    }

    pub fn item(&self, id: ItemId) -> Option<&MenuItem<'a, C, T>> {
        self.items.get(id.0)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut MenuItem<'a, C, T>> {
        self.items.get_mut(id.0)
    }

    /// Mark an item non-selectable
    pub fn disable(&mut self, id: ItemId) -> Result<(), MenuError> {
        let item = self.item_mut(id).ok_or(MenuError::UnknownItem(id.0))?;
        item.set_enabled(false);
        Ok(())
    }

    /// Find the first item carrying `label`.
    ///
    /// Duplicate labels resolve to the earliest occurrence.
    pub fn find_label(&self, label: &str) -> Option<ItemId> {
        self.items
            .iter()
            .position(|item| item.label() == label)
            .map(ItemId)
    }

    /// Mark the first item carrying `label` non-selectable
    pub fn disable_label(&mut self, label: &str) -> Result<ItemId, MenuError> {
        let id = self
            .find_label(label)
            .ok_or_else(|| MenuError::UnknownLabel(label.to_string()))?;
        self.disable(id)?;
        Ok(id)
    }

    /// Disable several items by label, failing on the first unknown one
    pub fn disable_labels<I, S>(&mut self, labels: I) -> Result<(), MenuError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.disable_label(label.as_ref())?;
        }
        Ok(())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(MenuItem::label).collect()
    }

    /// Indices of the rows that cannot be chosen, in display order
    pub fn non_selectable(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_enabled())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render the menu, wait for one choice, and run the chosen action.
    ///
    /// Errors from the action propagate unchanged.
    pub fn select(self, ctx: &mut C) -> Result<T> {
        let Self {
            items,
            on_render,
            echo_selection,
        } = self;

        if items.is_empty() {
            return Err(MenuError::Empty.into());
        }
        if items.iter().all(|item| !item.is_enabled()) {
            return Err(MenuError::NothingSelectable.into());
        }

        if let Some(hook) = on_render {
            hook(ctx)?;
        }

        let labels: Vec<String> = items.iter().map(|item| item.label().to_string()).collect();
        let disabled: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_enabled())
            .map(|(index, _)| index)
            .collect();

        let index = ctx.console().choose(&labels, &disabled)?;
        if index >= labels.len() {
            return Err(MenuError::OutOfRange {
                index,
                len: labels.len(),
            }
            .into());
        }
        if disabled.contains(&index) {
            return Err(MenuError::DisabledChoice(index).into());
        }

        debug!("Menu choice {}: {}", index, labels[index]);
        if echo_selection {
            ctx.console()
                .line(&format!("{}{}", ECHO_PREFIX, labels[index]))?;
        }

        let item = items
            .into_iter()
            .nth(index)
            .ok_or(MenuError::OutOfRange {
                index,
                len: labels.len(),
            })?;
        item.activate(ctx)
    }
}
