//! Explicit navigation stack
//!
//! Screens are pushed and popped on a [`Navigator`] instead of menus calling
//! each other, so "back" and "home" are ordinary transitions and the call
//! stack stays flat no matter how long the session runs.

/// What a menu action asks the navigator to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<S> {
    /// Render the current screen again
    Stay,
    /// Open a child screen
    Push(S),
    /// Swap the current screen for another at the same depth
    Replace(S),
    /// Return to the parent screen; no-op on the root
    Back,
    /// Return to the root screen
    Home,
    /// Leave the navigation loop
    Exit,
}

/// Whether the navigation loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Stack of screens with a fixed root
#[derive(Debug, Clone)]
pub struct Navigator<S> {
    root: S,
    stack: Vec<S>,
}

impl<S> Navigator<S> {
    pub fn new(root: S) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    /// Screen on top of the stack
    pub fn current(&self) -> &S {
        self.stack.last().unwrap_or(&self.root)
    }

    pub fn root(&self) -> &S {
        &self.root
    }

    /// Number of screens on the stack, root included
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Screens from the root to the current one
    pub fn path(&self) -> impl Iterator<Item = &S> {
        std::iter::once(&self.root).chain(self.stack.iter())
    }

    pub fn apply(&mut self, transition: Transition<S>) -> Flow {
        match transition {
            Transition::Stay => {}
            Transition::Push(screen) => self.stack.push(screen),
            Transition::Replace(screen) => match self.stack.last_mut() {
                Some(top) => *top = screen,
                None => self.root = screen,
            },
            Transition::Back => {
                self.stack.pop();
            }
            Transition::Home => self.stack.clear(),
            Transition::Exit => return Flow::Exit,
        }
        Flow::Continue
    }
}
