//! Menu engine - selectable actions, validated input, confirmation and navigation

mod confirm;
mod console;
mod cursor;
mod engine;
mod error;
mod input;
mod item;
mod nav;
mod script;
pub mod validate;

pub use confirm::Confirmation;
pub use console::{Console, Interactive};
pub use cursor::{Key, Outcome, SelectState};
pub use engine::{Menu, RenderHook, ECHO_PREFIX};
pub use error::{MenuError, ValidationError};
pub use input::ValidatedInput;
pub use item::{ActionFn, ItemId, MenuItem};
pub use nav::{Flow, Navigator, Transition};
pub use script::{Choice, Record, ScriptedConsole};
pub use validate::{BoxedValidator, Validator};
