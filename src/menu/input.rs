//! Line input that only returns once every validator accepts the value

use anyhow::Result;
use log::debug;

use super::console::Console;
use super::validate::{collect_failures, BoxedValidator, Validator};

/// Prompt for a line of text until it passes validation
///
/// ```no_run
/// # use filedeck::menu::{validate, ValidatedInput};
/// # fn demo(console: &mut dyn filedeck::menu::Console) -> anyhow::Result<()> {
/// let quality = ValidatedInput::new("Enter quality (0 to 100)")
///     .validator(validate::not_empty())
///     .validator(validate::numeric())
///     .interact(console)?;
/// # Ok(())
/// # }
/// ```
pub struct ValidatedInput<'a> {
    label: String,
    validators: Vec<BoxedValidator<'a>>,
    on_success: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> ValidatedInput<'a> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            validators: Vec::new(),
            on_success: None,
        }
    }

    /// Add a validator; validators run in the order they are added
    pub fn validator(mut self, validator: impl Validator + 'a) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn validators(mut self, validators: impl IntoIterator<Item = BoxedValidator<'a>>) -> Self {
        self.validators.extend(validators);
        self
    }

    /// Hook run once, after a value has been accepted and before it is returned
    pub fn on_success(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_success = Some(Box::new(hook));
        self
    }

    /// Read lines until one passes every validator.
    ///
    /// All validators run on every attempt and every failure is printed before
    /// asking again. There is no retry limit; console errors end the loop.
    pub fn interact(self, console: &mut dyn Console) -> Result<String> {
        let Self {
            label,
            validators,
            on_success,
        } = self;

        loop {
            let value = console.read_line(&label)?;
            let failures = collect_failures(&value, &validators);

            if failures.is_empty() {
                if let Some(hook) = on_success {
                    hook();
                }
                return Ok(value);
            }

            debug!("Rejected input for '{}': {} failure(s)", label, failures.len());
            for failure in &failures {
                for reason in failure.reasons() {
                    console.error(reason)?;
                }
            }
        }
    }
}
