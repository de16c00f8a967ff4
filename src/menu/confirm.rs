//! Yes/no prompt that dispatches to one of two continuations

use anyhow::Result;
use log::debug;

use super::console::Interactive;

/// Binary confirmation with configurable option labels
#[derive(Debug, Clone)]
pub struct Confirmation {
    question: String,
    confirm_text: String,
    reject_text: String,
}

impl Confirmation {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            confirm_text: "Yes".to_string(),
            reject_text: "No".to_string(),
        }
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    pub fn reject_text(mut self, text: impl Into<String>) -> Self {
        self.reject_text = text.into();
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Ask the question and run exactly one continuation.
    ///
    /// The confirm option is highlighted by default. Returns whatever the
    /// chosen continuation returns.
    pub fn ask<C, T>(
        &self,
        ctx: &mut C,
        on_confirm: impl FnOnce(&mut C) -> Result<T>,
        on_reject: impl FnOnce(&mut C) -> Result<T>,
    ) -> Result<T>
    where
        C: Interactive + ?Sized,
    {
        let confirmed = ctx
            .console()
            .confirm(&self.question, &self.confirm_text, &self.reject_text)?;
        debug!("'{}' answered {}", self.question, confirmed);
        if confirmed {
            on_confirm(ctx)
        } else {
            on_reject(ctx)
        }
    }
}
