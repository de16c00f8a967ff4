//! Application configuration resolved from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Cli;

/// Settings the application runs with
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory the session starts in
    pub start_dir: PathBuf,
    /// Clear the screen before each menu
    pub clear_screen: bool,
    /// Office binary used for document conversion
    pub soffice: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let start_dir = match &cli.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to read the current directory")?,
        };
        Ok(Self {
            start_dir,
            clear_screen: !cli.no_clear,
            soffice: cli.soffice.clone(),
        })
    }

    /// Configuration for tests and embedding: start in `dir`, never clear
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: dir.into(),
            clear_screen: false,
            soffice: PathBuf::from("soffice"),
        }
    }
}
