//! Session context: the working directory every action operates on

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::actions::is_directory;

/// Per-run state passed explicitly to actions.
///
/// The process working directory is never changed; relative paths are
/// resolved against [`Session::cwd`] instead.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
}

impl Session {
    /// Start a session in `dir`, which must be an existing directory
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let cwd = dir
            .canonicalize()
            .with_context(|| format!("Failed to open directory: {}", dir.display()))?;
        if !is_directory(&cwd) {
            anyhow::bail!("Not a directory: {}", cwd.display());
        }
        Ok(Self { cwd })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve user input against the session directory
    pub fn resolve(&self, input: &str) -> PathBuf {
        self.cwd.join(input.trim())
    }

    /// Move the session to another directory, relative paths allowed
    pub fn change_dir(&mut self, input: &str) -> Result<&Path> {
        let next = Self::new(self.resolve(input))?;
        info!("Working directory: {} -> {}", self.cwd.display(), next.cwd.display());
        self.cwd = next.cwd;
        Ok(&self.cwd)
    }
}
