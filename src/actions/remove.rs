//! Bulk removal of files selected by a name filter

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::fs::has_extension;

/// How file names are matched for removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    StartsWith(String),
    EndsWith(String),
    Contains(String),
    /// Extension without the leading dot; a leading dot is tolerated
    Extension(String),
}

impl NameFilter {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameFilter::StartsWith(prefix) => name.starts_with(prefix.as_str()),
            NameFilter::EndsWith(suffix) => name.ends_with(suffix.as_str()),
            NameFilter::Contains(needle) => name.contains(needle.as_str()),
            NameFilter::Extension(ext) => has_extension(name, ext),
        }
    }
}

impl fmt::Display for NameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameFilter::StartsWith(s) => write!(f, "starting with '{}'", s),
            NameFilter::EndsWith(s) => write!(f, "ending with '{}'", s),
            NameFilter::Contains(s) => write!(f, "containing '{}'", s),
            NameFilter::Extension(ext) => {
                write!(f, "with extension '{}'", ext.trim_start_matches('.'))
            }
        }
    }
}

/// Names from `files` that match `filter`, in their original order
pub fn select_matching<'f>(files: &'f [String], filter: &NameFilter) -> Vec<&'f str> {
    files
        .iter()
        .map(String::as_str)
        .filter(|name| filter.matches(name))
        .collect()
}

/// Remove every file in `files` that matches `filter`.
///
/// Returns the removed names in order. The first failure stops the batch;
/// files removed before it stay removed.
pub fn remove_matching(dir: &Path, files: &[String], filter: &NameFilter) -> Result<Vec<String>> {
    let mut removed = Vec::new();
    for name in select_matching(files, filter) {
        let path = dir.join(name);
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to remove file: {}", path.display()))?;
        info!("Removed {}", path.display());
        removed.push(name.to_string());
    }
    Ok(removed)
}
