//! Directory listing helpers

use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

/// Names of all entries in `dir`, sorted.
///
/// Entries whose names are not valid UTF-8 are skipped with a warning.
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let read_dir = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.with_context(|| format!("Failed to list directory: {}", dir.display()))?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping non UTF-8 entry {:?} in {}", raw, dir.display()),
        }
    }
    names.sort();
    Ok(names)
}

/// Whether `name` inside `dir` is a regular file
pub fn is_regular_file(dir: &Path, name: &str) -> bool {
    dir.join(name).is_file()
}

pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Regular files in `dir`, sorted by name
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    Ok(list_entries(dir)?
        .into_iter()
        .filter(|name| is_regular_file(dir, name))
        .collect())
}

/// Whether `name` ends in `.ext`, ignoring ASCII case
pub fn has_extension(name: &str, ext: &str) -> bool {
    let ext = ext.trim_start_matches('.');
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Regular files in `dir` carrying any of `exts`, sorted by name
pub fn files_with_extensions(dir: &Path, exts: &[&str]) -> Result<Vec<String>> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|name| exts.iter().any(|ext| has_extension(name, ext)))
        .collect())
}

/// Describe an extension list for headings, e.g. `jpg; png`
pub fn describe_extensions(exts: &[&str]) -> String {
    exts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension_ignores_case_and_leading_dot() {
        assert!(has_extension("photo.JPG", "jpg"));
        assert!(has_extension("photo.jpg", ".jpg"));
        assert!(!has_extension("photo.jpg.bak", "jpg"));
        assert!(!has_extension("jpg", "jpg"));
    }

    #[test]
    fn test_describe_extensions() {
        assert_eq!(describe_extensions(&["pdf"]), "pdf");
        assert_eq!(describe_extensions(&["jpg", "png"]), "jpg; png");
    }
}
