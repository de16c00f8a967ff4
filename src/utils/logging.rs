//! File logging setup
//!
//! The terminal belongs to the menus, so log records go to a file.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Default log location: `<cache dir>/filedeck/filedeck.log`, or the temp dir
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("filedeck"))
        .unwrap_or_else(std::env::temp_dir)
        .join("filedeck.log")
}

/// Install the global file logger
pub fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, log_config, log_file).context("Logger already initialised")?;
    Ok(())
}
