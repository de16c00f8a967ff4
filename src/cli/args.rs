//! Command-line argument definitions using clap

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;
use std::path::PathBuf;

use crate::utils::default_log_path;

/// filedeck - browse a directory and convert, compress or clean up its files
#[derive(Parser, Debug)]
#[command(name = "filedeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to start in. Defaults to the current directory.
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Office binary used for PDF/DOCX conversion (LibreOffice `soffice` or compatible)
    #[arg(long, default_value = "soffice")]
    pub soffice: PathBuf,

    /// Keep previous output on screen instead of clearing before each menu
    #[arg(long, default_value = "false")]
    pub no_clear: bool,

    /// Log file path. Defaults to filedeck.log in the user cache directory.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Log verbosity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    /// Log destination, falling back to the default location
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}
