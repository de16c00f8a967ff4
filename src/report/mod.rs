//! Report module - summarizing bulk action results

pub mod summary;

pub use summary::*;
