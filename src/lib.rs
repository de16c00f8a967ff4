//! filedeck: interactive file toolbox
//!
//! A small menu engine (selectable lists, validated prompts, confirmations
//! and an explicit navigation stack) plus the actions it drives: document
//! conversion, image compression and bulk file removal.

pub mod actions;
pub mod app;
pub mod cli;
pub mod menu;
pub mod report;
pub mod session;
pub mod utils;
