//! I/O helpers for the hook pipeline.

pub mod config;
pub mod discover;
pub mod event_reader;
pub mod formatter;
pub mod process;
