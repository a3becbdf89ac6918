//! I/O helpers for the analysis commands.

pub mod config;
pub mod discover;
pub mod text;
