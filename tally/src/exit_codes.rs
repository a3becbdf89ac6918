//! Stable exit codes for the analysis CLIs.

/// Report printed.
pub const OK: i32 = 0;
/// Unreadable input, invalid config, or a rejected run name under `--strict`.
pub const INVALID: i32 = 1;
/// A run log pushed the execution index to the ceiling.
pub const OVERFLOW: i32 = 2;
