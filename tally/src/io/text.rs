//! Reading log and line files as text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a whole file as text, replacing invalid UTF-8 sequences.
///
/// Run logs occasionally carry raw bytes from the program under test; those
/// lines still count as distinct lines.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
