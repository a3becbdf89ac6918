//! Reading files as sets of lines.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;

use tally::io::text::read_lossy;

/// Distinct lines of a file, without line terminators.
pub fn read_line_set(path: &Path) -> Result<BTreeSet<String>> {
    let text = read_lossy(path)?;
    Ok(text.lines().map(str::to_string).collect())
}
