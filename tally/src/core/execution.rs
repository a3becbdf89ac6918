//! Splitting run logs into executions and collecting their signatures.
//!
//! A run log holds one or more executions, each opened by a start marker
//! line. Lines mentioning an assertion are bug signatures and are filed under
//! the execution they appear in. Executions are numbered per benchmark: the
//! first file scanned for a benchmark starts at index 0 and every following
//! file or marker moves on to the next index. Tables are indexed by that
//! number, so signatures from different benchmarks that share an index are
//! merged.

use std::collections::BTreeSet;

use thiserror::Error;

/// Line that opens an execution.
pub const START_MARKER: &str = "Starting execution";

/// Substrings (case-sensitive) that mark a line as a bug signature.
pub const ASSERT_KEYWORDS: [&str; 2] = ["assert", "Assert"];

/// Execution indices must stay below this value.
pub const MAX_EXECUTIONS: usize = 10_000;

/// What counts as a marker or signature, and the execution ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    pub start_marker: String,
    pub assert_keywords: Vec<String>,
    pub max_executions: usize,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            start_marker: START_MARKER.to_string(),
            assert_keywords: ASSERT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            max_executions: MAX_EXECUTIONS,
        }
    }
}

impl ScanRules {
    pub fn is_signature(&self, line: &str) -> bool {
        self.assert_keywords
            .iter()
            .any(|keyword| line.contains(keyword.as_str()))
    }

    pub fn is_start_marker(&self, line: &str) -> bool {
        line.trim() == self.start_marker
    }
}

/// A log would need an execution index at or beyond the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("> {limit} executions!")]
pub struct Overflow {
    pub limit: usize,
}

/// Signatures observed at each execution index, for one algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionTable {
    slots: Vec<BTreeSet<String>>,
}

impl ExecutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[BTreeSet<String>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&BTreeSet<String>> {
        self.slots.get(index)
    }

    fn ensure_slot(&mut self, index: usize) {
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, BTreeSet::new);
        }
    }

    fn record(&mut self, index: usize, signature: &str) {
        self.ensure_slot(index);
        self.slots[index].insert(signature.to_string());
    }
}

/// Index of the last execution scanned for the current benchmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor(Option<usize>);

impl Cursor {
    /// Cursor for a benchmark with no files scanned yet.
    pub fn start() -> Self {
        Self(None)
    }

    pub fn index(self) -> Option<usize> {
        self.0
    }
}

/// Scan one run log into `table`, continuing after `cursor`.
///
/// The file opens a new execution. Its first start marker belongs to that
/// execution; each later marker opens the next one. Returns the cursor to
/// hand to the next file of the same benchmark.
pub fn scan_log(
    text: &str,
    table: &mut ExecutionTable,
    cursor: Cursor,
    rules: &ScanRules,
) -> Result<Cursor, Overflow> {
    let limit = rules.max_executions;
    let mut index = match cursor.0 {
        Some(index) if index + 1 >= limit => return Err(Overflow { limit }),
        Some(index) => index + 1,
        None => 0,
    };
    table.ensure_slot(index);

    let mut seen_marker = false;
    for line in text.lines() {
        if rules.is_signature(line) {
            table.record(index, line);
        } else if rules.is_start_marker(line) {
            if !seen_marker {
                seen_marker = true;
            } else {
                index += 1;
                if index >= limit {
                    return Err(Overflow { limit });
                }
                table.ensure_slot(index);
            }
        }
    }
    Ok(Cursor(Some(index)))
}
