//! Running totals over an execution table.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::execution::ExecutionTable;

/// Cumulative counts after a given number of executions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TallyRow {
    /// 1-based count of executions observed so far.
    pub executions: usize,
    /// Signatures seen so far, counted once per execution index.
    pub total: usize,
    /// Executions per signature; infinite while `total` is zero.
    pub total_freq: f64,
    /// Distinct signatures seen so far.
    pub bugs: usize,
    /// Executions per distinct signature; infinite while `bugs` is zero.
    pub bugs_freq: f64,
}

/// One row per execution index, in index order.
pub fn tally(table: &ExecutionTable) -> Vec<TallyRow> {
    let mut rows = Vec::with_capacity(table.len());
    let mut total = 0;
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for (offset, slot) in table.slots().iter().enumerate() {
        let executions = offset + 1;
        total += slot.len();
        seen.extend(slot.iter().map(String::as_str));
        rows.push(TallyRow {
            executions,
            total,
            total_freq: ratio(executions, total),
            bugs: seen.len(),
            bugs_freq: ratio(executions, seen.len()),
        });
    }
    rows
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}
