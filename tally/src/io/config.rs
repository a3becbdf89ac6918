//! Tally configuration, optionally loaded from a TOML overrides file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::execution::{ASSERT_KEYWORDS, MAX_EXECUTIONS, START_MARKER, ScanRules};

/// Results root used when neither a config file nor a flag overrides it.
pub const DEFAULT_RESULTS_DIR: &str = "benchmarks/__results";

pub const DEFAULT_ALGORITHMS: [&str; 3] = ["swarm1", "pct", "random"];

pub const DEFAULT_BENCHMARKS: [&str; 49] = [
    "chess--InterlockedWorkStealQueue",
    "chess--InterlockedWorkStealQueueWithState",
    "chess--StateWorkStealQueue",
    "chess--WorkStealQueue",
    "conc-bugs--aget-bug2",
    "conc-bugs--pbzip2-0.9.4",
    "conc-bugs--stringbuffer-jdk1.4",
    "concurrent-software-benchmarks--account_bad",
    "concurrent-software-benchmarks--arithmetic_prog_bad",
    "concurrent-software-benchmarks--bluetooth_driver_bad",
    "concurrent-software-benchmarks--carter01_bad",
    "concurrent-software-benchmarks--circular_buffer_bad",
    "concurrent-software-benchmarks--deadlock01_bad",
    "concurrent-software-benchmarks--din_phil2_sat",
    "concurrent-software-benchmarks--din_phil3_sat",
    "concurrent-software-benchmarks--din_phil4_sat",
    "concurrent-software-benchmarks--din_phil5_sat",
    "concurrent-software-benchmarks--din_phil6_sat",
    "concurrent-software-benchmarks--din_phil7_sat",
    "concurrent-software-benchmarks--fsbench_bad",
    "concurrent-software-benchmarks--lazy01_bad",
    "concurrent-software-benchmarks--phase01_bad",
    "concurrent-software-benchmarks--queue_bad",
    "concurrent-software-benchmarks--reorder_10_bad",
    "concurrent-software-benchmarks--reorder_20_bad",
    "concurrent-software-benchmarks--reorder_3_bad",
    "concurrent-software-benchmarks--reorder_4_bad",
    "concurrent-software-benchmarks--reorder_5_bad",
    "concurrent-software-benchmarks--stack_bad",
    "concurrent-software-benchmarks--sync01_bad",
    "concurrent-software-benchmarks--sync02_bad",
    "concurrent-software-benchmarks--token_ring_bad",
    "concurrent-software-benchmarks--twostage_100_bad",
    "concurrent-software-benchmarks--twostage_bad",
    "concurrent-software-benchmarks--wronglock_3_bad",
    "concurrent-software-benchmarks--wronglock_bad",
    "parsec-2.0--streamcluster",
    "parsec-2.0--streamcluster2",
    "parsec-2.0--streamcluster3",
    "parsec-2.0--ferret",
    "inspect_examples--ctrace-test",
    "inspect_benchmarks--qsort_mt",
    "radbench--bug1",
    "radbench--bug2",
    "radbench--bug6",
    "safestack--bug1",
    "splash2--barnes",
    "splash2--fft",
    "splash2--lu",
];

/// Tally configuration (TOML).
///
/// Every field is optional in the file; missing fields keep the built-in
/// experiment values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TallyConfig {
    /// Directory holding one subdirectory per result batch.
    pub results_dir: PathBuf,

    /// Algorithms to report, in output order.
    pub algorithms: Vec<String>,

    /// Benchmarks whose runs are counted. Execution numbering restarts for
    /// each benchmark, in this order.
    pub benchmarks: Vec<String>,

    pub start_marker: String,

    pub assert_keywords: Vec<String>,

    /// Execution indices must stay below this value.
    pub max_executions: usize,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            algorithms: owned(&DEFAULT_ALGORITHMS),
            benchmarks: owned(&DEFAULT_BENCHMARKS),
            start_marker: START_MARKER.to_string(),
            assert_keywords: owned(&ASSERT_KEYWORDS),
            max_executions: MAX_EXECUTIONS,
        }
    }
}

impl TallyConfig {
    pub fn validate(&self) -> Result<()> {
        validate_names("algorithms", &self.algorithms)?;
        validate_names("benchmarks", &self.benchmarks)?;
        validate_names("assert_keywords", &self.assert_keywords)?;
        if self.start_marker.trim().is_empty() {
            return Err(anyhow!("start_marker must be non-empty"));
        }
        if self.max_executions == 0 {
            return Err(anyhow!("max_executions must be > 0"));
        }
        Ok(())
    }

    pub fn scan_rules(&self) -> ScanRules {
        ScanRules {
            start_marker: self.start_marker.trim().to_string(),
            assert_keywords: self.assert_keywords.clone(),
            max_executions: self.max_executions,
        }
    }

    pub fn knows(&self, benchmark: &str, algorithm: &str) -> bool {
        self.benchmarks.iter().any(|b| b == benchmark)
            && self.algorithms.iter().any(|a| a == algorithm)
    }
}

/// Load config from a TOML file.
///
/// Unlike the defaults, an explicitly named file must exist.
pub fn load_config(path: &Path) -> Result<TallyConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TallyConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

fn validate_names(field: &str, names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(anyhow!("{field} must be a non-empty array"));
    }
    let mut seen = BTreeSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(anyhow!("{field} entries must be non-empty"));
        }
        if !seen.insert(name.as_str()) {
            return Err(anyhow!("{field} contains duplicate entry {name}"));
        }
    }
    Ok(())
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
