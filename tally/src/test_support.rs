//! Test-only helpers for building results trees on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::execution::START_MARKER;
use crate::io::config::DEFAULT_RESULTS_DIR;

/// Write one run log at `<root>/<batch>/<file_name>`.
pub fn write_run(root: &Path, batch: &str, file_name: &str, contents: &str) -> PathBuf {
    let dir = root.join(batch);
    fs::create_dir_all(&dir).expect("create batch dir");
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("write run log");
    path
}

/// File name for a run in the `log--<benchmark>--<algorithm>--<run_id>` scheme.
pub fn run_file_name(benchmark: &str, algorithm: &str, run_id: &str) -> String {
    format!("log--{benchmark}--{algorithm}--{run_id}")
}

/// Log text with one start marker per execution followed by its signatures.
pub fn execution_log(executions: &[&[&str]]) -> String {
    let mut log = String::new();
    for signatures in executions {
        log.push_str(START_MARKER);
        log.push('\n');
        for signature in *signatures {
            log.push_str(signature);
            log.push('\n');
        }
    }
    log
}

/// Temporary working directory containing the default results root.
pub struct ResultsTree {
    temp: TempDir,
}

impl ResultsTree {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(temp.path().join(DEFAULT_RESULTS_DIR)).expect("results dir");
        Self { temp }
    }

    /// Working directory the binaries should run in.
    pub fn workdir(&self) -> &Path {
        self.temp.path()
    }

    pub fn results_dir(&self) -> PathBuf {
        self.temp.path().join(DEFAULT_RESULTS_DIR)
    }

    pub fn add_run(&self, batch: &str, file_name: &str, contents: &str) -> PathBuf {
        write_run(&self.results_dir(), batch, file_name, contents)
    }
}

impl Default for ResultsTree {
    fn default() -> Self {
        Self::new()
    }
}
