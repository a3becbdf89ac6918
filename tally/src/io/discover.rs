//! Discovery of run logs under a results root.
//!
//! The root holds one directory per batch; each batch holds flat run logs.
//! Entries are visited in file-name order so reports do not depend on the
//! filesystem's listing order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::core::run_name::RunName;

/// A run log whose file name decoded cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFile {
    pub path: PathBuf,
    pub name: RunName,
}

/// A file in a batch directory whose name could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub path: PathBuf,
    pub reason: String,
}

/// Every run log under a results root, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub runs: Vec<RunFile>,
    pub rejected: Vec<Rejected>,
}

impl Corpus {
    /// Runs for one (benchmark, algorithm) pair, in discovery order.
    pub fn matching<'a>(
        &'a self,
        benchmark: &'a str,
        algorithm: &'a str,
    ) -> impl Iterator<Item = &'a RunFile> + 'a {
        self.runs
            .iter()
            .filter(move |run| run.name.matches(benchmark, algorithm))
    }
}

/// List all run logs in the batch directories under `results_dir`.
///
/// Plain files directly under the root are not batches and are ignored.
#[instrument(skip_all, fields(results_dir = %results_dir.display()))]
pub fn discover_runs(results_dir: &Path) -> Result<Corpus> {
    if !results_dir.is_dir() {
        bail!("results directory {} not found", results_dir.display());
    }

    let mut corpus = Corpus::default();
    let walker = WalkDir::new(results_dir)
        .min_depth(2)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("walk {}", results_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        match RunName::parse(&file_name) {
            Ok(name) => corpus.runs.push(RunFile {
                path: entry.path().to_path_buf(),
                name,
            }),
            Err(err) => {
                debug!(path = %entry.path().display(), error = %err, "skipping undecodable run name");
                corpus.rejected.push(Rejected {
                    path: entry.path().to_path_buf(),
                    reason: err.to_string(),
                });
            }
        }
    }

    debug!(
        runs = corpus.runs.len(),
        rejected = corpus.rejected.len(),
        "corpus discovered"
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::test_support::write_run;

    fn file_names(corpus: &Corpus) -> Vec<String> {
        corpus
            .runs
            .iter()
            .map(|run| run.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn lists_batches_and_files_in_name_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_run(root, "batch-b", "log--radbench--bug1--pct--1", "");
        write_run(root, "batch-a", "log--radbench--bug1--pct--2", "");
        write_run(root, "batch-a", "log--radbench--bug1--pct--10", "");

        let corpus = discover_runs(root).expect("discover");
        assert_eq!(
            file_names(&corpus),
            vec![
                "log--radbench--bug1--pct--10",
                "log--radbench--bug1--pct--2",
                "log--radbench--bug1--pct--1",
            ]
        );
        assert!(corpus.runs[2].path.starts_with(root.join("batch-b")));
    }

    #[test]
    fn ignores_top_level_files_and_nested_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::write(root.join("log--radbench--bug1--pct--0"), "").expect("stray");
        write_run(root, "batch", "log--radbench--bug1--pct--1", "");
        fs::create_dir_all(root.join("batch/nested")).expect("nested");
        fs::write(root.join("batch/nested/log--radbench--bug1--pct--2"), "").expect("deep");

        let corpus = discover_runs(root).expect("discover");
        assert_eq!(file_names(&corpus), vec!["log--radbench--bug1--pct--1"]);
        assert!(corpus.rejected.is_empty());
    }

    #[test]
    fn records_undecodable_names() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_run(root, "batch", "README", "");
        write_run(root, "batch", "log--splash2--fft--random--1", "");

        let corpus = discover_runs(root).expect("discover");
        assert_eq!(corpus.runs.len(), 1);
        assert_eq!(corpus.rejected.len(), 1);
        assert!(corpus.rejected[0].path.ends_with("README"));
        assert!(corpus.rejected[0].reason.contains("found 1"));
    }

    #[test]
    fn matching_filters_by_benchmark_and_algorithm() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_run(root, "batch", "log--splash2--fft--random--1", "");
        write_run(root, "batch", "log--splash2--fft--pct--1", "");
        write_run(root, "batch", "log--splash2--lu--random--1", "");

        let corpus = discover_runs(root).expect("discover");
        let matched: Vec<&RunFile> = corpus.matching("splash2--fft", "random").collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name.run_id, "1");
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = discover_runs(&temp.path().join("absent")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
