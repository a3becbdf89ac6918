//! Per-algorithm execution/bug reports over a discovered corpus.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::core::execution::{Cursor, ExecutionTable, ScanRules, scan_log};
use crate::core::tally::{TallyRow, tally};
use crate::io::config::TallyConfig;
use crate::io::discover::{Corpus, RunFile};
use crate::io::text::read_lossy;

/// Report section for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: String,
    pub rows: Vec<TallyRow>,
}

/// Build the execution table for one algorithm.
///
/// Benchmarks are visited in the given order and numbering restarts for
/// each, so the Nth execution of every benchmark lands in the same slot.
/// Fails with [`crate::core::execution::Overflow`] when a run pushes the
/// index to the ceiling.
#[instrument(skip(corpus, benchmarks, rules))]
pub fn accumulate(
    corpus: &Corpus,
    algorithm: &str,
    benchmarks: &[String],
    rules: &ScanRules,
) -> Result<ExecutionTable> {
    let mut table = ExecutionTable::new();
    for benchmark in benchmarks {
        let mut cursor = Cursor::start();
        for run in corpus.matching(benchmark, algorithm) {
            let text = read_lossy(&run.path)?;
            cursor = match scan_log(&text, &mut table, cursor, rules) {
                Ok(cursor) => cursor,
                Err(overflow) => {
                    warn!(
                        benchmark = %benchmark,
                        path = %run.path.display(),
                        limit = overflow.limit,
                        "execution ceiling reached"
                    );
                    return Err(overflow.into());
                }
            };
        }
        if let Some(last) = cursor.index() {
            debug!(benchmark = %benchmark, executions = last + 1, "benchmark scanned");
        }
    }
    Ok(table)
}

/// Tally every configured algorithm, in configured order.
///
/// Nothing is returned unless every algorithm succeeds.
pub fn build_report(corpus: &Corpus, config: &TallyConfig) -> Result<Vec<AlgorithmReport>> {
    let rules = config.scan_rules();
    let mut reports = Vec::with_capacity(config.algorithms.len());
    for algorithm in &config.algorithms {
        let table = accumulate(corpus, algorithm, &config.benchmarks, &rules)?;
        let rows = tally(&table);
        info!(algorithm = %algorithm, executions = rows.len(), "algorithm tallied");
        reports.push(AlgorithmReport {
            algorithm: algorithm.clone(),
            rows,
        });
    }
    Ok(reports)
}

/// Runs whose benchmark or algorithm is not in the config.
pub fn unmatched<'a>(corpus: &'a Corpus, config: &TallyConfig) -> Vec<&'a RunFile> {
    corpus
        .runs
        .iter()
        .filter(|run| !config.knows(&run.name.benchmark, &run.name.algorithm))
        .collect()
}

/// Apply the rejection policy for files that contribute nothing.
///
/// By default they are skipped and only logged; `strict` turns the first
/// one into an error.
pub fn check_names(corpus: &Corpus, config: &TallyConfig, strict: bool) -> Result<()> {
    let unmatched = unmatched(corpus, config);
    if strict {
        if let Some(rejected) = corpus.rejected.first() {
            bail!(
                "unrecognized run name {}: {}",
                rejected.path.display(),
                rejected.reason
            );
        }
        if let Some(run) = unmatched.first() {
            bail!(
                "run {} names unknown benchmark {} or algorithm {}",
                run.path.display(),
                run.name.benchmark,
                run.name.algorithm
            );
        }
    }
    for run in &unmatched {
        debug!(path = %run.path.display(), "skipping run outside configured catalogue");
    }
    if !corpus.rejected.is_empty() || !unmatched.is_empty() {
        info!(
            rejected = corpus.rejected.len(),
            unmatched = unmatched.len(),
            "run files skipped"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::execution::Overflow;
    use crate::io::discover::discover_runs;
    use crate::test_support::{execution_log, run_file_name, write_run};

    fn config(algorithms: &[&str], benchmarks: &[&str]) -> TallyConfig {
        TallyConfig {
            algorithms: algorithms.iter().map(|a| a.to_string()).collect(),
            benchmarks: benchmarks.iter().map(|b| b.to_string()).collect(),
            ..TallyConfig::default()
        }
    }

    #[test]
    fn single_run_scenario() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_run(
            temp.path(),
            "batch",
            &run_file_name("radbench--bug1", "pct", "0"),
            &execution_log(&[&["AssertFoo"], &[]]),
        );
        let corpus = discover_runs(temp.path()).expect("discover");
        let reports =
            build_report(&corpus, &config(&["pct"], &["radbench--bug1"])).expect("report");

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].algorithm, "pct");
        let rows: Vec<(usize, usize, f64, usize, f64)> = reports[0]
            .rows
            .iter()
            .map(|r| (r.executions, r.total, r.total_freq, r.bugs, r.bugs_freq))
            .collect();
        assert_eq!(rows, vec![(1, 1, 1.0, 1, 1.0), (2, 1, 2.0, 1, 2.0)]);
    }

    #[test]
    fn files_of_a_benchmark_are_numbered_consecutively() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_run(
            root,
            "a",
            &run_file_name("splash2--fft", "random", "1"),
            &execution_log(&[&["Assert x"], &[]]),
        );
        write_run(
            root,
            "b",
            &run_file_name("splash2--fft", "random", "2"),
            &execution_log(&[&["Assert y"]]),
        );
        let corpus = discover_runs(root).expect("discover");
        let benchmarks = vec!["splash2--fft".to_string()];
        let table =
            accumulate(&corpus, "random", &benchmarks, &ScanRules::default()).expect("table");

        assert_eq!(table.len(), 3);
        assert!(table.get(0).unwrap().contains("Assert x"));
        assert!(table.get(1).unwrap().is_empty());
        assert!(table.get(2).unwrap().contains("Assert y"));
    }

    #[test]
    fn benchmarks_restart_numbering_and_merge_by_index() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_run(
            root,
            "batch",
            &run_file_name("splash2--fft", "pct", "1"),
            &execution_log(&[&["Assert shared"], &["Assert fft"]]),
        );
        write_run(
            root,
            "batch",
            &run_file_name("splash2--lu", "pct", "1"),
            &execution_log(&[&["Assert shared", "Assert lu"]]),
        );
        let corpus = discover_runs(root).expect("discover");
        let cfg = config(&["pct"], &["splash2--fft", "splash2--lu"]);
        let table = accumulate(&corpus, "pct", &cfg.benchmarks, &cfg.scan_rules()).expect("table");

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0).unwrap().len(), 2);
        assert_eq!(table.get(1).unwrap().len(), 1);
    }

    #[test]
    fn algorithms_are_tallied_independently_in_config_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_run(
            root,
            "batch",
            &run_file_name("radbench--bug2", "swarm1", "1"),
            &execution_log(&[&["Assert a"], &["Assert b"], &[]]),
        );
        write_run(
            root,
            "batch",
            &run_file_name("radbench--bug2", "random", "1"),
            &execution_log(&[&[]]),
        );
        let corpus = discover_runs(root).expect("discover");
        let reports = build_report(
            &corpus,
            &config(&["swarm1", "pct", "random"], &["radbench--bug2"]),
        )
        .expect("report");

        let shape: Vec<(&str, usize)> = reports
            .iter()
            .map(|r| (r.algorithm.as_str(), r.rows.len()))
            .collect();
        assert_eq!(shape, vec![("swarm1", 3), ("pct", 0), ("random", 1)]);
        assert_eq!(reports[0].rows[2].bugs, 2);
    }

    #[test]
    fn overflow_aborts_the_whole_report() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_run(
            temp.path(),
            "batch",
            &run_file_name("radbench--bug6", "random", "1"),
            &execution_log(&[&[], &[], &[], &[]]),
        );
        let corpus = discover_runs(temp.path()).expect("discover");
        let mut cfg = config(&["pct", "random"], &["radbench--bug6"]);
        cfg.max_executions = 3;

        let err = build_report(&corpus, &cfg).unwrap_err();
        assert_eq!(err.downcast_ref::<Overflow>(), Some(&Overflow { limit: 3 }));
    }

    #[test]
    fn unreadable_run_propagates_io_error() {
        let corpus = Corpus {
            runs: vec![RunFile {
                path: "/nonexistent/log--radbench--bug1--pct--1".into(),
                name: crate::core::run_name::RunName::parse("log--radbench--bug1--pct--1")
                    .expect("name"),
            }],
            rejected: Vec::new(),
        };
        let err = build_report(&corpus, &config(&["pct"], &["radbench--bug1"])).unwrap_err();
        assert!(err.downcast_ref::<Overflow>().is_none());
        assert!(format!("{err:#}").contains("read /nonexistent"));
    }

    #[test]
    fn unknown_names_are_skipped_unless_strict() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        write_run(root, "batch", "summary.txt", "");
        write_run(
            root,
            "batch",
            &run_file_name("radbench--bug9", "pct", "1"),
            "Assert typo\n",
        );
        let corpus = discover_runs(root).expect("discover");
        let cfg = TallyConfig::default();

        assert_eq!(unmatched(&corpus, &cfg).len(), 1);
        check_names(&corpus, &cfg, false).expect("lenient");
        let err = check_names(&corpus, &cfg, true).unwrap_err();
        assert!(err.to_string().contains("summary.txt"));

        let reports = build_report(&corpus, &cfg).expect("report");
        assert!(reports.iter().all(|r| r.rows.is_empty()));
    }

    #[test]
    fn strict_reports_unknown_benchmark() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_run(
            temp.path(),
            "batch",
            &run_file_name("radbench--bug9", "pct", "1"),
            "",
        );
        let corpus = discover_runs(temp.path()).expect("discover");
        let err = check_names(&corpus, &TallyConfig::default(), true).unwrap_err();
        assert!(err.to_string().contains("radbench--bug9"));
    }
}
