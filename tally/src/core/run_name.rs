//! Decoding of run log file names.

use thiserror::Error;

/// Separator between file name segments.
pub const DELIMITER: &str = "--";

/// A run log file name decoded into its parts.
///
/// `log--chess--WorkStealQueue--pct--17` decodes to benchmark
/// `chess--WorkStealQueue`, algorithm `pct`, run id `17`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunName {
    /// Leading segment; not interpreted.
    pub prefix: String,
    /// Segments two and three, re-joined with the delimiter.
    pub benchmark: String,
    pub algorithm: String,
    /// Everything after the algorithm, re-joined with the delimiter. May be empty.
    pub run_id: String,
}

/// Why a file name could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("expected at least 4 `--` separated segments, found {found}")]
    TooFewSegments { found: usize },

    #[error("{field} segment is empty")]
    EmptyField { field: &'static str },
}

impl RunName {
    pub fn parse(file_name: &str) -> Result<Self, NameError> {
        let segments: Vec<&str> = file_name.split(DELIMITER).collect();
        if segments.len() < 4 {
            return Err(NameError::TooFewSegments {
                found: segments.len(),
            });
        }
        if segments[1].is_empty() || segments[2].is_empty() {
            return Err(NameError::EmptyField { field: "benchmark" });
        }
        if segments[3].is_empty() {
            return Err(NameError::EmptyField { field: "algorithm" });
        }
        Ok(Self {
            prefix: segments[0].to_string(),
            benchmark: format!("{}{DELIMITER}{}", segments[1], segments[2]),
            algorithm: segments[3].to_string(),
            run_id: segments[4..].join(DELIMITER),
        })
    }

    pub fn matches(&self, benchmark: &str, algorithm: &str) -> bool {
        self.benchmark == benchmark && self.algorithm == algorithm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_benchmark_algorithm_and_run() {
        let name = RunName::parse("log--chess--WorkStealQueue--pct--17").expect("parse");
        assert_eq!(
            name,
            RunName {
                prefix: "log".to_string(),
                benchmark: "chess--WorkStealQueue".to_string(),
                algorithm: "pct".to_string(),
                run_id: "17".to_string(),
            }
        );
        assert!(name.matches("chess--WorkStealQueue", "pct"));
        assert!(!name.matches("chess--WorkStealQueue", "random"));
    }

    #[test]
    fn run_id_keeps_trailing_segments() {
        let name = RunName::parse("out--radbench--bug1--swarm1--3--retry").expect("parse");
        assert_eq!(name.run_id, "3--retry");
    }

    #[test]
    fn four_segments_leave_run_id_empty() {
        let name = RunName::parse("out--splash2--fft--random").expect("parse");
        assert_eq!(name.algorithm, "random");
        assert_eq!(name.run_id, "");
    }

    #[test]
    fn rejects_short_names() {
        assert_eq!(
            RunName::parse("notes.txt"),
            Err(NameError::TooFewSegments { found: 1 })
        );
        assert_eq!(
            RunName::parse("log--chess--pct"),
            Err(NameError::TooFewSegments { found: 3 })
        );
    }

    #[test]
    fn rejects_empty_segments() {
        assert_eq!(
            RunName::parse("log----WorkStealQueue--pct--1"),
            Err(NameError::EmptyField { field: "benchmark" })
        );
        assert_eq!(
            RunName::parse("log--chess--WorkStealQueue----1"),
            Err(NameError::EmptyField { field: "algorithm" })
        );
    }
}
