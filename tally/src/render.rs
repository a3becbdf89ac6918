//! Output formats for the analysis reports.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::report::AlgorithmReport;

/// Column header written under each algorithm heading.
pub const TALLY_HEADER: &str = "# executions, total, total (freq), bugs, bugs (freq)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain text, one line per row.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

pub fn render_tally(reports: &[AlgorithmReport], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(tally_text(reports)),
        Format::Json => to_json(reports),
    }
}

/// Pretty JSON with a trailing newline. Non-finite floats become `null`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(value).context("serialize json")?;
    payload.push('\n');
    Ok(payload)
}

fn tally_text(reports: &[AlgorithmReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("# {}\n", report.algorithm));
        out.push_str(TALLY_HEADER);
        out.push('\n');
        for row in &report.rows {
            out.push_str(&format!(
                "{}, {}, {}, {}, {}\n",
                row.executions,
                row.total,
                float_repr(row.total_freq),
                row.bugs,
                float_repr(row.bugs_freq)
            ));
        }
        out.push_str("\n\n");
    }
    out
}

/// Shortest round-trip float text: `1.0`, `0.25`, `1e-05`, `inf`.
///
/// Exponents carry an explicit sign and at least two digits.
pub fn float_repr(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
