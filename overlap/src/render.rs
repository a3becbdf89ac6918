//! Text and JSON output for overlap counts.

use anyhow::Result;
use serde::Serialize;

use tally::render::{Format, to_json};

use crate::venn::Overlap;

#[derive(Serialize)]
struct OverlapReport<'a> {
    files: [&'a str; 3],
    counts: &'a Overlap,
}

pub fn render_overlap(overlap: &Overlap, names: [&str; 3], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(overlap_text(overlap, names)),
        Format::Json => to_json(&OverlapReport {
            files: names,
            counts: overlap,
        }),
    }
}

fn overlap_text(overlap: &Overlap, [first, second, third]: [&str; 3]) -> String {
    let lines = [
        (format!("In {first}"), overlap.in_first),
        (format!("In {second}"), overlap.in_second),
        (format!("In {third}"), overlap.in_third),
        (format!("Only in {first}"), overlap.only_first),
        (format!("Only in {second}"), overlap.only_second),
        (format!("Only in {third}"), overlap.only_third),
        (format!("Only in {first} and {second}"), overlap.first_second),
        (format!("Only in {first} and {third}"), overlap.first_third),
        (format!("Only in {second} and {third}"), overlap.second_third),
        (
            format!("Only in {first} and {second} and {third}"),
            overlap.all_three,
        ),
    ];
    lines
        .iter()
        .map(|(label, count)| format!("{label}: {count}\n"))
        .collect()
}
