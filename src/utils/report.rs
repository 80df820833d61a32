/// Comparison report formatting
///
/// This module renders the outcome of comparing two file groups as a
/// human-readable report: one diff block per direction, then summary totals.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::comparator::Comparison;

/// Cumulative totals printed at the end of the report
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReportTotals {
    /// Values present on one side only, summed over both blocks
    pub missing: usize,
    /// Values present on both sides with different occurrence counts
    pub diffs: usize,
}

/// Write the comparison report to `out`
///
/// The first block walks the source values in first-seen order and reports
/// count mismatches and values missing from the comparison side; the second
/// block reports comparison values missing from the source side. The
/// missing counter is shared and cumulative across both blocks.
///
/// # Arguments
///
/// * `comparison` - The two frequency mappings to diff
/// * `files` - The source glob, used in headers and summary labels
/// * `compareto` - The comparison glob, used in headers and summary labels
///
/// # Returns
///
/// The totals that were printed in the summary
pub fn write_report<W: Write>(
    comparison: &Comparison,
    files: &str,
    compareto: &str,
    out: &mut W,
) -> Result<ReportTotals> {
    let mut totals = ReportTotals::default();

    writeln!(
        out,
        "{}",
        format!("Differences {} in {}?", files, compareto).yellow().bold()
    )
    .context("Failed to write report")?;

    for (value, source_count) in comparison.source.iter() {
        match comparison.comparison.count(value) {
            Some(comparison_count) if comparison_count != source_count => {
                writeln!(out, "Count - {} - {} - {}", comparison_count, source_count, value)?;
                totals.diffs += 1;
            }
            Some(_) => {}
            None => {
                writeln!(out, "Missing - {}", value)?;
                totals.missing += 1;
            }
        }
    }

    writeln!(out, "{}", "-".repeat(34))?;
    writeln!(
        out,
        "{}",
        format!("Differences {} in {}?", compareto, files).yellow().bold()
    )?;

    for (value, _) in comparison.comparison.iter() {
        if !comparison.source.contains(value) {
            writeln!(out, "Missing - {}", value)?;
            totals.missing += 1;
        }
    }

    writeln!(
        out,
        "{} {}",
        format!("{} Count:", files).green(),
        comparison.source.len()
    )?;
    writeln!(
        out,
        "{} {}",
        format!("{} Count:", compareto).green(),
        comparison.comparison.len()
    )?;
    writeln!(out, "{} {}", "Missing:".green(), totals.missing)?;
    writeln!(out, "{} {}", "Diff:".green(), totals.diffs)?;

    Ok(totals)
}
