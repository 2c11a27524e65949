use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::error::ScanError;
use crate::scanner::ScanReport;

pub const REPORT_TITLE: &str = "EDI Problem Record Report";
pub const NO_PROBLEMS_LINE: &str = "No problematic records detected.";

/// Render the plain-text report file contents
pub fn render_report(report: &ScanReport) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(REPORT_TITLE.len()));
    out.push_str("\n\n");

    if !report.has_problems() {
        out.push_str(NO_PROBLEMS_LINE);
        out.push('\n');
        return out;
    }

    for entry in &report.flagged {
        // Writing into a String cannot fail
        let _ = writeln!(out, "Record #{}", entry.index);
        let _ = writeln!(out, "PO Value: {}", entry.po_value);
        out.push_str("Record Lines:\n");
        for line in entry.record.lines() {
            let _ = writeln!(out, "  {line}");
        }
        out.push('\n');
    }

    out
}

/// Write the report to `path` in one call.
///
/// The report is rendered fully in memory first so a failed write never
/// leaves behind a half-built report from this run.
pub async fn write_report(path: &Path, report: &ScanReport) -> Result<(), ScanError> {
    let contents = render_report(report);

    tokio::fs::write(path, contents).await.map_err(|e| {
        warn!("Failed to write report {}: {}", path.display(), e);
        ScanError::output(path, e)
    })?;

    info!(
        "Wrote report with {} flagged records to {}",
        report.flagged.len(),
        path.display()
    );
    Ok(())
}

/// Render the console listing of flagged records plus a summary line
pub fn render_console(report: &ScanReport) -> String {
    let mut out = String::new();

    for entry in &report.flagged {
        let rules = entry
            .rules
            .iter()
            .map(|r| r.name())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "WARNING: Record #{} has problematic PO value '{}' ({})",
            entry.index, entry.po_value, rules
        );
        for line in entry.record.lines() {
            let _ = writeln!(out, "    {line}");
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Scan complete: {} of {} records flagged.",
        report.flagged.len(),
        report.records_scanned
    );
    out
}

/// Render the scan outcome as pretty JSON
pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
