//! Emitting the validation report.

use fsi_grammar_core::ValidationReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the report as pretty JSON.
pub fn write_report(report: &ValidationReport, path: &Path) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, report)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Log the report: a summary line and one warning per dropped row.
pub fn log_report(report: &ValidationReport) {
    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::debug!(
        notes = report.notes_loaded,
        models = report.models_loaded,
        prefixes = report.prefixes_loaded,
        "Tables loaded"
    );
    tracing::info!(
        "Wrote {} notes ({} rules, {} warnings)",
        report.rows_written,
        report.rules.len(),
        report.warnings.len()
    );
}
