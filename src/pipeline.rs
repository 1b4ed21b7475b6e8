//! Read, merge, render.
//!
//! Both documents are loaded fully before the merge starts. Output is only
//! written once every earlier step has succeeded.

use std::io::Write;

use radar_fill::FillReport;
use tracing::info;

use crate::config::MergeSettings;
use crate::document::{load_document, render_document};
use crate::error::MergeError;

/// Run one merge pass and write the merged document to `out`.
pub fn run<W: Write>(settings: &MergeSettings, out: &mut W) -> Result<FillReport, MergeError> {
    let radar = load_document(&settings.inputs.radar)?;
    let notes = load_document(&settings.inputs.notes)?;

    let (merged, report) = radar_fill::merge(radar, &notes)?;
    let rendered = render_document(&merged, settings.output.indent)?;

    writeln!(out, "{}", rendered).map_err(|e| MergeError::Output(e.to_string()))?;
    out.flush().map_err(|e| MergeError::Output(e.to_string()))?;

    info!(
        tracks_added = report.tracks_added,
        entries_inserted = report.entries_inserted,
        entries_skipped = report.entries_skipped(),
        "merge complete"
    );

    Ok(report)
}
