// src/export/logic.rs

use crate::core::logic::Report;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, SummaryExport, notify_export_success};
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;

/// High level export of an aggregated report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file` in `format`.
    ///
    /// Text output is the same summary the CLI prints on stdout.
    pub fn export(
        report: &Report<'_>,
        zone: &str,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if path.is_dir() {
            return Err(AppError::Export(format!(
                "Output path is a directory: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let summary = SummaryExport::build(&report.aggregation, &report.names, zone);
        if summary.projects.is_empty() {
            warning("No tagged entries found, exporting an empty summary.");
        }

        match format {
            ExportFormat::Text => {
                info(format!("Exporting to text: {}", path.display()));
                fs::write(path, report.render())?;
                notify_export_success("Text", path);
            }
            ExportFormat::Json => export_json(&summary, path)?,
            ExportFormat::Csv => export_csv(&summary.rows(), path)?,
        }

        Ok(())
    }
}
