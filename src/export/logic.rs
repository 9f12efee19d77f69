// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::pdf_export::export_pdf;
use crate::export::text_json::{export_json, export_txt};
use crate::models::Record;
use crate::report::format::format_report;
use crate::utils::path::expand_tilde;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the report for `record` to `file`.
    ///
    /// - `format`: txt | json | pdf
    /// - `file`: output path, absolute once `~` is expanded
    /// - `force`: overwrite without asking
    pub fn export(record: &Record, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let report = format_report(record);
        tracing::debug!(format = format.as_str(), path = %path.display(), "exporting report");

        match format {
            ExportFormat::Txt => export_txt(&report, &path)?,
            ExportFormat::Json => export_json(record, &report, &path)?,
            ExportFormat::Pdf => export_pdf(&report, &path)?,
        }

        Ok(())
    }

    /// Format from an explicit flag or, failing that, the file extension.
    pub fn resolve_format(explicit: Option<ExportFormat>, file: &str) -> AppResult<ExportFormat> {
        if let Some(f) = explicit {
            return Ok(f);
        }
        let ext = expand_tilde(file)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "txt" | "" => Ok(ExportFormat::Txt),
            "json" => Ok(ExportFormat::Json),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}
