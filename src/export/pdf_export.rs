// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

pub const PDF_TITLE: &str = "End-of-Shift Report (SBAR)";

/// PDF export of the formatted report text.
pub(crate) fn export_pdf(report: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_report(PDF_TITLE, report);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
