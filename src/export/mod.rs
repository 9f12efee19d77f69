// src/export/mod.rs

mod fs_utils;
pub mod logic;
mod pdf;
mod pdf_export;
mod text_json;

pub use logic::ExportLogic;

use crate::models::Record;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// JSON export payload: the record as entered plus the exact report text.
#[derive(Serialize, Debug)]
pub struct ReportExport<'a> {
    pub record: &'a Record,
    pub report: &'a str,
}
