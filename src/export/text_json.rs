// src/export/text_json.rs

use crate::errors::AppResult;
use crate::export::{ReportExport, notify_export_success};
use crate::models::Record;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Plain text: the exact report, newline terminated.
pub(crate) fn export_txt(report: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to TXT: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all(report.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success("TXT", path);
    Ok(())
}

/// JSON pretty-printed.
pub(crate) fn export_json(record: &Record, report: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&ReportExport { record, report })?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
