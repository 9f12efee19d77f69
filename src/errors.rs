//! Unified application error type.
//! All modules (models, form, report, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Form / field errors
    // ---------------------------
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{field}' expects a {expected} value")]
    ValueKind {
        field: String,
        expected: &'static str,
    },

    #[error("Unknown section '{0}': use situation, background, assessment or recommendation")]
    UnknownSection(String),

    #[error("Invalid assignment '{0}': expected PATH=VALUE")]
    InvalidAssignment(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
