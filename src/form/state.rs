//! Form state: immutable record updates and the session that owns the record.

use crate::errors::{AppError, AppResult};
use crate::models::{FieldId, FieldPath, FieldValue, Record};
use crate::utils::date;

/// Returns a copy of `current` with the value at `path` replaced.
///
/// `orientation.<flag>` paths touch only that flag. Checkbox fields take a
/// `Flag`, every other field takes `Text`; no content validation is done.
pub fn apply_change(current: &Record, path: &FieldPath, value: FieldValue) -> AppResult<Record> {
    let mut next = current.clone();

    match (path, value) {
        (FieldPath::Orientation(flag), FieldValue::Flag(b)) => {
            next.orientation = current.orientation.with(*flag, b);
        }
        (FieldPath::Field(id), FieldValue::Flag(b)) => {
            let slot = next.flag_slot_mut(*id).ok_or_else(|| AppError::ValueKind {
                field: path.to_string(),
                expected: "text",
            })?;
            *slot = b;
        }
        (FieldPath::Field(id), FieldValue::Text(s)) => {
            let slot = next.text_slot_mut(*id).ok_or_else(|| AppError::ValueKind {
                field: path.to_string(),
                expected: "boolean",
            })?;
            *slot = s;
        }
        (FieldPath::Orientation(_), FieldValue::Text(_)) => {
            return Err(AppError::ValueKind {
                field: path.to_string(),
                expected: "boolean",
            });
        }
    }

    tracing::trace!(field = %path, "field updated");
    Ok(next)
}

/// Owns the record for one form session and is the single change handler.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    record: Record,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: Record) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn handle_change(&mut self, path: FieldPath, value: FieldValue) -> AppResult<()> {
        self.record = apply_change(&self.record, &path, value)?;
        Ok(())
    }

    /// Hands the current record over by value; the session keeps its copy.
    pub fn submit(&self) -> Record {
        tracing::debug!("form submitted");
        self.record.clone()
    }
}

/// Parses a `PATH=VALUE` command-line assignment.
pub fn parse_assignment(raw: &str) -> AppResult<(FieldPath, String)> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidAssignment(raw.to_string()))?;
    let path: FieldPath = path.parse()?;
    Ok((path, value.to_string()))
}

/// Checkbox answers: y/yes/true/1 and n/no/false/0, any case.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Default record with command-line changes applied in order:
/// every `--set PATH=VALUE`, then every `--check PATH`.
pub fn build_record(sets: &[String], checks: &[String]) -> AppResult<Record> {
    let mut session = FormSession::new();

    for raw in sets {
        let (path, value) = parse_assignment(raw)?;
        let value = match path {
            FieldPath::Field(FieldId::Date) => FieldValue::Text(date::expand_keyword(&value)),
            p if p.is_flag() => FieldValue::Flag(parse_flag(&value).ok_or_else(|| {
                AppError::ValueKind {
                    field: p.to_string(),
                    expected: "boolean (y/n)",
                }
            })?),
            _ => FieldValue::Text(value),
        };
        session.handle_change(path, value)?;
    }

    for raw in checks {
        let path: FieldPath = raw.parse()?;
        session.handle_change(path, FieldValue::Flag(true))?;
    }

    Ok(session.submit())
}
