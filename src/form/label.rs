//! Display labels derived from camelCase field identifiers.

use regex::Regex;
use std::sync::LazyLock;

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])").expect("valid uppercase pattern"));

/// `patientName` → "Patient Name", `appointmentsToday` → "Appointments Today".
///
/// A space is inserted before every internal uppercase letter, then the
/// first character is capitalized.
pub fn derive_label(ident: &str) -> String {
    let spaced = UPPERCASE.replace_all(ident, " $1");
    capitalize(spaced.trim_start())
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
