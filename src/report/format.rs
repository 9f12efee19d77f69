//! SBAR report text.

use crate::models::{OrientationFlags, Record, Section};

pub const HEADER_MARKER: &str = "**";

pub const FALLBACK_NA: &str = "N/A";
pub const FALLBACK_ALLERGIES: &str = "None known";
pub const FALLBACK_NONE: &str = "None";
pub const NOT_ORIENTED: &str = "Not oriented";

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

fn on_off(b: bool) -> &'static str {
    if b { "On" } else { "Off" }
}

pub fn section_header(section: Section) -> String {
    format!("{HEADER_MARKER}{}{HEADER_MARKER}", section.report_title())
}

/// "Person, Time" style summary, fixed enumeration order.
pub fn format_orientation(orientation: &OrientationFlags) -> String {
    let names: Vec<&str> = orientation
        .oriented_to()
        .iter()
        .map(|f| f.display_name())
        .collect();

    if names.is_empty() {
        NOT_ORIENTED.to_string()
    } else {
        names.join(", ")
    }
}

/// Formats a completed record as the end-of-shift report.
///
/// Four sections separated by a blank line, one header line each. The
/// result is trimmed of surrounding whitespace.
pub fn format_report(r: &Record) -> String {
    let situation = [
        section_header(Section::Situation),
        format!(
            "Nurse: {} | Date: {} | Shift: {}",
            r.nurse, r.date, r.shift
        ),
        format!("Patient: {} | Room: {}", r.patient_name, r.room),
        format!("Diagnosis: {}", r.diagnosis),
        format!(
            "Code Status: {} | Allergies: {} | Isolation: {}",
            or(&r.code_status, FALLBACK_NA),
            or(&r.allergies, FALLBACK_ALLERGIES),
            r.isolation
        ),
    ];

    let background = [
        section_header(Section::Background),
        format!("History: {}", or(&r.history, FALLBACK_NA)),
        format!(
            "Fall Risk: {} | Bed Alarm: {}",
            yes_no(r.fall_risk),
            on_off(r.bed_alarm)
        ),
    ];

    let assessment = [
        section_header(Section::Assessment),
        format!("Alert & Oriented To: {}", format_orientation(&r.orientation)),
        format!("Vitals: {}", or(&r.vitals, FALLBACK_NA)),
        format!("Pain: {}", or(&r.pain, FALLBACK_NA)),
        format!("Mobility: {}", or(&r.mobility, FALLBACK_NA)),
        format!("Wounds: {}", or(&r.wounds, FALLBACK_NA)),
        format!("Medications Given/Due: {}", or(&r.meds, FALLBACK_NA)),
        format!("I/O: {}", or(&r.io, FALLBACK_NA)),
        format!("Bowel/Bladder: {}", or(&r.bowel_bladder, FALLBACK_NA)),
    ];

    let recommendation = [
        section_header(Section::Recommendation),
        format!("Tasks/Plan: {}", or(&r.tasks, FALLBACK_NA)),
        format!("PRNs Given/Available: {}", or(&r.prns, FALLBACK_NA)),
        format!(
            "Appointments Today: {}",
            or(&r.appointments_today, FALLBACK_NONE)
        ),
        format!(
            "Upcoming Appointments: {}",
            or(&r.appointments_upcoming, FALLBACK_NONE)
        ),
        format!("Transport Arranged: {}", yes_no(r.transport_arranged)),
        format!("Notes: {}", or(&r.notes, FALLBACK_NONE)),
    ];

    let text = [
        situation.join("\n"),
        background.join("\n"),
        assessment.join("\n"),
        recommendation.join("\n"),
    ]
    .join("\n\n");

    text.trim().to_string()
}
