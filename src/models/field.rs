use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four SBAR sections, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Situation,
    Background,
    Assessment,
    Recommendation,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Situation,
        Section::Background,
        Section::Assessment,
        Section::Recommendation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Situation => "Situation",
            Section::Background => "Background",
            Section::Assessment => "Assessment",
            Section::Recommendation => "Recommendation",
        }
    }

    /// Upper-case title used between the report header markers.
    pub fn report_title(&self) -> &'static str {
        match self {
            Section::Situation => "SITUATION",
            Section::Background => "BACKGROUND",
            Section::Assessment => "ASSESSMENT",
            Section::Recommendation => "RECOMMENDATION",
        }
    }

    /// Helper: convert input code from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "situation" | "s" => Some(Section::Situation),
            "background" | "b" => Some(Section::Background),
            "assessment" | "a" => Some(Section::Assessment),
            "recommendation" | "r" => Some(Section::Recommendation),
            _ => None,
        }
    }
}

/// Top-level scalar fields of a shift record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldId {
    // Situation
    Nurse,
    Date,
    Shift,
    PatientName,
    Room,
    Diagnosis,
    CodeStatus,
    Allergies,
    Isolation,
    // Background
    History,
    FallRisk,
    BedAlarm,
    // Assessment
    Vitals,
    Pain,
    Mobility,
    Wounds,
    Meds,
    Io,
    BowelBladder,
    // Recommendation
    Tasks,
    Prns,
    AppointmentsToday,
    AppointmentsUpcoming,
    TransportArranged,
    Notes,
}

impl FieldId {
    pub const ALL: [FieldId; 25] = [
        FieldId::Nurse,
        FieldId::Date,
        FieldId::Shift,
        FieldId::PatientName,
        FieldId::Room,
        FieldId::Diagnosis,
        FieldId::CodeStatus,
        FieldId::Allergies,
        FieldId::Isolation,
        FieldId::History,
        FieldId::FallRisk,
        FieldId::BedAlarm,
        FieldId::Vitals,
        FieldId::Pain,
        FieldId::Mobility,
        FieldId::Wounds,
        FieldId::Meds,
        FieldId::Io,
        FieldId::BowelBladder,
        FieldId::Tasks,
        FieldId::Prns,
        FieldId::AppointmentsToday,
        FieldId::AppointmentsUpcoming,
        FieldId::TransportArranged,
        FieldId::Notes,
    ];

    /// camelCase identifier, as used in field paths and JSON keys.
    pub fn ident(&self) -> &'static str {
        match self {
            FieldId::Nurse => "nurse",
            FieldId::Date => "date",
            FieldId::Shift => "shift",
            FieldId::PatientName => "patientName",
            FieldId::Room => "room",
            FieldId::Diagnosis => "diagnosis",
            FieldId::CodeStatus => "codeStatus",
            FieldId::Allergies => "allergies",
            FieldId::Isolation => "isolation",
            FieldId::History => "history",
            FieldId::FallRisk => "fallRisk",
            FieldId::BedAlarm => "bedAlarm",
            FieldId::Vitals => "vitals",
            FieldId::Pain => "pain",
            FieldId::Mobility => "mobility",
            FieldId::Wounds => "wounds",
            FieldId::Meds => "meds",
            FieldId::Io => "io",
            FieldId::BowelBladder => "bowelBladder",
            FieldId::Tasks => "tasks",
            FieldId::Prns => "prns",
            FieldId::AppointmentsToday => "appointmentsToday",
            FieldId::AppointmentsUpcoming => "appointmentsUpcoming",
            FieldId::TransportArranged => "transportArranged",
            FieldId::Notes => "notes",
        }
    }

    pub fn from_ident(s: &str) -> Option<Self> {
        FieldId::ALL.iter().copied().find(|f| f.ident() == s)
    }

    pub fn section(&self) -> Section {
        use FieldId::*;
        match self {
            Nurse | Date | Shift | PatientName | Room | Diagnosis | CodeStatus | Allergies
            | Isolation => Section::Situation,
            History | FallRisk | BedAlarm => Section::Background,
            Vitals | Pain | Mobility | Wounds | Meds | Io | BowelBladder => Section::Assessment,
            Tasks | Prns | AppointmentsToday | AppointmentsUpcoming | TransportArranged | Notes => {
                Section::Recommendation
            }
        }
    }

    /// Boolean-valued fields render as checkboxes.
    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            FieldId::FallRisk | FieldId::BedAlarm | FieldId::TransportArranged
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

/// Alert & oriented checklist items, in fixed enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrientationFlag {
    Person,
    Place,
    Time,
    Situation,
}

impl OrientationFlag {
    pub const ALL: [OrientationFlag; 4] = [
        OrientationFlag::Person,
        OrientationFlag::Place,
        OrientationFlag::Time,
        OrientationFlag::Situation,
    ];

    pub fn ident(&self) -> &'static str {
        match self {
            OrientationFlag::Person => "person",
            OrientationFlag::Place => "place",
            OrientationFlag::Time => "time",
            OrientationFlag::Situation => "situation",
        }
    }

    /// Capitalized name used in labels and in the report summary.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrientationFlag::Person => "Person",
            OrientationFlag::Place => "Place",
            OrientationFlag::Time => "Time",
            OrientationFlag::Situation => "Situation",
        }
    }

    pub fn from_ident(s: &str) -> Option<Self> {
        OrientationFlag::ALL.iter().copied().find(|f| f.ident() == s)
    }
}

pub const ORIENTATION_PREFIX: &str = "orientation.";

/// Address of a single editable value: a top-level field or one orientation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Field(FieldId),
    Orientation(OrientationFlag),
}

impl FieldPath {
    pub fn is_flag(&self) -> bool {
        match self {
            FieldPath::Field(id) => id.is_flag(),
            FieldPath::Orientation(_) => true,
        }
    }
}

impl FromStr for FieldPath {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if let Some(flag) = s.strip_prefix(ORIENTATION_PREFIX) {
            return OrientationFlag::from_ident(flag)
                .map(FieldPath::Orientation)
                .ok_or_else(|| AppError::UnknownField(s.to_string()));
        }
        FieldId::from_ident(s)
            .map(FieldPath::Field)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Field(id) => f.write_str(id.ident()),
            FieldPath::Orientation(flag) => write!(f, "{}{}", ORIENTATION_PREFIX, flag.ident()),
        }
    }
}

/// New value carried by a change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }
}
