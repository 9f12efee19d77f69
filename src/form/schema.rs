//! Field schema: which control each field gets, and how the form is laid out.

use crate::models::{FieldId, Section};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const SHIFT_OPTIONS: &[SelectOption] = &[
    opt("", "Select Shift"),
    opt("Day", "Day"),
    opt("Evening", "Evening"),
    opt("Night", "Night"),
];

pub const CODE_STATUS_OPTIONS: &[SelectOption] = &[
    opt("", "Select Code Status"),
    opt("R1", "R1"),
    opt("R2", "R2"),
    opt("R3", "R3"),
    opt("M1", "M1"),
    opt("M2", "M2"),
    opt("C1", "C1"),
    opt("C2", "C2"),
];

pub const ISOLATION_OPTIONS: &[SelectOption] = &[
    opt("None", "None"),
    opt("Contact", "Contact"),
    opt("Droplet", "Droplet"),
    opt("Airborne", "Airborne"),
    opt("Contact/Droplet", "Contact/Droplet"),
    opt("Other", "Other"),
];

/// Fields rendered as multi-line text areas.
pub const LONG_TEXT_FIELDS: &[FieldId] = &[
    FieldId::History,
    FieldId::Diagnosis,
    FieldId::Allergies,
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
    FieldId::Notes,
];

pub const NOTES_ROWS: u8 = 3;
pub const TEXTAREA_ROWS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea { rows: u8 },
    Select { options: &'static [SelectOption] },
    Checkbox,
    Date,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextArea { .. } => "textarea",
            FieldKind::Select { .. } => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Lookup by identifier. First matching rule wins:
    /// date, shift, code status, isolation, boolean, long text, plain text.
    pub fn for_field(id: FieldId) -> Self {
        let kind = match id {
            FieldId::Date => FieldKind::Date,
            FieldId::Shift => FieldKind::Select {
                options: SHIFT_OPTIONS,
            },
            FieldId::CodeStatus => FieldKind::Select {
                options: CODE_STATUS_OPTIONS,
            },
            FieldId::Isolation => FieldKind::Select {
                options: ISOLATION_OPTIONS,
            },
            f if f.is_flag() => FieldKind::Checkbox,
            f if LONG_TEXT_FIELDS.contains(&f) => FieldKind::TextArea {
                rows: if f == FieldId::Notes {
                    NOTES_ROWS
                } else {
                    TEXTAREA_ROWS
                },
            },
            _ => FieldKind::Text,
        };
        Self { id, kind }
    }
}

/// One slot of the form layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEntry {
    Field {
        id: FieldId,
        label: Option<&'static str>,
    },
    OrientationGrid,
}

const fn field(id: FieldId) -> FormEntry {
    FormEntry::Field { id, label: None }
}

const fn labeled(id: FieldId, label: &'static str) -> FormEntry {
    FormEntry::Field {
        id,
        label: Some(label),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionLayout {
    pub section: Section,
    pub entries: &'static [FormEntry],
}

pub const ORIENTATION_HEADING: &str = "Alert and Oriented To:";
pub const ORIENTATION_COLUMNS: usize = 2;

pub const FORM_LAYOUT: &[SectionLayout] = &[
    SectionLayout {
        section: Section::Situation,
        entries: &[
            field(FieldId::Nurse),
            field(FieldId::Date),
            field(FieldId::Shift),
            labeled(FieldId::PatientName, "Patient Name"),
            field(FieldId::Room),
            field(FieldId::Diagnosis),
            labeled(FieldId::CodeStatus, "Code Status"),
            field(FieldId::Allergies),
            field(FieldId::Isolation),
        ],
    },
    SectionLayout {
        section: Section::Background,
        entries: &[
            labeled(FieldId::History, "Brief History"),
            labeled(FieldId::FallRisk, "Falls Risk"),
            labeled(FieldId::BedAlarm, "Bed Alarm On"),
        ],
    },
    SectionLayout {
        section: Section::Assessment,
        entries: &[
            FormEntry::OrientationGrid,
            field(FieldId::Vitals),
            field(FieldId::Pain),
            field(FieldId::Mobility),
            field(FieldId::Wounds),
            labeled(FieldId::Meds, "Medications Given/Due"),
            labeled(FieldId::Io, "Intake / Output"),
            labeled(FieldId::BowelBladder, "Bowel / Bladder"),
        ],
    },
    SectionLayout {
        section: Section::Recommendation,
        entries: &[
            labeled(FieldId::Tasks, "Tasks/Plan"),
            labeled(FieldId::Prns, "PRNs Given/Available"),
            labeled(FieldId::AppointmentsToday, "Appointments Today"),
            labeled(FieldId::AppointmentsUpcoming, "Upcoming Appointments"),
            labeled(FieldId::TransportArranged, "Transport Arranged"),
            labeled(FieldId::Notes, "Additional Notes"),
        ],
    },
];

pub fn section_layout(section: Section) -> Option<&'static SectionLayout> {
    FORM_LAYOUT.iter().find(|l| l.section == section)
}

/// Label override from the layout, if the field has one.
pub fn label_override(id: FieldId) -> Option<&'static str> {
    FORM_LAYOUT
        .iter()
        .flat_map(|l| l.entries.iter())
        .find_map(|e| match e {
            FormEntry::Field { id: fid, label } if *fid == id => *label,
            _ => None,
        })
}

/// Flat schema row, used by `fields --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaRow {
    pub section: Section,
    pub field: String,
    pub label: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
}

impl SchemaRow {
    pub fn new(id: FieldId, label: String) -> Self {
        let spec = FieldSpec::for_field(id);
        let (rows, options) = match spec.kind {
            FieldKind::TextArea { rows } => (Some(rows), Vec::new()),
            FieldKind::Select { options } => (None, options.iter().map(|o| o.value).collect()),
            _ => (None, Vec::new()),
        };
        Self {
            section: id.section(),
            field: id.ident().to_string(),
            label,
            kind: spec.kind.name(),
            rows,
            options,
        }
    }
}
