//! Builds controls from the schema and renders them as terminal text.

use crate::form::label::derive_label;
use crate::form::schema::{
    FORM_LAYOUT, FieldKind, FieldSpec, FormEntry, ORIENTATION_COLUMNS, ORIENTATION_HEADING,
    SectionLayout,
};
use crate::models::{FieldPath, FieldValue, OrientationFlag, Record};
use crate::utils::formatting::pad_display;

/// A rendered input: the value it shows and the path its changes go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub path: FieldPath,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
}

impl Control {
    pub fn checked(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Terminal rendering of this control.
    pub fn render(&self) -> String {
        match self.kind {
            FieldKind::Text => format!("{}: {}", self.label, self.text()),
            FieldKind::Date => format!("{}: {} (YYYY-MM-DD)", self.label, self.text()),
            FieldKind::Checkbox => {
                let mark = if self.checked() { "x" } else { " " };
                format!("[{}] {}", mark, self.label)
            }
            FieldKind::Select { options } => {
                let choices: Vec<String> = options
                    .iter()
                    .map(|o| {
                        let mark = if o.value == self.text() { "(•)" } else { "( )" };
                        format!("{} {}", mark, o.label)
                    })
                    .collect();
                format!("{}: {}\n    {}", self.label, self.text(), choices.join("  "))
            }
            FieldKind::TextArea { rows } => {
                let mut lines: Vec<&str> = self.text().lines().collect();
                while lines.len() < rows as usize {
                    lines.push("");
                }
                let body: Vec<String> = lines.iter().map(|l| format!("    | {l}")).collect();
                format!("{}:\n{}", self.label, body.join("\n"))
            }
        }
    }
}

/// Control for a field path, pre-populated from `record`.
///
/// Without a label override the label is derived from the identifier;
/// orientation flags use their capitalized name.
pub fn render_field(record: &Record, path: FieldPath, label: Option<&str>) -> Control {
    match path {
        FieldPath::Field(id) => {
            let spec = FieldSpec::for_field(id);
            Control {
                path,
                label: label
                    .map(str::to_string)
                    .unwrap_or_else(|| derive_label(id.ident())),
                kind: spec.kind,
                value: record.value(id),
            }
        }
        FieldPath::Orientation(flag) => Control {
            path,
            label: label
                .map(str::to_string)
                .unwrap_or_else(|| flag.display_name().to_string()),
            kind: FieldKind::Checkbox,
            value: FieldValue::Flag(record.orientation.get(flag)),
        },
    }
}

/// The four orientation checkboxes, two per row.
pub fn orientation_grid(record: &Record) -> Vec<Vec<Control>> {
    let controls: Vec<Control> = OrientationFlag::ALL
        .iter()
        .map(|f| render_field(record, FieldPath::Orientation(*f), None))
        .collect();
    controls
        .chunks(ORIENTATION_COLUMNS)
        .map(|row| row.to_vec())
        .collect()
}

pub fn render_orientation_grid(record: &Record) -> String {
    let grid = orientation_grid(record);
    let cells: Vec<String> = grid.iter().flatten().map(Control::render).collect();
    let width = cells
        .iter()
        .map(|c| unicode_width::UnicodeWidthStr::width(c.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::from(ORIENTATION_HEADING);
    for row in &grid {
        out.push('\n');
        let rendered: Vec<String> = row
            .iter()
            .map(|c| pad_display(&c.render(), width))
            .collect();
        out.push_str("  ");
        out.push_str(rendered.join("   ").trim_end());
    }
    out
}

/// Controls for one section, in layout order (orientation grid flattened).
pub fn section_controls(record: &Record, layout: &SectionLayout) -> Vec<Control> {
    let mut out = Vec::new();
    for entry in layout.entries {
        match entry {
            FormEntry::Field { id, label } => {
                out.push(render_field(record, FieldPath::Field(*id), *label));
            }
            FormEntry::OrientationGrid => {
                out.extend(orientation_grid(record).into_iter().flatten());
            }
        }
    }
    out
}

pub fn render_section(record: &Record, layout: &SectionLayout) -> String {
    let title = layout.section.title();
    let mut out = format!("{}\n{}", title, "=".repeat(title.len()));
    for entry in layout.entries {
        out.push('\n');
        match entry {
            FormEntry::Field { id, label } => {
                out.push_str(&render_field(record, FieldPath::Field(*id), *label).render());
            }
            FormEntry::OrientationGrid => out.push_str(&render_orientation_grid(record)),
        }
    }
    out
}

/// Whole form, all sections.
pub fn render_form(record: &Record) -> String {
    FORM_LAYOUT
        .iter()
        .map(|l| render_section(record, l))
        .collect::<Vec<_>>()
        .join("\n\n")
}
