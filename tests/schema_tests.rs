mod common;
use common::sample_record;
use shiftreport::form::label::derive_label;
use shiftreport::form::render::{orientation_grid, render_field, render_form, section_controls};
use shiftreport::form::schema::{
    CODE_STATUS_OPTIONS, FORM_LAYOUT, FieldKind, FieldSpec, FormEntry, ISOLATION_OPTIONS,
    ORIENTATION_HEADING, SHIFT_OPTIONS, label_override, section_layout,
};
use shiftreport::models::{FieldId, FieldPath, FieldValue, OrientationFlag, Record, Section};

#[test]
fn test_derive_label_examples() {
    assert_eq!(derive_label("patientName"), "Patient Name");
    assert_eq!(derive_label("appointmentsToday"), "Appointments Today");
    assert_eq!(derive_label("nurse"), "Nurse");
    assert_eq!(derive_label("bowelBladder"), "Bowel Bladder");
    assert_eq!(derive_label("io"), "Io");
    assert_eq!(derive_label(""), "");
}

#[test]
fn test_derive_label_for_every_field() {
    for id in FieldId::ALL {
        let ident = id.ident();
        let label = derive_label(ident);

        assert!(!label.starts_with(' '), "{label:?}");
        assert!(label.chars().next().unwrap().is_uppercase(), "{label:?}");

        // removing the inserted spaces gives back the identifier (first letter aside)
        let squashed: String = label.chars().filter(|c| *c != ' ').collect();
        assert_eq!(squashed.to_lowercase(), ident.to_lowercase());

        let capitals = ident.chars().skip(1).filter(|c| c.is_uppercase()).count();
        assert_eq!(label.matches(' ').count(), capitals, "{label:?}");
    }
}

#[test]
fn test_kind_precedence() {
    assert_eq!(FieldSpec::for_field(FieldId::Date).kind, FieldKind::Date);
    assert_eq!(
        FieldSpec::for_field(FieldId::Shift).kind,
        FieldKind::Select {
            options: SHIFT_OPTIONS
        }
    );
    assert_eq!(
        FieldSpec::for_field(FieldId::CodeStatus).kind,
        FieldKind::Select {
            options: CODE_STATUS_OPTIONS
        }
    );
    assert_eq!(
        FieldSpec::for_field(FieldId::Isolation).kind,
        FieldKind::Select {
            options: ISOLATION_OPTIONS
        }
    );

    for id in [FieldId::FallRisk, FieldId::BedAlarm, FieldId::TransportArranged] {
        assert_eq!(FieldSpec::for_field(id).kind, FieldKind::Checkbox);
    }
    for id in [FieldId::Nurse, FieldId::PatientName, FieldId::Room] {
        assert_eq!(FieldSpec::for_field(id).kind, FieldKind::Text);
    }
}

#[test]
fn test_textarea_rows() {
    assert_eq!(
        FieldSpec::for_field(FieldId::Notes).kind,
        FieldKind::TextArea { rows: 3 }
    );
    for id in [
        FieldId::History,
        FieldId::Diagnosis,
        FieldId::Allergies,
        FieldId::Vitals,
        FieldId::Io,
        FieldId::AppointmentsUpcoming,
    ] {
        assert_eq!(FieldSpec::for_field(id).kind, FieldKind::TextArea { rows: 2 });
    }
}

#[test]
fn test_option_lists() {
    let values = |opts: &[shiftreport::form::schema::SelectOption]| -> Vec<&str> {
        opts.iter().map(|o| o.value).collect()
    };

    assert_eq!(values(SHIFT_OPTIONS), vec!["", "Day", "Evening", "Night"]);
    assert_eq!(SHIFT_OPTIONS[0].label, "Select Shift");
    assert_eq!(
        values(CODE_STATUS_OPTIONS),
        vec!["", "R1", "R2", "R3", "M1", "M2", "C1", "C2"]
    );
    assert_eq!(
        values(ISOLATION_OPTIONS),
        vec!["None", "Contact", "Droplet", "Airborne", "Contact/Droplet", "Other"]
    );
}

#[test]
fn test_layout_covers_every_field_once() {
    let mut seen = Vec::new();
    let mut grids = 0;

    for layout in FORM_LAYOUT {
        for entry in layout.entries {
            match entry {
                FormEntry::Field { id, .. } => {
                    assert_eq!(id.section(), layout.section, "{id} in wrong section");
                    seen.push(*id);
                }
                FormEntry::OrientationGrid => {
                    assert_eq!(layout.section, Section::Assessment);
                    grids += 1;
                }
            }
        }
    }

    assert_eq!(grids, 1);
    assert_eq!(seen.len(), FieldId::ALL.len());
    for id in FieldId::ALL {
        assert_eq!(seen.iter().filter(|s| **s == id).count(), 1, "{id}");
    }

    let order: Vec<Section> = FORM_LAYOUT.iter().map(|l| l.section).collect();
    assert_eq!(order, Section::ALL.to_vec());
}

#[test]
fn test_label_overrides() {
    assert_eq!(label_override(FieldId::Io), Some("Intake / Output"));
    assert_eq!(label_override(FieldId::FallRisk), Some("Falls Risk"));
    assert_eq!(label_override(FieldId::Notes), Some("Additional Notes"));
    assert_eq!(label_override(FieldId::Vitals), None);
}

#[test]
fn test_render_field_labels_and_values() {
    let record = sample_record();

    let c = render_field(&record, FieldPath::Field(FieldId::Vitals), None);
    assert_eq!(c.label, "Vitals");
    assert_eq!(c.value, FieldValue::text("BP 128/76, HR 88, SpO2 94% 2L"));

    let c = render_field(
        &record,
        FieldPath::Field(FieldId::PatientName),
        Some("Patient Name"),
    );
    assert_eq!(c.label, "Patient Name");
    assert_eq!(c.render(), "Patient Name: Jane Doe");

    let c = render_field(&record, FieldPath::Field(FieldId::AppointmentsToday), None);
    assert_eq!(c.label, "Appointments Today");

    let c = render_field(&record, FieldPath::Field(FieldId::FallRisk), Some("Falls Risk"));
    assert!(c.checked());
    assert_eq!(c.render(), "[x] Falls Risk");

    let c = render_field(
        &Record::default(),
        FieldPath::Field(FieldId::Date),
        None,
    );
    assert_eq!(c.render(), "Date:  (YYYY-MM-DD)");
}

#[test]
fn test_render_select_marks_current_option() {
    let c = render_field(&sample_record(), FieldPath::Field(FieldId::Shift), None);
    let out = c.render();
    assert!(out.starts_with("Shift: Night\n"));
    assert!(out.contains("(•) Night"));
    assert!(out.contains("( ) Day"));
}

#[test]
fn test_render_textarea_pads_rows() {
    let c = render_field(&Record::default(), FieldPath::Field(FieldId::Notes), None);
    assert_eq!(c.render(), "Notes:\n    | \n    | \n    | ");
}

#[test]
fn test_orientation_grid_layout() {
    let grid = orientation_grid(&sample_record());
    assert_eq!(grid.len(), 2);

    let paths: Vec<Vec<FieldPath>> = grid
        .iter()
        .map(|row| row.iter().map(|c| c.path).collect())
        .collect();
    assert_eq!(
        paths,
        vec![
            vec![
                FieldPath::Orientation(OrientationFlag::Person),
                FieldPath::Orientation(OrientationFlag::Place)
            ],
            vec![
                FieldPath::Orientation(OrientationFlag::Time),
                FieldPath::Orientation(OrientationFlag::Situation)
            ],
        ]
    );

    assert!(grid[0][0].checked());
    assert!(!grid[1][0].checked());
    assert_eq!(grid[1][1].label, "Situation");
}

#[test]
fn test_section_controls_flatten_grid() {
    let layout = section_layout(Section::Assessment).unwrap();
    let controls = section_controls(&Record::default(), layout);

    assert_eq!(controls.len(), 4 + 7);
    assert_eq!(
        controls[0].path,
        FieldPath::Orientation(OrientationFlag::Person)
    );
    assert_eq!(controls[4].path, FieldPath::Field(FieldId::Vitals));
}

#[test]
fn test_render_form_sections() {
    let out = render_form(&sample_record());

    for title in ["Situation", "Background", "Assessment", "Recommendation"] {
        assert!(out.contains(&format!("{title}\n{}", "=".repeat(title.len()))));
    }
    assert!(out.contains(ORIENTATION_HEADING));
    assert!(out.contains("[x] Person"));
    assert!(out.contains("[ ] Time"));
    assert!(out.contains("[x] Transport Arranged"));
    assert!(out.contains("Intake / Output:\n    | 1200/900"));
}
