use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::form::label::derive_label;
use crate::form::render::render_section;
use crate::form::schema::{FORM_LAYOUT, FormEntry, SchemaRow, SectionLayout, section_layout};
use crate::models::{FieldPath, OrientationFlag, Record, Section};
use crate::utils::formatting::bold;

fn schema_rows(layouts: &[&SectionLayout]) -> Vec<SchemaRow> {
    let mut rows = Vec::new();
    for layout in layouts {
        for entry in layout.entries {
            match entry {
                FormEntry::Field { id, label } => rows.push(SchemaRow::new(
                    *id,
                    label.map(str::to_string).unwrap_or_else(|| derive_label(id.ident())),
                )),
                FormEntry::OrientationGrid => {
                    rows.extend(OrientationFlag::ALL.iter().map(|f| SchemaRow {
                        section: layout.section,
                        field: FieldPath::Orientation(*f).to_string(),
                        label: f.display_name().to_string(),
                        kind: "checkbox",
                        rows: None,
                        options: Vec::new(),
                    }));
                }
            }
        }
    }
    rows
}

/// Handle the `fields` command: render the empty form, or dump the schema.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fields { section, json } = cmd {
        let layouts: Vec<&SectionLayout> = match section {
            Some(code) => {
                let s = Section::from_code(code)
                    .ok_or_else(|| AppError::UnknownSection(code.to_string()))?;
                section_layout(s).into_iter().collect()
            }
            None => FORM_LAYOUT.iter().collect(),
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&schema_rows(&layouts))?);
            return Ok(());
        }

        let record = Record::default();
        let blocks: Vec<String> = layouts
            .iter()
            .map(|l| {
                let text = render_section(&record, l);
                match text.split_once('\n') {
                    Some((title, rest)) if cfg.color => format!("{}\n{}", bold(title), rest),
                    _ => text,
                }
            })
            .collect();
        println!("{}", blocks.join("\n\n"));
    }
    Ok(())
}
