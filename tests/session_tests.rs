mod common;
use common::sample_record;
use shiftreport::form::session::{Prompter, run_session};
use shiftreport::models::Record;
use shiftreport::report::ClipboardSink;
use shiftreport::report::format_report;
use shiftreport::report::preview::PreviewStyle;
use shiftreport::utils::date::today_string;
use std::cell::RefCell;
use std::io::{self, Cursor};

/// Clipboard double that records every write.
#[derive(Default)]
struct RecordingClipboard {
    writes: RefCell<Vec<String>>,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&self, text: &str) -> io::Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn write_text(&self, _text: &str) -> io::Result<()> {
        Err(io::Error::other("no display"))
    }
}

/// Answers for every prompt of one full pass over the form, matching `sample_record()`.
fn sample_answers() -> Vec<&'static str> {
    vec![
        // Situation
        "Alex RN",
        "2025-03-14",
        "4",
        "Jane Doe",
        "12B",
        "Community-acquired pneumonia",
        "",
        "2",
        "Penicillin",
        "",
        "3",
        // Background
        "COPD, HTN",
        "",
        "maybe",
        "y",
        "yes",
        // Assessment: orientation grid
        "y",
        "y",
        "n",
        "y",
        // Assessment: text areas
        "BP 128/76, HR 88, SpO2 94% 2L",
        "",
        "3/10 chest wall",
        "",
        "Assist x1 with walker",
        "",
        "Sacral stage 1",
        "",
        "Ceftriaxone 2200",
        "",
        "1200/900",
        "",
        "Continent, BM today",
        "",
        // Recommendation
        "Repeat CXR in AM",
        "",
        "Acetaminophen 1900",
        "",
        "PT 1400",
        "",
        "Pulm clinic Friday",
        "",
        "y",
        "Daughter is primary contact",
        "",
    ]
}

fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut s = lines.join("\n");
    s.push('\n');
    Cursor::new(s.into_bytes())
}

fn run(lines: &[&str], clipboard: &dyn ClipboardSink) -> (Record, String) {
    let mut prompter = Prompter::new(script(lines), Vec::new());
    let record = run_session(&mut prompter, clipboard, &PreviewStyle::default()).unwrap();
    let output = String::from_utf8(prompter.into_output()).unwrap();
    (record, output)
}

#[test]
fn test_full_session_copy_and_edit() {
    let mut lines = sample_answers();
    lines.extend(["c", "e notes", "Family visiting", "", "c", "q"]);

    let clipboard = RecordingClipboard::default();
    let (record, output) = run(&lines, &clipboard);

    let mut expected = sample_record();
    expected.notes = "Family visiting".into();
    assert_eq!(record, expected);

    let writes = clipboard.writes.borrow();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], format_report(&sample_record()));
    assert_eq!(writes[1], format_report(&expected));

    assert!(output.starts_with("End-of-Shift Report Generator\n"));
    assert!(output.contains("== Situation =="));
    assert!(output.contains("Alert and Oriented To:"));
    assert!(output.contains("  please answer y or n"));
    assert!(output.contains("Preview (SBAR Format)"));
    assert_eq!(output.matches("Report copied to clipboard.").count(), 2);
}

#[test]
fn test_input_ending_early_keeps_defaults() {
    let clipboard = RecordingClipboard::default();
    let (record, output) = run(&["Sam"], &clipboard);

    let expected = Record {
        nurse: "Sam".into(),
        ..Record::default()
    };
    assert_eq!(record, expected);
    assert!(output.contains("Notes: None"));
    assert!(clipboard.writes.borrow().is_empty());
}

#[test]
fn test_clipboard_failure_is_reported_not_fatal() {
    let mut lines = sample_answers();
    lines.extend(["c", "q"]);

    let (record, output) = run(&lines, &BrokenClipboard);

    assert_eq!(record, sample_record());
    assert!(output.contains("Could not copy the report to the clipboard: no display"));
    assert!(!output.contains("Report copied to clipboard."));
}

#[test]
fn test_select_accepts_free_text_and_date_keyword() {
    let lines = ["Sam", "today", "Swing", "", "", "", "", "", "7"];
    let (record, _) = run(&lines, &RecordingClipboard::default());

    assert_eq!(record.date, today_string());
    assert_eq!(record.shift, "Swing");
    // out-of-range number is kept as text
    assert_eq!(record.isolation, "7");
    assert_eq!(record.code_status, "");
}

#[test]
fn test_menu_edits_orientation_and_rejects_bad_input() {
    // one empty answer per control keeps every default
    let mut lines: Vec<&str> = vec![""; 29];
    lines.extend([
        "e orientation.time",
        "y",
        "e mood",
        "dance",
        "w",
        "q",
    ]);

    let (record, output) = run(&lines, &RecordingClipboard::default());

    assert!(record.orientation.time);
    assert!(!record.orientation.person);
    assert!(output.contains("Unknown field"));
    assert!(output.contains("  unknown command 'dance'"));
    assert!(output.contains("  usage: w <file>"));
}

#[test]
fn test_write_command_saves_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("handoff.txt");
    let write_cmd = format!("w {}", file.display());

    let mut lines: Vec<&str> = sample_answers();
    lines.push(&write_cmd);
    lines.push("q");

    let (_, output) = run(&lines, &RecordingClipboard::default());

    let saved = std::fs::read_to_string(&file).unwrap();
    assert_eq!(saved, format!("{}\n", format_report(&sample_record())));
    assert!(output.contains("Report written to"));
}

#[test]
fn test_failed_write_keeps_session_going() {
    let mut lines = sample_answers();
    lines.extend([
        "w /nonexistent_shiftreport_dir/handoff.txt",
        "w handoff.txt",
        "e room",
        "14C",
        "q",
    ]);

    let (record, output) = run(&lines, &RecordingClipboard::default());

    let mut expected = sample_record();
    expected.room = "14C".into();
    assert_eq!(record, expected);
    assert_eq!(output.matches("  could not write the report: ").count(), 2);
    assert!(output.contains("must be absolute"));
    assert!(!output.contains("Report written to"));
}

#[test]
fn test_write_asks_before_overwriting() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("handoff.txt");
    std::fs::write(&file, "old").unwrap();
    let write_cmd = format!("w {}", file.display());

    let mut lines: Vec<&str> = sample_answers();
    lines.extend([write_cmd.as_str(), "n", "q"]);
    let (_, output) = run(&lines, &RecordingClipboard::default());

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "old");
    assert!(output.contains("exists, overwrite? [y/N]"));
    assert!(output.contains("  report not written"));

    let mut lines: Vec<&str> = sample_answers();
    lines.extend([write_cmd.as_str(), "y", "q"]);
    let (_, output) = run(&lines, &RecordingClipboard::default());

    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        format!("{}\n", format_report(&sample_record()))
    );
    assert!(output.contains("Report written to"));
}

#[test]
fn test_dash_clears_filled_fields() {
    let mut lines = sample_answers();
    lines.extend([
        "e nurse", "-", "e notes", "-", "e shift", "-", "e allergies", "", "q",
    ]);

    let (record, output) = run(&lines, &RecordingClipboard::default());

    assert_eq!(record.nurse, "");
    assert_eq!(record.notes, "");
    assert_eq!(record.shift, "");
    // an empty answer still keeps the value
    assert_eq!(record.allergies, "Penicillin");
    assert!(output.contains("Nurse [Alex RN] (- clears): "));

    let text = format_report(&record);
    assert!(text.ends_with("Notes: None"));
    assert!(text.contains("Nurse:  | Date: 2025-03-14 | Shift: \n"));
}
