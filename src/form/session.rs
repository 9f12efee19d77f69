//! Interactive terminal form: prompts every control, then loops on a
//! preview / edit / copy menu while keeping the record.

use crate::errors::AppResult;
use crate::form::render::{Control, render_field, section_controls};
use crate::form::schema::{FORM_LAYOUT, FieldKind, ORIENTATION_HEADING, label_override};
use crate::form::state::{FormSession, parse_flag};
use crate::models::{FieldPath, FieldValue, Record};
use crate::export::ExportLogic;
use crate::report::clipboard::{COPIED_MESSAGE, ClipboardSink, copy_report};
use crate::report::format::format_report;
use crate::report::preview::{PreviewStyle, ReportPreview};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::io::{BufRead, Write};

/// Answer that empties a text, text area or select field.
pub const CLEAR_TOKEN: &str = "-";

pub const MENU: &str = "[p] preview  [e <field>] edit  [f] fill again  [c] copy  [w <file>] write  [q] quit";

/// Terminal I/O for one interactive session.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    eof: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            eof: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, msg: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.output, "{}", msg.as_ref())?;
        Ok(())
    }

    /// One line without its terminator; `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> AppResult<Option<String>> {
        if self.eof {
            return Ok(None);
        }
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts for one control. `None` keeps the current value.
    pub fn prompt_control(&mut self, control: &Control) -> AppResult<Option<FieldValue>> {
        match control.kind {
            FieldKind::Text => self.prompt_text(control),
            FieldKind::Date => {
                let answer = self.prompt_text(control)?;
                Ok(answer.map(|v| match v {
                    FieldValue::Text(t) => FieldValue::Text(date::expand_keyword(&t)),
                    other => other,
                }))
            }
            FieldKind::TextArea { rows } => self.prompt_textarea(control, rows),
            FieldKind::Select { options } => {
                self.say(format!("{} (current: {})", control.label, control.text()))?;
                for (i, o) in options.iter().enumerate() {
                    self.say(format!("  {}) {}", i + 1, o.label))?;
                }
                let answer = match self.ask("  choice (number or text, empty keeps, - clears): ")? {
                    Some(a) if !a.trim().is_empty() => a,
                    _ => return Ok(None),
                };
                if answer.trim() == CLEAR_TOKEN {
                    return Ok(Some(FieldValue::Text(String::new())));
                }
                let picked = answer
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|n| options.get(n));
                match picked {
                    Some(o) => Ok(Some(FieldValue::text(o.value))),
                    None => Ok(Some(FieldValue::Text(answer))),
                }
            }
            FieldKind::Checkbox => {
                let hint = if control.checked() { "Y/n" } else { "y/N" };
                loop {
                    let answer = match self.ask(&format!("{} [{}]: ", control.label, hint))? {
                        Some(a) => a,
                        None => return Ok(None),
                    };
                    if answer.trim().is_empty() {
                        return Ok(None);
                    }
                    match parse_flag(&answer) {
                        Some(b) => return Ok(Some(FieldValue::Flag(b))),
                        None => self.say("  please answer y or n")?,
                    }
                }
            }
        }
    }

    fn prompt_text(&mut self, control: &Control) -> AppResult<Option<FieldValue>> {
        let prompt = if control.text().is_empty() {
            format!("{}: ", control.label)
        } else {
            format!("{} [{}] (- clears): ", control.label, control.text())
        };
        match self.ask(&prompt)? {
            Some(a) if a.trim() == CLEAR_TOKEN => Ok(Some(FieldValue::Text(String::new()))),
            Some(a) if !a.is_empty() => Ok(Some(FieldValue::Text(a))),
            _ => Ok(None),
        }
    }

    /// Reads lines until the first blank one.
    fn prompt_textarea(&mut self, control: &Control, rows: u8) -> AppResult<Option<FieldValue>> {
        let current = if control.text().is_empty() {
            String::new()
        } else {
            format!(" [{}]", control.text().replace('\n', " / "))
        };
        self.say(format!(
            "{}{} ({} lines, blank line ends, - alone clears):",
            control.label, current, rows
        ))?;

        let mut lines: Vec<String> = Vec::new();
        while let Some(line) = self.ask("  > ")? {
            if line.is_empty() {
                break;
            }
            if lines.is_empty() && line.trim() == CLEAR_TOKEN {
                return Ok(Some(FieldValue::Text(String::new())));
            }
            lines.push(line);
        }

        if lines.is_empty() {
            Ok(None)
        } else {
            Ok(Some(FieldValue::Text(lines.join("\n"))))
        }
    }
}

/// Walks the whole form once, section by section.
pub fn fill_form<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut FormSession,
) -> AppResult<()> {
    for layout in FORM_LAYOUT {
        prompter.say("")?;
        prompter.say(format!("== {} ==", layout.section.title()))?;

        let mut grid_announced = false;
        for control in section_controls(session.record(), layout) {
            if matches!(control.path, FieldPath::Orientation(_)) && !grid_announced {
                prompter.say(ORIENTATION_HEADING)?;
                grid_announced = true;
            }
            if let Some(value) = prompter.prompt_control(&control)? {
                session.handle_change(control.path, value)?;
            }
        }
    }
    Ok(())
}

fn edit_field<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut FormSession,
    raw_path: &str,
) -> AppResult<()> {
    let path: FieldPath = match raw_path.parse() {
        Ok(p) => p,
        Err(e) => {
            prompter.say(format!("  {e}"))?;
            return Ok(());
        }
    };
    let label = match path {
        FieldPath::Field(id) => label_override(id),
        FieldPath::Orientation(_) => None,
    };
    let control = render_field(session.record(), path, label);
    if let Some(value) = prompter.prompt_control(&control)? {
        session.handle_change(path, value)?;
    }
    Ok(())
}

/// Writes the current report to `file` in the format its extension names.
/// An existing file is only replaced after a yes on the prompter.
fn write_report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &FormSession,
    file: &str,
) -> AppResult<()> {
    let format = ExportLogic::resolve_format(None, file)?;
    let path = expand_tilde(file);

    if path.exists() {
        let answer = prompter.ask(&format!("  '{}' exists, overwrite? [y/N]: ", path.display()))?;
        if answer.as_deref().and_then(parse_flag) != Some(true) {
            prompter.say("  report not written")?;
            return Ok(());
        }
    }

    ExportLogic::export(&session.submit(), format, file, true)?;
    prompter.say(format!("Report written to {}", path.display()))
}

/// Full interactive session. Returns the final record.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    clipboard: &dyn ClipboardSink,
    style: &PreviewStyle,
) -> AppResult<Record> {
    let mut session = FormSession::new();

    prompter.say("End-of-Shift Report Generator")?;
    fill_form(prompter, &mut session)?;

    let show_preview = |p: &mut Prompter<R, W>, s: &FormSession| -> AppResult<()> {
        let text = format_report(&s.submit());
        p.say("")?;
        p.say(ReportPreview::parse(&text).render(style))
    };

    show_preview(prompter, &session)?;

    loop {
        prompter.say(MENU)?;
        let line = match prompter.ask("> ")? {
            Some(l) => l,
            None => break,
        };
        let line = line.trim();
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "p" | "preview" => show_preview(prompter, &session)?,
            "f" | "fill" => {
                fill_form(prompter, &mut session)?;
                show_preview(prompter, &session)?;
            }
            "e" | "edit" => {
                let path = if arg.is_empty() {
                    match prompter.ask("  field: ")? {
                        Some(p) => p,
                        None => break,
                    }
                } else {
                    arg.to_string()
                };
                edit_field(prompter, &mut session, path.trim())?;
            }
            "c" | "copy" => {
                let text = format_report(&session.submit());
                match copy_report(clipboard, &text) {
                    Ok(()) => prompter.say(COPIED_MESSAGE)?,
                    Err(msg) => prompter.say(msg)?,
                }
            }
            "w" | "write" => {
                if arg.is_empty() {
                    prompter.say("  usage: w <file>")?;
                    continue;
                }
                // a failed write leaves the session and its record intact
                if let Err(e) = write_report(prompter, &session, arg) {
                    tracing::warn!(error = %e, file = arg, "report not written");
                    prompter.say(format!("  could not write the report: {e}"))?;
                }
            }
            "q" | "quit" => break,
            other => prompter.say(format!("  unknown command '{other}'"))?,
        }
    }

    Ok(session.submit())
}
