//! Presentation of a formatted report: bold section headers, lines kept.

use crate::report::format::HEADER_MARKER;
use ansi_term::Colour;

pub const PREVIEW_TITLE: &str = "Preview (SBAR Format)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewLine {
    Header(String),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSection {
    pub lines: Vec<PreviewLine>,
}

/// Render options, normally taken from the configuration.
#[derive(Debug, Clone)]
pub struct PreviewStyle {
    pub color: bool,
    /// 0 disables wrapping.
    pub wrap_width: usize,
    pub separator_char: String,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            color: false,
            wrap_width: 0,
            separator_char: "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPreview {
    pub sections: Vec<PreviewSection>,
}

fn parse_line(line: &str) -> PreviewLine {
    let m = HEADER_MARKER.len();
    if line.len() >= 2 * m && line.starts_with(HEADER_MARKER) && line.ends_with(HEADER_MARKER) {
        PreviewLine::Header(line[m..line.len() - m].to_string())
    } else {
        PreviewLine::Text(line.to_string())
    }
}

impl ReportPreview {
    /// Splits report text into sections (blank line) and lines.
    pub fn parse(text: &str) -> Self {
        let sections = text
            .split("\n\n")
            .map(|section| PreviewSection {
                lines: section.split('\n').map(parse_line).collect(),
            })
            .collect();
        Self { sections }
    }

    pub fn headers(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter())
            .filter_map(|l| match l {
                PreviewLine::Header(h) => Some(h.as_str()),
                PreviewLine::Text(_) => None,
            })
            .collect()
    }

    pub fn render(&self, style: &PreviewStyle) -> String {
        let mut out = String::new();

        let title = if style.color {
            Colour::White.bold().paint(PREVIEW_TITLE).to_string()
        } else {
            PREVIEW_TITLE.to_string()
        };
        out.push_str(&title);
        out.push('\n');
        out.push_str(&style.separator_char.repeat(PREVIEW_TITLE.len()));
        out.push('\n');

        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for line in &section.lines {
                match line {
                    PreviewLine::Header(h) => {
                        if style.color {
                            out.push_str(&Colour::Blue.bold().paint(h.as_str()).to_string());
                        } else {
                            out.push_str(h);
                        }
                        out.push('\n');
                    }
                    PreviewLine::Text(t) if style.wrap_width > 0 && !t.is_empty() => {
                        for w in textwrap::wrap(t, style.wrap_width) {
                            out.push_str(&w);
                            out.push('\n');
                        }
                    }
                    PreviewLine::Text(t) => {
                        out.push_str(t);
                        out.push('\n');
                    }
                }
            }
        }

        out
    }
}
