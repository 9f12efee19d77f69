//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-aligns `s` to `width` terminal columns.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Wraps every line of `text` to `width` columns, keeping blank lines.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            if line.is_empty() || width == 0 {
                vec![line.to_string()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|c| c.into_owned())
                    .collect()
            }
        })
        .collect()
}
