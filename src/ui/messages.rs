//! Status lines for the terminal. Report text itself is printed elsewhere,
//! these are the icons-and-colour notices around it.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

/// Same as `success`, on stderr, for output that must keep stdout to the report.
pub fn success_stderr<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

/// Warnings go to stderr so piped report text stays clean.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Red.bold().paint(ICON_ERR), msg);
}
