//! Report generation: text formatter, preview rendering, clipboard.

pub mod clipboard;
pub mod format;
pub mod preview;

pub use clipboard::{COPIED_MESSAGE, ClipboardSink, SystemClipboard, copy_report};
pub use format::{format_orientation, format_report};
pub use preview::{PreviewStyle, ReportPreview};
