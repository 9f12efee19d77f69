use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::form::session::{Prompter, run_session};
use crate::report::clipboard::{COPIED_MESSAGE, SystemClipboard, copy_report};
use crate::report::format::format_report;
use crate::ui::messages::{success, warning};
use std::io;

/// Interactive form on stdin/stdout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fill { copy } = cmd {
        let clipboard = SystemClipboard::new(cfg.clipboard_command.clone());
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());

        let record = run_session(&mut prompter, &clipboard, &cfg.preview_style())?;

        if *copy {
            match copy_report(&clipboard, &format_report(&record)) {
                Ok(()) => success(COPIED_MESSAGE),
                Err(msg) => warning(msg),
            }
        }
    }
    Ok(())
}
