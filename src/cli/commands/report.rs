use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::form::state::build_record;
use crate::report::clipboard::{COPIED_MESSAGE, SystemClipboard, copy_report};
use crate::report::format::format_report;
use crate::report::preview::ReportPreview;
use crate::ui::messages::{success, success_stderr, warning};

/// Build a record from `--set` / `--check`, then preview, copy and export it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        set,
        check,
        plain,
        no_color,
        copy,
        out,
        format,
        force,
    } = cmd
    {
        let record = build_record(set, check)?;
        let text = format_report(&record);

        if *plain {
            println!("{text}");
        } else {
            let mut style = cfg.preview_style();
            if *no_color {
                style.color = false;
            }
            print!("{}", ReportPreview::parse(&text).render(&style));
        }

        if *copy {
            let clipboard = SystemClipboard::new(cfg.clipboard_command.clone());
            match copy_report(&clipboard, &text) {
                // --plain keeps stdout to the exact report text
                Ok(()) if *plain => success_stderr(COPIED_MESSAGE),
                Ok(()) => success(COPIED_MESSAGE),
                Err(msg) => warning(msg),
            }
        }

        if let Some(file) = out {
            let fmt = ExportLogic::resolve_format(*format, file)?;
            ExportLogic::export(&record, fmt, file, *force)?;
        }
    }
    Ok(())
}
