use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes a configuration
/// file with default values. An existing file is left untouched.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing shiftreport…");
    println!("📄 Config file : {}", cfg.path.display());

    if cli.test {
        info("Test mode: configuration file not written.");
        return Ok(());
    }

    if cfg.path.exists() {
        info("Configuration file already exists, keeping it.");
        return Ok(());
    }

    cfg.save()?;
    success(format!("Configuration written to {}", cfg.path.display()));
    Ok(())
}
