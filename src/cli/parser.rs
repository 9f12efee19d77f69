use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftreport
/// CLI application to fill a shift handoff form and produce an SBAR report
#[derive(Parser)]
#[command(
    name = "shiftreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "End-of-shift report generator: fill the SBAR handoff form and copy the formatted report",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing keys")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the form fields and their controls
    Fields {
        /// Only one section (situation, background, assessment, recommendation)
        #[arg(long, short)]
        section: Option<String>,

        /// Dump the field schema as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a report from command-line values
    Report {
        /// Set a text field: PATH=VALUE (e.g. patientName="Jane Doe"); repeatable
        #[arg(long = "set", value_name = "PATH=VALUE")]
        set: Vec<String>,

        /// Tick a checkbox (e.g. fallRisk, orientation.person); repeatable
        #[arg(long = "check", value_name = "PATH")]
        check: Vec<String>,

        /// Print the exact report text instead of the preview
        #[arg(long)]
        plain: bool,

        /// Disable coloured headers in the preview
        #[arg(long = "no-color")]
        no_color: bool,

        /// Copy the report to the clipboard
        #[arg(long)]
        copy: bool,

        /// Write the report to a file (absolute path required)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Export format: txt, json, pdf (default: from file extension)
        #[arg(long, value_name = "FORMAT", requires = "out")]
        format: Option<ExportFormat>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f', requires = "out")]
        force: bool,
    },

    /// Fill the form interactively
    Fill {
        /// Copy the final report to the clipboard on exit
        #[arg(long)]
        copy: bool,
    },
}
