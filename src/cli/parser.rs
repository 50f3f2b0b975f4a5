use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTogglReport
/// CLI application to summarize tagged Toggl entries as extra hours
#[derive(Parser)]
#[command(
    name = "rtogglreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize tagged Toggl time entries as weekday/weekend and day/night extra hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Build the extra hours summary
    Report {
        /// JSON array of time entries (Toggl v8 format)
        #[arg(long, value_name = "FILE")]
        entries: String,

        /// JSON object mapping project id to project name
        #[arg(long, value_name = "FILE")]
        projects: Option<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Write to FILE instead of stdout (required for json/csv)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
