use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ExportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "neurofocus",
    about = "ADHD self-assessment screeners with clinician-style reports",
    version
)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, env = "NEUROFOCUS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Directory holding screening history (overrides the configured one)
    #[arg(long, global = true, env = "NEUROFOCUS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available screeners
    List,
    /// Take a screener and print the result
    Take(TakeArgs),
    /// Show previously completed screeners
    History,
    /// Read about ADHD assessment; lists the modules when no id is given
    Learn {
        /// Module id (see `neurofocus learn`)
        id: Option<String>,
    },
    /// Show or update the saved configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct TakeArgs {
    /// Screener id (see `neurofocus list`)
    pub screener: String,

    /// Comma-separated answers in question order, 0 (Never) to 4 (Very Often).
    /// Missing trailing answers count as Never. Prompts interactively when omitted.
    #[arg(long, value_delimiter = ',')]
    pub answers: Option<Vec<u8>>,

    /// Write a report to this path
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Report format (defaults to the configured one)
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Do not add this result to history
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Persist a history directory
    #[arg(long)]
    pub set_data_dir: Option<PathBuf>,

    /// Persist a default report format
    #[arg(long, value_enum)]
    pub set_export_format: Option<ExportFormat>,
}
