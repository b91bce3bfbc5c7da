use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Machine-readable report record
    Json,
    /// Rendered report for reading in a terminal
    Terminal,
}

#[derive(Parser, Debug)]
#[command(name = "traitmap")]
#[command(about = "Psychometric intake scoring and report generation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an intake record and emit the normalized report
    Score {
        /// Path to the JSON intake file (identity, aptitude, inventory,
        /// manual_overrides)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormatArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
