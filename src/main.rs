use anyhow::Result;
use clap::Parser;
use traitmap::cli::{Cli, Commands, OutputFormatArg};
use traitmap::commands::{run_score, ScoreConfig};
use traitmap::io::output::OutputFormat;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            format,
            output,
        } => run_score(ScoreConfig {
            input,
            format: match format {
                OutputFormatArg::Json => OutputFormat::Json,
                OutputFormatArg::Terminal => OutputFormat::Terminal,
            },
            output,
        }),
    }
}
