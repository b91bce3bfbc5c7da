//! The `score` command: intake file in, report out.

use anyhow::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::RawRecord;
use crate::errors::ReportError;
use crate::io::output::{create_writer, OutputFormat};
use crate::report::generate_report;

pub struct ScoreConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_score(config: ScoreConfig) -> Result<()> {
    let record = read_intake(&config.input)?;
    let report = generate_report(&record);

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    create_writer(sink, config.format).write_report(&report)
}

fn read_intake(path: &PathBuf) -> Result<RawRecord> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    let record = serde_json::from_str(&content).map_err(|source| ReportError::InvalidIntake {
        path: path.clone(),
        source,
    })?;
    Ok(record)
}
