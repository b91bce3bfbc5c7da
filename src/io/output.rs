//! Report writers: JSON for machine consumers, a rendered table for humans.

use chrono::Local;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

use crate::core::ResultRecord;
use crate::report::{INTEREST_CATALOG, TRAIT_CATALOG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, record: &ResultRecord) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        let date = record
            .report_date
            .clone()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
        writeln!(self.writer, "{}", "Psychological Report".bold())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Name: {}", record.name)?;
        writeln!(self.writer, "Age: {}   Sex: {}", record.age, record.sex)?;
        writeln!(self.writer, "Date: {date}")?;
        writeln!(
            self.writer,
            "IQ: {}   Consistency: {}/15",
            record.iq.to_string().bold(),
            record.consistency
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Trait", "Score (1-10)"]);
        for (info, score) in TRAIT_CATALOG.iter().zip(record.trait_scores.iter()) {
            table.add_row(vec![Cell::new(info.name), Cell::new(score)]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    /// The three note sections: operator text wins, catalog text fills the
    /// gaps based on the ranked trait for that slot.
    fn write_notes(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        let sections: [(&str, &[crate::core::RankedScore], &Vec<Option<String>>); 3] = [
            ("Strengths", &record.strengths, &record.strength_notes),
            ("Weaknesses", &record.weaknesses, &record.weakness_notes),
            (
                "Recommendations",
                &record.strengths,
                &record.recommendation_notes,
            ),
        ];
        for (title, ranked, notes) in sections {
            writeln!(self.writer, "{}", title.bold())?;
            for (slot, entry) in ranked.iter().take(3).enumerate() {
                let info = &TRAIT_CATALOG[entry.index];
                let fallback = match title {
                    "Strengths" => info.strength,
                    "Weaknesses" => info.weakness,
                    _ => info.recommendation,
                };
                let text = notes
                    .get(slot)
                    .and_then(Option::as_deref)
                    .unwrap_or(fallback);
                writeln!(self.writer, "  - {}: {}", info.name, text)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_interests(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Vocational Interests".bold())?;
        for entry in &record.interests {
            let info = INTEREST_CATALOG
                .iter()
                .find(|info| info.code == entry.code);
            let name = entry
                .label
                .as_deref()
                .or(info.map(|i| i.name))
                .unwrap_or(entry.code.as_str());
            let description = entry
                .description
                .as_deref()
                .or(info.map(|i| i.description))
                .unwrap_or("");
            writeln!(self.writer, "  - {name} ({}): {description}", entry.code)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        self.write_header(record)?;
        self.write_scores(record)?;
        self.write_notes(record)?;
        self.write_interests(record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InterestEntry, RankedScore};

    fn sample_record() -> ResultRecord {
        ResultRecord {
            name: "Jane Doe".into(),
            age: 20.0,
            sex: "F".into(),
            report_date: Some("2026-01-15".into()),
            iq: 137,
            trait_scores: vec![10, 4, 4, 4, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
            consistency: 15,
            strengths: vec![RankedScore { score: 10, index: 0 }],
            weaknesses: vec![RankedScore { score: 4, index: 1 }],
            interests: vec![InterestEntry {
                code: "ME".into(),
                label: None,
                description: Some("custom".into()),
            }],
            strength_notes: vec![None, None, None],
            weakness_notes: vec![Some("typed note".into()), None, None],
            recommendation_notes: vec![None, None, None],
        }
    }

    #[test]
    fn json_writer_emits_decodable_record() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_record())
            .unwrap();
        let decoded: ResultRecord = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(decoded, sample_record());
    }

    #[test]
    fn terminal_writer_prefers_overrides_over_catalog_text() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&sample_record())
            .unwrap();
        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("typed note"));
        assert!(rendered.contains("Mechanical"));
        assert!(rendered.contains("custom"));
        assert!(rendered.contains("2026-01-15"));
    }
}
