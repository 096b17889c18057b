use crate::core::AnalysisReport;
use colored::*;
use comfy_table::Table;
use std::io::Write;

/// How many ranked records the report views show
pub const TOP_DISPLAY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
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
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
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
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let heading = format!("Top {} videos by engagement:", TOP_DISPLAY);
        writeln!(self.writer, "{}", heading.as_str().bold())?;

        let mut table = Table::new();
        table.set_header(vec!["video_id", "title", "engagement_score", "content_type"]);
        for item in report.top(TOP_DISPLAY) {
            table.add_row(vec![
                item.record.video_id.clone(),
                item.record.title.clone(),
                format!("{:.4}", item.engagement_score),
                item.content_type.to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            "Recommended topics to explore based on top videos:".bold()
        )?;
        for topic in &report.suggested_topics {
            writeln!(self.writer, "- {topic}")?;
        }
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
