use crate::config::{self, EngagementConfig};
use crate::core::{AnalysisReport, VideoRecord};
use crate::io::{self, loader, output};
use crate::{cli, ranking, topics};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub input_path: PathBuf,
    pub config: Option<PathBuf>,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let engagement = config::load_config(config.config.as_deref())?;
    let top_n = config.top.unwrap_or(engagement.top_n);

    let records = loader::load_video_data(&config.input_path)
        .with_context(|| format!("Failed to load {}", config.input_path.display()))?;
    log::info!("Analyzing {} video records", records.len());

    let report = run_pipeline(records, &engagement, top_n);
    write_report(&report, config.format.into(), config.output)
}

/// Score, classify, rank, and aggregate topics. Pure apart from the report
/// timestamp.
pub fn run_pipeline(
    records: Vec<VideoRecord>,
    config: &EngagementConfig,
    top_n: usize,
) -> AnalysisReport {
    let ranked = ranking::rank_by_engagement(records, config);
    let suggested_topics = topics::suggest_topics(&ranked, top_n);
    AnalysisReport {
        generated_at: Utc::now(),
        ranked,
        suggested_topics,
    }
}

fn write_report(
    report: &AnalysisReport,
    format: output::OutputFormat,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let sink: Box<dyn Write> = match output_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    io::ensure_dir(parent)?;
                }
            }
            let file = fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let mut writer = output::create_writer(format, sink);
    writer.write_report(report)
}
