//! CSV loading for video metadata.
//!
//! The input table carries a fixed column set; the `tags` column packs
//! multiple values into one cell with `|` separators. That separator is a
//! file-format contract shared with existing data files and must not change.

use crate::core::VideoRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "video_id",
    "title",
    "publish_date",
    "duration_seconds",
    "views",
    "likes",
    "comments",
    "shares",
    "watch_time_hours",
    "tags",
];

/// Loader failures. All variants are fatal; the pipeline has no partial
/// recovery.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing required column '{column}' in {path}")]
    MissingColumn { column: String, path: PathBuf },
    #[error("invalid row {line} in {path}: {source}")]
    Row {
        line: u64,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid publish_date '{value}' on row {line} in {path}")]
    Date {
        value: String,
        line: u64,
        path: PathBuf,
    },
}

/// Raw row shape as it appears in the file, before tag splitting and date
/// parsing
#[derive(Debug, Deserialize)]
struct RawVideoRow {
    video_id: String,
    title: String,
    publish_date: String,
    duration_seconds: u64,
    views: u64,
    likes: u64,
    comments: u64,
    shares: u64,
    watch_time_hours: f64,
    #[serde(default)]
    tags: String,
}

/// Split a pipe-separated tag cell into trimmed, non-empty tags. Blank cells
/// yield an empty sequence.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

// Accepts RFC 3339 timestamps, or a bare date taken as midnight UTC
fn parse_publish_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

/// Load video metadata from a CSV file, preserving input row order.
///
/// The header is validated against [`REQUIRED_COLUMNS`] before any row is
/// parsed; a cell that cannot convert to its column type fails the whole
/// load.
pub fn load_video_data(path: &Path) -> Result<Vec<VideoRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Row {
            line: 1,
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawVideoRow>().enumerate() {
        // Header occupies line 1
        let line = index as u64 + 2;
        let raw = row.map_err(|source| LoadError::Row {
            line,
            path: path.to_path_buf(),
            source,
        })?;
        let publish_date =
            parse_publish_date(&raw.publish_date).ok_or_else(|| LoadError::Date {
                value: raw.publish_date.clone(),
                line,
                path: path.to_path_buf(),
            })?;
        records.push(VideoRecord {
            video_id: raw.video_id,
            title: raw.title,
            publish_date,
            duration_seconds: raw.duration_seconds,
            views: raw.views,
            likes: raw.likes,
            comments: raw.comments,
            shares: raw.shares,
            watch_time_hours: raw.watch_time_hours,
            tags: parse_tags(&raw.tags),
        });
    }

    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
