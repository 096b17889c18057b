//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content classification derived solely from duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Short,
    Video,
}

impl ContentType {
    /// Classify a record by duration. Durations under the threshold are
    /// shorts, everything else is a regular video.
    pub fn classify(duration_seconds: u64, short_threshold_seconds: u64) -> Self {
        if duration_seconds < short_threshold_seconds {
            ContentType::Short
        } else {
            ContentType::Video
        }
    }

    /// Get the display name for this content type
    pub fn display_name(&self) -> &str {
        match self {
            ContentType::Short => "short",
            ContentType::Video => "video",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of input data. Immutable once loaded; the fields derived during
/// analysis live on [`RankedRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub publish_date: DateTime<Utc>,
    pub duration_seconds: u64,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub watch_time_hours: f64,
    pub tags: Vec<String>,
}

/// A record with its derived engagement score and content type attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecord {
    #[serde(flatten)]
    pub record: VideoRecord,
    pub engagement_score: f64,
    pub content_type: ContentType,
}

/// Full analysis output: every record in rank order plus the topics
/// suggested from the top performers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub ranked: Vec<RankedRecord>,
    pub suggested_topics: Vec<String>,
}

impl AnalysisReport {
    /// The first `n` ranked records, or all of them if fewer exist
    pub fn top(&self, n: usize) -> &[RankedRecord] {
        &self.ranked[..self.ranked.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_below_threshold_is_short() {
        assert_eq!(ContentType::classify(59, 60), ContentType::Short);
        assert_eq!(ContentType::classify(0, 60), ContentType::Short);
    }

    #[test]
    fn test_classify_at_threshold_is_video() {
        // The threshold is exclusive: exactly 60 seconds is a video
        assert_eq!(ContentType::classify(60, 60), ContentType::Video);
        assert_eq!(ContentType::classify(3600, 60), ContentType::Video);
    }

    #[test]
    fn test_content_type_display() {
        assert_eq!(ContentType::Short.to_string(), "short");
        assert_eq!(ContentType::Video.to_string(), "video");
    }

    #[test]
    fn test_report_top_clamps_to_length() {
        let report = AnalysisReport {
            generated_at: Utc::now(),
            ranked: vec![],
            suggested_topics: vec![],
        };
        assert!(report.top(10).is_empty());
    }
}
