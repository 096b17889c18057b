// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod ranking;
pub mod scoring;
pub mod topics;

// Re-export commonly used types
pub use crate::config::{EngagementConfig, ScoringWeights};
pub use crate::core::{AnalysisReport, ContentType, RankedRecord, VideoRecord};

pub use crate::io::loader::{load_video_data, parse_tags, LoadError};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::ranking::rank_by_engagement;
pub use crate::scoring::engagement_score;
pub use crate::topics::suggest_topics;
