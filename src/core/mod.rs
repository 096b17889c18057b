pub mod types;

pub use types::{AnalysisReport, ContentType, RankedRecord, VideoRecord};
