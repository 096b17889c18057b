use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, searched in the working directory when
/// no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = ".engagemap.toml";

/// Scoring weights configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the per-view like ratio (0.0-1.0)
    #[serde(default = "default_like_weight")]
    pub like: f64,

    /// Weight for the per-view comment ratio (0.0-1.0)
    #[serde(default = "default_comment_weight")]
    pub comment: f64,

    /// Weight for the per-view share ratio (0.0-1.0)
    #[serde(default = "default_share_weight")]
    pub share: f64,

    /// Weight for watch-time density (0.0-1.0)
    #[serde(default = "default_watch_time_weight")]
    pub watch_time: f64,
}

fn default_like_weight() -> f64 {
    0.4
}

fn default_comment_weight() -> f64 {
    0.3
}

fn default_share_weight() -> f64 {
    0.2
}

fn default_watch_time_weight() -> f64 {
    0.1
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            like: default_like_weight(),
            comment: default_comment_weight(),
            share: default_share_weight(),
            watch_time: default_watch_time_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Check if a weight is in valid range
    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    /// Validate that weights are in range and sum to 1.0 (with small
    /// tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        for validation in [
            Self::validate_weight(self.like, "Like"),
            Self::validate_weight(self.comment, "Comment"),
            Self::validate_weight(self.share, "Share"),
            Self::validate_weight(self.watch_time, "Watch time"),
        ] {
            validation?;
        }

        let sum = self.like + self.comment + self.share + self.watch_time;
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Scoring weights must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }

        Ok(())
    }

    /// Normalize weights to ensure they sum to exactly 1.0
    pub fn normalize(&mut self) {
        let sum = self.like + self.comment + self.share + self.watch_time;
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.like /= sum;
            self.comment /= sum;
            self.share /= sum;
            self.watch_time /= sum;
        }
    }
}

/// Analysis configuration. Hoists the pipeline's tunable policy constants
/// (scoring weights, the short/video threshold, the top-N sample size) into
/// one explicit structure passed through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    /// Records shorter than this many seconds classify as shorts
    #[serde(default = "default_short_threshold")]
    pub short_threshold_seconds: u64,

    /// How many top-ranked records feed topic suggestion
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_short_threshold() -> u64 {
    60
}

fn default_top_n() -> usize {
    10
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            short_threshold_seconds: default_short_threshold(),
            top_n: default_top_n(),
        }
    }
}

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str) -> Result<EngagementConfig, String> {
    let mut config = toml::from_str::<EngagementConfig>(contents)
        .map_err(|e| format!("Failed to parse config: {}", e))?;

    if let Err(e) = config.weights.validate() {
        eprintln!("Warning: Invalid scoring weights: {}. Using defaults.", e);
        config.weights = ScoringWeights::default();
    } else {
        config.weights.normalize(); // Ensure exact sum of 1.0
    }

    Ok(config)
}

/// Load configuration. An explicit path must exist and parse; otherwise
/// `.engagemap.toml` in the working directory is tried, and defaults apply
/// when no config file is present.
pub fn load_config(explicit: Option<&Path>) -> Result<EngagementConfig> {
    if let Some(path) = explicit {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = parse_config(&contents).map_err(anyhow::Error::msg)?;
        log::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    match fs::read_to_string(default_path) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                log::debug!("Loaded config from {}", default_path.display());
                Ok(config)
            }
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Ok(EngagementConfig::default())
            }
        },
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    default_path.display(),
                    e
                );
            }
            Ok(EngagementConfig::default())
        }
    }
}
