//! Engagement scoring: a weighted sum of per-view ratios and watch-time
//! density.

use crate::config::ScoringWeights;
use crate::core::VideoRecord;

/// Compute the engagement score for a single record.
///
/// Ratios normalize by view count so popular and niche content stay
/// comparable; the weights encode a business priority ordering (likes >
/// comments > shares > watch-time density). Zero views and zero duration
/// are floored to 1 in the denominators only, the stored record is never
/// mutated.
pub fn engagement_score(record: &VideoRecord, weights: &ScoringWeights) -> f64 {
    let views = record.views.max(1) as f64;
    let duration = record.duration_seconds.max(1) as f64;

    let like_ratio = record.likes as f64 / views;
    let comment_ratio = record.comments as f64 / views;
    let share_ratio = record.shares as f64 / views;
    let watch_time_ratio = record.watch_time_hours * 3600.0 / duration;

    weights.like * like_ratio
        + weights.comment * comment_ratio
        + weights.share * share_ratio
        + weights.watch_time * watch_time_ratio
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn record(views: u64, likes: u64, comments: u64, shares: u64, watch: f64, dur: u64) -> VideoRecord {
        VideoRecord {
            video_id: "v1".to_string(),
            title: "test".to_string(),
            publish_date: Utc::now(),
            duration_seconds: dur,
            views,
            likes,
            comments,
            shares,
            watch_time_hours: watch,
            tags: vec![],
        }
    }

    #[test]
    fn test_known_score() {
        // 0.4*0.2 + 0.3*0.05 + 0.2*0.01 + 0.1*(0.5*3600/120)
        let r = record(100, 20, 5, 1, 0.5, 120);
        let score = engagement_score(&r, &ScoringWeights::default());
        assert!((score - 1.597).abs() < 1e-9);
    }

    #[test]
    fn test_zero_views_floors_denominator() {
        let r = record(0, 3, 0, 0, 0.0, 120);
        let score = engagement_score(&r, &ScoringWeights::default());
        // likes / max(0, 1) = 3, weighted by 0.4
        assert!(score.is_finite());
        assert!((score - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_floors_denominator() {
        let r = record(10, 0, 0, 0, 1.0, 0);
        let score = engagement_score(&r, &ScoringWeights::default());
        assert!(score.is_finite());
        assert!((score - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_scorer_is_idempotent() {
        let r = record(1234, 56, 7, 8, 9.5, 301);
        let weights = ScoringWeights::default();
        assert_eq!(engagement_score(&r, &weights), engagement_score(&r, &weights));
    }

    proptest! {
        #[test]
        fn score_is_non_negative(
            views in 0u64..10_000_000,
            likes in 0u64..10_000_000,
            comments in 0u64..10_000_000,
            shares in 0u64..10_000_000,
            watch in 0.0f64..100_000.0,
            dur in 0u64..1_000_000,
        ) {
            let r = record(views, likes, comments, shares, watch, dur);
            let score = engagement_score(&r, &ScoringWeights::default());
            prop_assert!(score >= 0.0);
            prop_assert!(score.is_finite());
        }
    }
}
