//! Ranking: attach derived fields and order records by engagement score.

use crate::config::EngagementConfig;
use crate::core::{ContentType, RankedRecord, VideoRecord};
use crate::scoring;

/// Score and classify every record, then sort by engagement score
/// descending. The sort is stable, so records with equal scores keep their
/// input order.
pub fn rank_by_engagement(
    records: Vec<VideoRecord>,
    config: &EngagementConfig,
) -> Vec<RankedRecord> {
    let mut ranked: Vec<RankedRecord> = records
        .into_iter()
        .map(|record| {
            let engagement_score = scoring::engagement_score(&record, &config.weights);
            let content_type =
                ContentType::classify(record.duration_seconds, config.short_threshold_seconds);
            RankedRecord {
                record,
                engagement_score,
                content_type,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.engagement_score.total_cmp(&a.engagement_score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, views: u64, likes: u64, dur: u64) -> VideoRecord {
        VideoRecord {
            video_id: id.to_string(),
            title: id.to_string(),
            publish_date: Utc::now(),
            duration_seconds: dur,
            views,
            likes,
            comments: 0,
            shares: 0,
            watch_time_hours: 0.0,
            tags: vec![],
        }
    }

    #[test]
    fn test_ranking_is_descending() {
        let records = vec![
            record("low", 100, 1, 120),
            record("high", 100, 90, 120),
            record("mid", 100, 40, 120),
        ];
        let ranked = rank_by_engagement(records, &EngagementConfig::default());

        let ids: Vec<&str> = ranked.iter().map(|r| r.record.video_id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].engagement_score >= pair[1].engagement_score);
        }
    }

    #[test]
    fn test_equal_scores_preserve_input_order() {
        let records = vec![
            record("first", 100, 10, 120),
            record("second", 100, 10, 120),
            record("third", 100, 10, 120),
        ];
        let ranked = rank_by_engagement(records, &EngagementConfig::default());

        let ids: Vec<&str> = ranked.iter().map(|r| r.record.video_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_content_type_attached_during_ranking() {
        let records = vec![record("a", 10, 1, 59), record("b", 10, 1, 60)];
        let ranked = rank_by_engagement(records, &EngagementConfig::default());

        let by_id = |id: &str| {
            ranked
                .iter()
                .find(|r| r.record.video_id == id)
                .unwrap()
                .content_type
        };
        assert_eq!(by_id("a"), ContentType::Short);
        assert_eq!(by_id("b"), ContentType::Video);
    }

    #[test]
    fn test_empty_input_yields_empty_ranking() {
        let ranked = rank_by_engagement(vec![], &EngagementConfig::default());
        assert!(ranked.is_empty());
    }
}
