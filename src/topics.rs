//! Topic suggestion: tag frequency over the top-N ranked records.

use crate::core::RankedRecord;
use std::collections::HashMap;

/// Count tag occurrences across the first `top_n` ranked records and return
/// the distinct tags ordered by frequency descending. Equal frequencies keep
/// first-encountered scan order, tracked explicitly rather than left to map
/// iteration order. `top_n` larger than the collection selects everything;
/// `top_n = 0` yields an empty list.
pub fn suggest_topics(ranked: &[RankedRecord], top_n: usize) -> Vec<String> {
    let selected = &ranked[..ranked.len().min(top_n)];

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for item in selected {
        for tag in &item.record.tags {
            match counts.get_mut(tag) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(tag.clone(), 1);
                    first_seen.push(tag.clone());
                }
            }
        }
    }

    // first_seen is already in scan order; the stable sort keeps that order
    // among tags with equal counts
    let mut tags = first_seen;
    tags.sort_by(|a, b| counts[b.as_str()].cmp(&counts[a.as_str()]));
    tags
}
