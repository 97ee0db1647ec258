use personagen_core::{ActivityItem, InterestEntry};
use std::collections::HashMap;
use tracing::debug;

struct SubredditGroup {
    count: usize,
    /// Index into the input slice of the best citation so far.
    citation_idx: usize,
    citation_score: i64,
}

/// Rank subreddits by activity count and pick one citation item each.
///
/// Returns at most `top_k` entries, sorted by count descending with ties
/// broken by subreddit name ascending. The citation for a subreddit is
/// its highest-score item; on equal scores the item seen earliest in the
/// input wins. Empty input yields an empty ranking.
pub fn aggregate(items: &[ActivityItem], top_k: usize) -> Vec<InterestEntry> {
    let mut groups: HashMap<&str, SubredditGroup> = HashMap::new();

    for (idx, item) in items.iter().enumerate() {
        let group = groups
            .entry(item.subreddit.as_str())
            .or_insert(SubredditGroup {
                count: 0,
                citation_idx: idx,
                citation_score: item.score,
            });
        group.count += 1;
        // Strictly greater, so the first-seen item keeps ties.
        if item.score > group.citation_score {
            group.citation_idx = idx;
            group.citation_score = item.score;
        }
    }

    let mut ranked: Vec<(&str, SubredditGroup)> = groups.into_iter().collect();
    ranked.sort_by(|(name_a, a), (name_b, b)| {
        b.count.cmp(&a.count).then_with(|| name_a.cmp(name_b))
    });
    ranked.truncate(top_k);

    debug!(
        "Aggregated {} items into {} ranked interests",
        items.len(),
        ranked.len()
    );

    ranked
        .into_iter()
        .map(|(name, group)| InterestEntry {
            subreddit: name.to_string(),
            count: group.count,
            citation: items[group.citation_idx].clone(),
        })
        .collect()
}
