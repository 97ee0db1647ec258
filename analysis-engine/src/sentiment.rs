use personagen_core::{ActivityItem, SentimentLabel, SentimentTally};
use tracing::debug;

/// Dead-zone thresholds around zero, the VADER lexicon's documented
/// convention for the compound score.
const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Classify a user's comments into an overall sentiment tally.
///
/// Each comment body is scored with the VADER compound polarity in
/// [-1, 1] and bucketed with a symmetric dead-zone around zero. The
/// overall label is the one with the highest count; equal top counts
/// resolve in the order Positive > Neutral > Negative. An empty input
/// yields an all-zero Neutral tally.
pub fn classify(comments: &[ActivityItem]) -> SentimentTally {
    if comments.is_empty() {
        return SentimentTally::default();
    }

    let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
    let tally = tally_scores(comments.iter().map(|comment| {
        analyzer
            .polarity_scores(&comment.text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }));

    debug!(
        "Classified {} comments: {} positive, {} negative, {} neutral",
        comments.len(),
        tally.positive,
        tally.negative,
        tally.neutral
    );
    tally
}

fn label_for(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn tally_scores(scores: impl Iterator<Item = f64>) -> SentimentTally {
    let mut tally = SentimentTally::default();

    for score in scores {
        match label_for(score) {
            SentimentLabel::Positive => tally.positive += 1,
            SentimentLabel::Negative => tally.negative += 1,
            SentimentLabel::Neutral => tally.neutral += 1,
        }
    }

    if tally.positive + tally.negative + tally.neutral == 0 {
        return tally;
    }

    // Strictly-greater scan over a fixed priority order, so equal top
    // counts resolve Positive > Neutral > Negative.
    let ordered = [
        (tally.positive, SentimentLabel::Positive),
        (tally.neutral, SentimentLabel::Neutral),
        (tally.negative, SentimentLabel::Negative),
    ];
    let (mut best_count, mut best_label) = ordered[0];
    for (count, label) in ordered {
        if count > best_count {
            best_count = count;
            best_label = label;
        }
    }
    tally.overall = best_label;

    tally
}
