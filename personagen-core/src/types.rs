use std::fmt;

/// Whether an activity item came in as a submission or a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Post,
    Comment,
}

/// One fetched post or comment, already converted from the wire shape.
/// Immutable for the duration of a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub subreddit: String,
    /// Comment body, or post title joined with the selftext when present.
    pub text: String,
    pub score: i64,
    /// Site-relative permalink, e.g. `/r/rust/comments/abc123/...`.
    pub permalink: String,
    pub kind: ActivityKind,
    pub created_utc: i64,
}

/// A ranked interest: one subreddit, its activity count, and the item
/// quoted as evidence for it.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestEntry {
    pub subreddit: String,
    pub count: usize,
    pub citation: ActivityItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Per-label comment counts plus the majority label.
/// The three counts always sum to the number of comments classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub overall: SentimentLabel,
}

impl Default for SentimentTally {
    fn default() -> Self {
        Self {
            positive: 0,
            negative: 0,
            neutral: 0,
            overall: SentimentLabel::Neutral,
        }
    }
}

/// Everything the report renderer needs for one user.
///
/// `top_interests` is sorted by count descending, ties broken by
/// subreddit name ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaReport {
    pub username: String,
    pub top_interests: Vec<InterestEntry>,
    pub sentiment: SentimentTally,
    pub summary_text: String,
}
