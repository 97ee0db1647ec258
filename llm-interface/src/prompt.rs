use personagen_core::{InterestEntry, SentimentTally};
use std::fmt::Write;

/// Upper bound on sample text embedded in the prompt, in characters.
const SAMPLE_BUDGET: usize = 4000;

/// Build the summary prompt from the aggregated persona signals.
///
/// Pure string assembly: identical inputs produce an identical prompt.
pub fn build_persona_prompt(
    username: &str,
    interests: &[InterestEntry],
    sentiment: &SentimentTally,
    samples: &[&str],
) -> String {
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "Based on the following profile of u/{}'s recent Reddit activity, \
         please write a brief, insightful 2-3 sentence user persona summary. \
         Your goal is to capture their personality, tone, and primary \
         interests based *only* on the information provided.",
        username
    );

    let _ = writeln!(prompt, "\nMost active subreddits:");
    if interests.is_empty() {
        let _ = writeln!(prompt, "- (no recent activity)");
    }
    for entry in interests {
        let _ = writeln!(
            prompt,
            "- r/{} ({} recent activities)",
            entry.subreddit, entry.count
        );
    }

    let _ = writeln!(prompt, "\nOverall comment tone: {}", sentiment.overall);

    if !samples.is_empty() {
        let _ = writeln!(prompt, "\nSamples of their writing:");
        let mut remaining = SAMPLE_BUDGET;
        for sample in samples {
            if remaining == 0 {
                break;
            }
            let excerpt: String = sample.chars().take(remaining).collect();
            remaining -= excerpt.chars().count();
            let _ = writeln!(prompt, "---\n{}", excerpt);
        }
        let _ = writeln!(prompt, "---");
    }

    prompt
}
