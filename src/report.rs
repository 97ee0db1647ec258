use personagen_core::{PersonaError, PersonaReport};
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

const REDDIT_BASE_URL: &str = "https://www.reddit.com";
const CITATION_EXCERPT_CHARS: usize = 300;

pub fn report_filename(username: &str) -> String {
    format!("{}_persona.txt", username)
}

/// Render the persona report as plain text.
///
/// Pure formatting: identical reports render to byte-identical output,
/// and every section is present even when its data is empty.
pub fn render(report: &PersonaReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "USER PERSONA: u/{}", report.username);
    let _ = writeln!(out, "{}", "=".repeat(30));

    let _ = writeln!(out, "\n## Personality & Tone ##");
    let _ = writeln!(
        out,
        "- Overall Tone: Generally {} ({} positive / {} neutral / {} negative comments)",
        report.sentiment.overall,
        report.sentiment.positive,
        report.sentiment.neutral,
        report.sentiment.negative
    );

    let _ = writeln!(out, "\n## Key Interests (from Subreddit Activity) ##");
    if report.top_interests.is_empty() {
        let _ = writeln!(out, "- Not enough activity to determine key interests.");
    }
    for entry in &report.top_interests {
        let _ = writeln!(
            out,
            "- r/{} (based on {} recent activities)",
            entry.subreddit, entry.count
        );
        let _ = writeln!(out, "  \"{}\"", excerpt(&entry.citation.text));
        let _ = writeln!(out, "  {}{}", REDDIT_BASE_URL, entry.citation.permalink);
    }

    let _ = writeln!(out, "\n## AI-Generated Bio ##");
    let _ = writeln!(out, "{}", report.summary_text);

    out
}

/// Open, write, flush; the handle closes when it drops at scope exit.
pub fn write_report(path: &Path, content: &str) -> Result<(), PersonaError> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Citation quotes are capped on a char boundary so multibyte text
/// cannot split mid-character.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= CITATION_EXCERPT_CHARS {
        return text.to_string();
    }
    let truncated: String = text.chars().take(CITATION_EXCERPT_CHARS).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use personagen_core::{
        ActivityItem, ActivityKind, InterestEntry, SentimentLabel, SentimentTally,
    };

    fn sample_report() -> PersonaReport {
        PersonaReport {
            username: "someone".to_string(),
            top_interests: vec![InterestEntry {
                subreddit: "cats".to_string(),
                count: 2,
                citation: ActivityItem {
                    subreddit: "cats".to_string(),
                    text: "love cats".to_string(),
                    score: 10,
                    permalink: "/r/cats/comments/abc/love_cats/".to_string(),
                    kind: ActivityKind::Comment,
                    created_utc: 1_700_000_000,
                },
            }],
            sentiment: SentimentTally {
                positive: 2,
                negative: 0,
                neutral: 1,
                overall: SentimentLabel::Positive,
            },
            summary_text: "A warm-hearted cat enthusiast.".to_string(),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = sample_report();
        assert_eq!(render(&report), render(&report));
    }

    #[test]
    fn test_render_contains_all_sections() {
        let text = render(&sample_report());
        assert!(text.starts_with("USER PERSONA: u/someone\n"));
        assert!(text.contains("## Personality & Tone ##"));
        assert!(text.contains("Generally Positive (2 positive / 1 neutral / 0 negative comments)"));
        assert!(text.contains("## Key Interests (from Subreddit Activity) ##"));
        assert!(text.contains("- r/cats (based on 2 recent activities)"));
        assert!(text.contains("\"love cats\""));
        assert!(text.contains("https://www.reddit.com/r/cats/comments/abc/love_cats/"));
        assert!(text.contains("## AI-Generated Bio ##"));
        assert!(text.contains("A warm-hearted cat enthusiast."));
    }

    #[test]
    fn test_render_empty_report_keeps_sections() {
        let report = PersonaReport {
            username: "quiet_user".to_string(),
            top_interests: Vec::new(),
            sentiment: SentimentTally::default(),
            summary_text: "No recent public activity was available to summarize.".to_string(),
        };

        let text = render(&report);
        assert!(text.contains("## Personality & Tone ##"));
        assert!(text.contains("Generally Neutral (0 positive / 0 neutral / 0 negative comments)"));
        assert!(text.contains("- Not enough activity to determine key interests."));
        assert!(text.contains("## AI-Generated Bio ##"));
    }

    #[test]
    fn test_long_citations_are_truncated() {
        let mut report = sample_report();
        report.top_interests[0].citation.text = "x".repeat(500);

        let text = render(&report);
        let quoted = format!("\"{}...\"", "x".repeat(CITATION_EXCERPT_CHARS));
        assert!(text.contains(&quoted));
        assert!(!text.contains(&"x".repeat(CITATION_EXCERPT_CHARS + 1)));
    }

    #[test]
    fn test_multibyte_citation_truncation() {
        let mut report = sample_report();
        report.top_interests[0].citation.text = "ねこ".repeat(400);

        // Must not panic on a char boundary.
        let text = render(&report);
        assert!(text.contains("ねこ"));
    }

    #[test]
    fn test_write_report_round_trip() {
        let path = std::env::temp_dir().join("personagen_report_test.txt");
        let content = render(&sample_report());

        write_report(&path, &content).expect("report written");
        let read_back = std::fs::read_to_string(&path).expect("report readable");
        assert_eq!(read_back, content);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename("someone"), "someone_persona.txt");
    }
}
