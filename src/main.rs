mod report;

use analysis_engine::{aggregate, classify};
use clap::Parser;
use llm_interface::{build_persona_prompt, GeminiProvider, SummaryProvider};
use personagen_core::{ActivityKind, AppConfig, ErrorExt, PersonaError, PersonaReport};
use reddit_client::RedditClient;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Newest items fetched per listing, matching the Reddit API maximum
/// for a single page.
const DATA_LIMIT: u32 = 100;
const TOP_INTERESTS: usize = 5;
const MAX_PROMPT_SAMPLES: usize = 2;
const NO_ACTIVITY_SUMMARY: &str = "No recent public activity was available to summarize.";

#[derive(Parser)]
#[command(
    name = "personagen",
    about = "Generate a persona report from a Reddit user's public activity"
)]
struct Cli {
    /// The Reddit username to look up
    username: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "personagen=info,reddit_client=info,llm_interface=info,analysis_engine=info".into()
            }),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli.username).await {
        Ok(path) => {
            println!(
                "All done! The persona has been saved to {}",
                path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.log_error();
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(username: &str) -> Result<PathBuf, PersonaError> {
    let config = AppConfig::from_env()?;

    let mut reddit = RedditClient::new(&config);
    reddit.authenticate().await?;

    let items = reddit.fetch_recent_activity(username, DATA_LIMIT).await?;

    let top_interests = aggregate(&items, TOP_INTERESTS);
    let comments: Vec<_> = items
        .iter()
        .filter(|item| item.kind == ActivityKind::Comment)
        .cloned()
        .collect();
    let sentiment = classify(&comments);

    // A user with zero activity is a valid persona: the report is still
    // written, only the summary request is skipped.
    let summary_text = if items.is_empty() {
        warn!("u/{} has no recent activity to summarize", username);
        NO_ACTIVITY_SUMMARY.to_string()
    } else {
        let samples: Vec<&str> = top_interests
            .iter()
            .take(MAX_PROMPT_SAMPLES)
            .map(|entry| entry.citation.text.as_str())
            .collect();
        let prompt = build_persona_prompt(username, &top_interests, &sentiment, &samples);
        let provider = GeminiProvider::new(&config.google_api_key);
        provider.request_summary(&prompt).await?
    };

    let persona = PersonaReport {
        username: username.to_string(),
        top_interests,
        sentiment,
        summary_text,
    };

    let content = report::render(&persona);
    let path = PathBuf::from(report::report_filename(username));
    report::write_report(&path, &content)?;
    info!("Persona report written to {}", path.display());

    Ok(path)
}
