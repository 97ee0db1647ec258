use crate::auth;
use personagen_core::{ActivityItem, ActivityKind, AppConfig, PersonaError, RedditApiError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

const REDDIT_API_BASE: &str = "https://oauth.reddit.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

/// A `t1` listing entry from `/user/{name}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditCommentData {
    pub id: String,
    pub author: String,
    pub body: String,
    pub subreddit: String,
    pub score: i64,
    pub permalink: String,
    pub created_utc: f64,
}

/// A `t3` listing entry from `/user/{name}/submitted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPostData {
    pub id: String,
    pub author: String,
    pub title: String,
    pub selftext: String,
    pub subreddit: String,
    pub score: i64,
    pub permalink: String,
    pub created_utc: f64,
    pub is_self: bool,
}

impl From<RedditCommentData> for ActivityItem {
    fn from(comment: RedditCommentData) -> Self {
        Self {
            subreddit: comment.subreddit,
            text: comment.body,
            score: comment.score,
            permalink: comment.permalink,
            kind: ActivityKind::Comment,
            created_utc: comment.created_utc as i64,
        }
    }
}

impl From<RedditPostData> for ActivityItem {
    fn from(post: RedditPostData) -> Self {
        let text = if post.selftext.trim().is_empty() {
            post.title
        } else {
            format!("{} {}", post.title, post.selftext)
        };
        Self {
            subreddit: post.subreddit,
            text,
            score: post.score,
            permalink: post.permalink,
            kind: ActivityKind::Post,
            created_utc: post.created_utc as i64,
        }
    }
}

/// Fetches a user's recent public activity through the OAuth API.
#[derive(Debug)]
pub struct RedditClient {
    http_client: Client,
    client_id: String,
    client_secret: String,
    access_token: Option<String>,
}

impl RedditClient {
    pub fn new(config: &AppConfig) -> Self {
        let http_client = Client::builder()
            .user_agent(&config.reddit_user_agent)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            access_token: None,
        }
    }

    pub async fn authenticate(&mut self) -> Result<(), PersonaError> {
        let token = auth::request_app_token(&self.client_id, &self.client_secret).await?;
        self.access_token = Some(token);
        info!("Authenticated with Reddit");
        Ok(())
    }

    /// Up to `limit` newest comments followed by up to `limit` newest
    /// submissions, converted to `ActivityItem`s. The comments-then-posts
    /// order is what downstream first-seen tie-breaks observe.
    pub async fn fetch_recent_activity(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ActivityItem>, PersonaError> {
        let comments: RedditListing<RedditCommentData> =
            self.fetch_user_listing(username, "comments", limit).await?;
        let posts: RedditListing<RedditPostData> =
            self.fetch_user_listing(username, "submitted", limit).await?;

        let mut items: Vec<ActivityItem> = Vec::new();
        items.extend(
            comments
                .data
                .children
                .into_iter()
                .map(|child| child.data.into()),
        );
        let comment_count = items.len();
        items.extend(
            posts
                .data
                .children
                .into_iter()
                .map(|child| child.data.into()),
        );

        info!(
            "Found {} recent comments and {} posts for u/{}",
            comment_count,
            items.len() - comment_count,
            username
        );
        Ok(items)
    }

    async fn fetch_user_listing<T: DeserializeOwned>(
        &self,
        username: &str,
        section: &str,
        limit: u32,
    ) -> Result<RedditListing<T>, PersonaError> {
        let access_token = self
            .access_token
            .as_ref()
            .ok_or(RedditApiError::InvalidToken)?;

        let endpoint = format!("/user/{}/{}", username, section);
        let url = format!("{}{}", REDDIT_API_BASE, endpoint);
        let limit_str = limit.to_string();
        let params = [
            ("limit", limit_str.as_str()),
            ("sort", "new"),
            ("raw_json", "1"),
        ];

        info!("Making Reddit API request: GET {}", endpoint);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Network error for GET {}: {}", endpoint, e);
                if e.is_timeout() {
                    PersonaError::RedditApi(RedditApiError::RequestTimeout)
                } else {
                    PersonaError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Request failed with status: {} for {}", status, endpoint);
            let api_error = match status.as_u16() {
                401 => RedditApiError::InvalidToken,
                403 => RedditApiError::Forbidden { resource: endpoint },
                404 => RedditApiError::UserNotFound {
                    username: username.to_string(),
                },
                429 => {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|value| value.to_str().ok())
                        .and_then(|value| value.parse::<u64>().ok())
                        .unwrap_or(60);
                    warn!("Rate limited, retry after {} seconds", retry_after);
                    RedditApiError::RateLimitExceeded { retry_after }
                }
                code if status.is_server_error() => {
                    RedditApiError::ServerError { status_code: code }
                }
                code => RedditApiError::InvalidResponse {
                    details: format!("Unexpected status {} for {}", code, endpoint),
                },
            };
            return Err(api_error.into());
        }

        let listing: RedditListing<T> = response.json().await.map_err(|e| {
            error!("Failed to parse {} listing: {}", section, e);
            PersonaError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("Failed to parse {} listing for u/{}", section, username),
            })
        })?;

        debug!(
            "Retrieved {} {} entries for u/{}",
            listing.data.children.len(),
            section,
            username
        );
        Ok(listing)
    }
}
