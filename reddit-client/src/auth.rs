use oauth2::basic::BasicClient;
use oauth2::reqwest::async_http_client;
use oauth2::{AuthUrl, ClientId, ClientSecret, TokenResponse, TokenUrl};
use personagen_core::RedditApiError;
use tracing::debug;

const REDDIT_AUTH_URL: &str = "https://www.reddit.com/api/v1/authorize";
const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Application-only OAuth2: exchange the script app's id/secret for a
/// bearer token via the client-credentials grant.
pub(crate) async fn request_app_token(
    client_id: &str,
    client_secret: &str,
) -> Result<String, RedditApiError> {
    let auth_url = AuthUrl::new(REDDIT_AUTH_URL.to_string()).map_err(|e| {
        RedditApiError::AuthenticationFailed {
            reason: format!("invalid auth URL: {e}"),
        }
    })?;
    let token_url = TokenUrl::new(REDDIT_TOKEN_URL.to_string()).map_err(|e| {
        RedditApiError::AuthenticationFailed {
            reason: format!("invalid token URL: {e}"),
        }
    })?;

    let oauth_client = BasicClient::new(
        ClientId::new(client_id.to_string()),
        Some(ClientSecret::new(client_secret.to_string())),
        auth_url,
        Some(token_url),
    );

    let token = oauth_client
        .exchange_client_credentials()
        .request_async(async_http_client)
        .await
        .map_err(|e| RedditApiError::AuthenticationFailed {
            reason: e.to_string(),
        })?;

    debug!("Obtained application-only Reddit access token");
    Ok(token.access_token().secret().clone())
}
