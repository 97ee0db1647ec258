use crate::SummaryProvider;
use personagen_core::{LlmError, PersonaError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
const PROVIDER: &str = "Gemini";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Gemini `generateContent` client. One attempt per request, errors
/// surfaced to the caller.
pub struct GeminiProvider {
    http_client: Client,
    endpoint: Url,
}

impl GeminiProvider {
    pub fn new(api_key: &str) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let endpoint = Url::parse_with_params(
            &format!("{}/{}:generateContent", GEMINI_API_BASE, GEMINI_MODEL),
            &[("key", api_key)],
        )
        .expect("Failed to build Gemini endpoint URL");

        Self {
            http_client,
            endpoint,
        }
    }
}

impl SummaryProvider for GeminiProvider {
    async fn request_summary(&self, prompt: &str) -> Result<String, PersonaError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        info!("Requesting persona summary from {}", PROVIDER);
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Network error talking to {}: {}", PROVIDER, e);
                if e.is_timeout() {
                    PersonaError::Llm(LlmError::RequestTimeout {
                        provider: PROVIDER.to_string(),
                    })
                } else {
                    PersonaError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("{} request failed with status: {}", PROVIDER, status);
            let llm_error = match status.as_u16() {
                400 | 401 | 403 => LlmError::InvalidApiKey {
                    provider: PROVIDER.to_string(),
                },
                429 => {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|value| value.to_str().ok())
                        .and_then(|value| value.parse::<u64>().ok())
                        .unwrap_or(60);
                    LlmError::RateLimitExceeded {
                        provider: PROVIDER.to_string(),
                        retry_after,
                    }
                }
                _ if status.is_server_error() => LlmError::ServiceUnavailable {
                    provider: PROVIDER.to_string(),
                },
                _ => LlmError::InvalidResponseFormat {
                    provider: PROVIDER.to_string(),
                },
            };
            return Err(llm_error.into());
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Failed to parse {} response: {}", PROVIDER, e);
            PersonaError::Llm(LlmError::InvalidResponseFormat {
                provider: PROVIDER.to_string(),
            })
        })?;

        let summary = extract_summary(body)?;
        debug!("Received {}-character summary", summary.chars().count());
        Ok(summary)
    }
}

/// First candidate's text parts, concatenated and trimmed. A response
/// with no usable text is an error, not an empty summary.
fn extract_summary(response: GenerateContentResponse) -> Result<String, LlmError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LlmError::EmptyResponse {
            provider: PROVIDER.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_summary_from_response() {
        let payload = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [{"text": "  A thoughtful cat enthusiast. "}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ]
        }"#;

        let response: GenerateContentResponse =
            serde_json::from_str(payload).expect("response parses");
        let summary = extract_summary(response).expect("summary present");
        assert_eq!(summary, "A thoughtful cat enthusiast.");
    }

    #[test]
    fn test_multiple_parts_are_concatenated() {
        let payload = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [{"text": "First."}, {"text": " Second."}]
                    }
                }
            ]
        }"#;

        let response: GenerateContentResponse =
            serde_json::from_str(payload).expect("response parses");
        assert_eq!(
            extract_summary(response).expect("summary present"),
            "First. Second."
        );
    }

    #[test]
    fn test_no_candidates_is_empty_response() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).expect("response parses");
        assert!(matches!(
            extract_summary(response),
            Err(LlmError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn test_whitespace_only_text_is_empty_response() {
        let payload = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "   "}]}}
            ]
        }"#;

        let response: GenerateContentResponse =
            serde_json::from_str(payload).expect("response parses");
        assert!(matches!(
            extract_summary(response),
            Err(LlmError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn test_missing_candidates_field_is_empty_response() {
        let response: GenerateContentResponse =
            serde_json::from_str("{}").expect("response parses");
        assert!(matches!(
            extract_summary(response),
            Err(LlmError::EmptyResponse { .. })
        ));
    }
}
