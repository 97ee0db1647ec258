use personagen_core::{ConfigError, ErrorExt, LlmError, PersonaError, RedditApiError};

#[test]
fn test_error_codes() {
    let reddit_error = PersonaError::RedditApi(RedditApiError::InvalidToken);
    assert_eq!(reddit_error.error_code(), "REDDIT_API");

    let llm_error = PersonaError::Llm(LlmError::InvalidApiKey {
        provider: "Gemini".to_string(),
    });
    assert_eq!(llm_error.error_code(), "LLM");

    let config_error = PersonaError::Config(ConfigError::MissingEnvironmentVariable {
        var_name: "GOOGLE_API_KEY".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");
}

#[test]
fn test_nested_error_codes() {
    let not_found = RedditApiError::UserNotFound {
        username: "spez".to_string(),
    };
    assert_eq!(not_found.error_code(), "REDDIT_USER_NOT_FOUND");

    let empty = LlmError::EmptyResponse {
        provider: "Gemini".to_string(),
    };
    assert_eq!(empty.error_code(), "LLM_EMPTY_RESPONSE");
}

#[test]
fn test_user_messages() {
    let reddit_error = PersonaError::RedditApi(RedditApiError::InvalidToken);
    let message = reddit_error.user_message();
    assert!(!message.is_empty());
    assert!(message.contains("authentication token is invalid"));

    let not_found = PersonaError::RedditApi(RedditApiError::UserNotFound {
        username: "ghost_user".to_string(),
    });
    assert!(not_found.user_message().contains("u/ghost_user"));

    let config_error = PersonaError::Config(ConfigError::MissingEnvironmentVariable {
        var_name: "REDDIT_CLIENT_ID".to_string(),
    });
    assert!(config_error.user_message().contains("REDDIT_CLIENT_ID"));
}

#[test]
fn test_error_conversions() {
    fn surface(e: RedditApiError) -> PersonaError {
        e.into()
    }

    let err = surface(RedditApiError::RateLimitExceeded { retry_after: 60 });
    assert!(matches!(
        err,
        PersonaError::RedditApi(RedditApiError::RateLimitExceeded { retry_after: 60 })
    ));

    let io_err: PersonaError =
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
    assert_eq!(io_err.error_code(), "IO");
}

#[test]
fn test_display_includes_context() {
    let err = PersonaError::RedditApi(RedditApiError::ServerError { status_code: 503 });
    assert_eq!(err.to_string(), "Reddit API error: Server error: 503");

    let err = PersonaError::Llm(LlmError::RateLimitExceeded {
        provider: "Gemini".to_string(),
        retry_after: 30,
    });
    assert!(err.to_string().contains("Retry after 30 seconds"));
}
