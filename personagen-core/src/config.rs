use crate::error::ConfigError;
use tracing::debug;

pub const REDDIT_CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
pub const REDDIT_CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
pub const REDDIT_USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// All external-service credentials, collected once at startup.
/// Construction fails on the first missing or blank variable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub google_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A .env file in the working directory is optional.
        dotenvy::dotenv().ok();

        let config = Self {
            reddit_client_id: required_var(REDDIT_CLIENT_ID_VAR)?,
            reddit_client_secret: required_var(REDDIT_CLIENT_SECRET_VAR)?,
            reddit_user_agent: required_var(REDDIT_USER_AGENT_VAR)?,
            google_api_key: required_var(GOOGLE_API_KEY_VAR)?,
        };

        debug!("Loaded configuration from environment");
        Ok(config)
    }
}

/// Blank values count as unset, matching how a placeholder line in a
/// .env file should behave.
fn required_var(var_name: &str) -> Result<String, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvironmentVariable {
            var_name: var_name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-wide environment is only touched from
    // one thread.
    #[test]
    fn test_from_env_requires_every_variable() {
        let vars = [
            REDDIT_CLIENT_ID_VAR,
            REDDIT_CLIENT_SECRET_VAR,
            REDDIT_USER_AGENT_VAR,
            GOOGLE_API_KEY_VAR,
        ];

        for var in vars {
            std::env::set_var(var, format!("test-{}", var.to_lowercase()));
        }

        let config = AppConfig::from_env().expect("all variables set");
        assert_eq!(config.reddit_client_id, "test-reddit_client_id");
        assert_eq!(config.google_api_key, "test-google_api_key");

        std::env::set_var(REDDIT_USER_AGENT_VAR, "   ");
        match AppConfig::from_env() {
            Err(ConfigError::MissingEnvironmentVariable { var_name }) => {
                assert_eq!(var_name, REDDIT_USER_AGENT_VAR);
            }
            other => panic!("expected missing-variable error, got {:?}", other),
        }

        std::env::remove_var(GOOGLE_API_KEY_VAR);
        std::env::set_var(REDDIT_USER_AGENT_VAR, "test-agent/1.0");
        match AppConfig::from_env() {
            Err(ConfigError::MissingEnvironmentVariable { var_name }) => {
                assert_eq!(var_name, GOOGLE_API_KEY_VAR);
            }
            other => panic!("expected missing-variable error, got {:?}", other),
        }

        for var in vars {
            std::env::remove_var(var);
        }
    }
}
