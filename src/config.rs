use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

const JIRA_BASE_URL: &str = "JIRA_BASE_URL";
const JIRA_EMAIL: &str = "JIRA_EMAIL";
const JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
const JIRA_PROJECT_KEY: &str = "JIRA_PROJECT_KEY";
const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const GEMINI_MODEL: &str = "GEMINI_MODEL";
const HTTP_TIMEOUT_SECS: &str = "TIX_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jira_base_url: String,
    pub jira_email: String,
    pub jira_api_token: String,
    pub jira_project_key: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub http_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through `lookup` instead of the process
    /// environment, so tests can substitute a plain map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let jira_base_url = required(&lookup, JIRA_BASE_URL)?;
        let jira_email = required(&lookup, JIRA_EMAIL)?;
        let jira_api_token = required(&lookup, JIRA_API_TOKEN)?;
        let jira_project_key = required(&lookup, JIRA_PROJECT_KEY)?;
        let gemini_api_key = required(&lookup, GEMINI_API_KEY)?;

        let gemini_model = optional(&lookup, GEMINI_MODEL)
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let http_timeout = match optional(&lookup, HTTP_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    AppError::Configuration(format!(
                        "{HTTP_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            jira_base_url,
            jira_email,
            jira_api_token,
            jira_project_key,
            gemini_api_key,
            gemini_model,
            http_timeout,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> AppResult<String> {
    optional(lookup, name).ok_or_else(|| {
        AppError::Configuration(format!("required environment variable {name} is not set"))
    })
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn complete_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("JIRA_BASE_URL", "https://example.atlassian.net"),
            ("JIRA_EMAIL", "user@example.com"),
            ("JIRA_API_TOKEN", "token123"),
            ("JIRA_PROJECT_KEY", "PROJ"),
            ("GEMINI_API_KEY", "ai-key"),
        ])
    }

    fn load(env: &HashMap<&str, &str>) -> AppResult<AppConfig> {
        AppConfig::from_lookup(|name| env.get(name).map(|value| value.to_string()))
    }

    #[test]
    fn loads_complete_environment() {
        let config = load(&complete_env()).unwrap();
        assert_eq!(config.jira_base_url, "https://example.atlassian.net");
        assert_eq!(config.jira_project_key, "PROJ");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.http_timeout, None);
    }

    #[test]
    fn reports_each_missing_variable_by_name() {
        for name in [
            "JIRA_BASE_URL",
            "JIRA_EMAIL",
            "JIRA_API_TOKEN",
            "JIRA_PROJECT_KEY",
            "GEMINI_API_KEY",
        ] {
            let mut env = complete_env();
            env.remove(name);
            let error = load(&env).unwrap_err();
            assert!(
                matches!(&error, AppError::Configuration(message) if message.contains(name)),
                "expected configuration error naming {name}, got: {error}"
            );
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut env = complete_env();
        env.insert("JIRA_EMAIL", "  ");
        let error = load(&env).unwrap_err();
        assert!(matches!(&error, AppError::Configuration(message) if message.contains("JIRA_EMAIL")));
    }

    #[test]
    fn overrides_model_and_timeout() {
        let mut env = complete_env();
        env.insert("GEMINI_MODEL", "gemini-2.5-pro");
        env.insert("TIX_HTTP_TIMEOUT_SECS", "30");
        let config = load(&env).unwrap();
        assert_eq!(config.gemini_model, "gemini-2.5-pro");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let mut env = complete_env();
        env.insert("TIX_HTTP_TIMEOUT_SECS", "soon");
        let error = load(&env).unwrap_err();
        assert!(matches!(error, AppError::Configuration(_)));
    }
}
