use std::time::Duration;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, OpenAISettings};

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: bearer secret (optional; a missing key is reported per request)
/// - OPENAI_BASE_URL: provider base URL (default: "https://api.openai.com/v1")
/// - OPENAI_MODEL: vision model (default: "gpt-4o-mini")
/// - OPENAI_MAX_TOKENS: max output tokens (default: 1000)
/// - OPENAI_TIMEOUT_SECS: request timeout (default: none)
pub struct OpenAIConfig {
    pub settings: OpenAISettings,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; receipt scans will fail until it is");
        }

        let settings = OpenAISettings {
            api_key,
            base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: lookup("OPENAI_MAX_TOKENS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
            timeout: lookup("OPENAI_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs),
        };

        Self { settings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> OpenAIConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        OpenAIConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_load_defaults_without_api_key() {
        let config = config_from(&[]);

        assert!(config.settings.api_key.is_none());
        assert_eq!(config.settings.base_url, "https://api.openai.com/v1");
        assert_eq!(config.settings.model, "gpt-4o-mini");
        assert_eq!(config.settings.max_tokens, 1000);
        assert!(config.settings.timeout.is_none());
    }

    #[test]
    fn should_load_overrides() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:4010/v1"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_MAX_TOKENS", "2000"),
            ("OPENAI_TIMEOUT_SECS", "45"),
        ]);

        assert_eq!(config.settings.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.settings.base_url, "http://localhost:4010/v1");
        assert_eq!(config.settings.model, "gpt-4o");
        assert_eq!(config.settings.max_tokens, 2000);
        assert_eq!(config.settings.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn should_treat_blank_api_key_as_missing() {
        let config = config_from(&[("OPENAI_API_KEY", "   ")]);

        assert!(config.settings.api_key.is_none());
    }

    #[test]
    fn should_fall_back_when_numbers_do_not_parse() {
        let config = config_from(&[
            ("OPENAI_MAX_TOKENS", "lots"),
            ("OPENAI_TIMEOUT_SECS", "soon"),
        ]);

        assert_eq!(config.settings.max_tokens, 1000);
        assert!(config.settings.timeout.is_none());
    }
}
