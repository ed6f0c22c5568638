use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Connection settings for the OpenAI API.
#[derive(Debug, Clone)]
pub struct OpenAISettings {
    /// Bearer secret. `None` is reported on each request instead of failing startup.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for OpenAISettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: None,
        }
    }
}

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub settings: OpenAISettings,
}

impl OpenAIClient {
    pub fn new(settings: OpenAISettings) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to build OpenAI HTTP client ({}); using defaults without the configured timeout",
                e
            );
            Client::default()
        });

        Self { client, settings }
    }

    /// Returns the API key, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.settings
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self, api_key: &str) -> String {
        format!("Bearer {}", api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_chat_completions_url_from_base_url() {
        let client = OpenAIClient::new(OpenAISettings {
            base_url: "http://localhost:9999/v1/".to_string(),
            ..OpenAISettings::default()
        });

        assert_eq!(
            client.chat_completions_url(),
            "http://localhost:9999/v1/chat/completions"
        );
    }

    #[test]
    fn should_treat_empty_api_key_as_missing() {
        let client = OpenAIClient::new(OpenAISettings {
            api_key: Some(String::new()),
            ..OpenAISettings::default()
        });

        assert_eq!(client.api_key(), None);
    }

    #[test]
    fn should_build_bearer_header() {
        let client = OpenAIClient::new(OpenAISettings::default());

        assert_eq!(client.auth_header("sk-test"), "Bearer sk-test");
    }

    #[tokio::test]
    async fn should_apply_configured_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });
        let client = OpenAIClient::new(OpenAISettings {
            base_url: format!("http://{}", addr),
            timeout: Some(Duration::from_millis(200)),
            ..OpenAISettings::default()
        });

        let result = client
            .client
            .post(client.chat_completions_url())
            .send()
            .await;

        assert!(result.unwrap_err().is_timeout());
    }

    #[test]
    fn should_default_to_gpt_4o_mini() {
        let settings = OpenAISettings::default();

        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.max_tokens, 1000);
        assert_eq!(settings.base_url, "https://api.openai.com/v1");
        assert!(settings.timeout.is_none());
    }
}
