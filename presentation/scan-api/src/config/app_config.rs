use super::{openai_config::OpenAIConfig, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAIConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            openai: OpenAIConfig::from_env(),
        }
    }
}
