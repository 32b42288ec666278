//! Configuration for the remote answering service.

use crate::{MagicBoxError, Result};

/// Persona instruction prepended to every question.
pub const DEFAULT_PERSONA: &str =
    "You are a helpful magician who should give short answers (max 32 chars). Answer this: ";

#[derive(Clone, Debug)]
pub struct OracleConfig {
    /// Base URL of the chat-completions endpoint.
    pub endpoint: String,

    /// Bearer credential for the endpoint.
    pub api_key: String,

    /// Model identifier sent with every request.
    pub model_id: String,

    /// Persona/style instruction prepended to the question text.
    pub persona: String,

    /// Upper bound on the whole request/response exchange, in seconds.
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://openrouter.ai/api/v1".to_string(),
            api_key: String::new(),
            model_id: "deepseek/deepseek-chat-v3-0324:free".to_string(),
            persona: DEFAULT_PERSONA.to_string(),
            timeout_secs: 20,
        }
    }
}

impl OracleConfig {
    /// Create a config with the required credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the endpoint base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Read the config from the environment. `OPENROUTER_API_KEY` is
    /// required; `MAGICBOX_MODEL` and `MAGICBOX_ENDPOINT` override defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| MagicBoxError::Config("OPENROUTER_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(model_id) = std::env::var("MAGICBOX_MODEL") {
            config.model_id = model_id;
        }
        if let Ok(endpoint) = std::env::var("MAGICBOX_ENDPOINT") {
            config.endpoint = endpoint;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(MagicBoxError::Config("API key is empty".to_string()));
        }
        if self.endpoint.is_empty() {
            return Err(MagicBoxError::Config("endpoint is empty".to_string()));
        }
        Ok(())
    }
}
