//! Configuration for the remote vision-model client

use serde::{Deserialize, Serialize};

/// Hosted providers the client can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LlmProvider {
    OpenRouter,
    HuggingFace,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::OpenRouter => "openrouter",
            LlmProvider::HuggingFace => "huggingface",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openrouter" => Some(LlmProvider::OpenRouter),
            "huggingface" => Some(LlmProvider::HuggingFace),
            _ => None,
        }
    }

    /// Environment variable the API credential resolves from.
    pub fn env_var_name(&self) -> &'static str {
        match self {
            LlmProvider::OpenRouter => "OPENROUTER_API_KEY",
            LlmProvider::HuggingFace => "HF_API_TOKEN",
        }
    }
}

/// Client configuration shared by the providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Which hosted provider to use
    pub provider: LlmProvider,
    /// Model identifier passed to the provider
    pub model: String,
    /// Sampling temperature; kept low so descriptions stay literal
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Optional HTTP-Referer ranking header (OpenRouter)
    pub referer: Option<String>,
    /// Optional X-Title ranking header (OpenRouter)
    pub app_title: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenRouter,
            model: "google/gemma-3-27b-it:free".to_string(),
            temperature: 0.1,
            top_p: 1.0,
            timeout_secs: 30,
            referer: None,
            app_title: Some("Drishti Vision Assistant".to_string()),
        }
    }
}

impl LlmConfig {
    /// Default configuration for a specific provider.
    pub fn for_provider(provider: LlmProvider) -> Self {
        let model = match provider {
            LlmProvider::OpenRouter => "google/gemma-3-27b-it:free",
            LlmProvider::HuggingFace => "meta-llama/Llama-3.2-11B-Vision-Instruct",
        };
        Self {
            provider,
            model: model.to_string(),
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("Temperature must be between 0.0 and 2.0".to_string());
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            return Err("top_p must be between 0.0 and 1.0".to_string());
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err("Timeout must be between 1 and 300 seconds".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_provider_picks_vision_model() {
        let config = LlmConfig::for_provider(LlmProvider::HuggingFace);
        assert_eq!(config.provider, LlmProvider::HuggingFace);
        assert!(config.model.contains("Vision"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_model_empty() {
        let mut config = LlmConfig::default();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_temperature() {
        let mut config = LlmConfig::default();
        config.temperature = 2.1;
        assert!(config.validate().is_err());

        config.temperature = -0.1;
        assert!(config.validate().is_err());

        config.temperature = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_timeout() {
        let mut config = LlmConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.timeout_secs = 301;
        assert!(config.validate().is_err());

        config.timeout_secs = 300;
        assert!(config.validate().is_ok());
    }
}
