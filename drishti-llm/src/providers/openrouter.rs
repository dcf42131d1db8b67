//! OpenRouter chat-completions provider

use crate::config::{LlmConfig, LlmProvider};
use crate::error::{LlmError, Result};
use crate::prompts;
use crate::providers::trait_impl::Provider as ProviderTrait;
use async_trait::async_trait;
use drishti_core::Mode;
use parking_lot::RwLock;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Vision analysis through OpenRouter's chat-completions endpoint.
pub struct OpenRouterProvider {
    config: LlmConfig,
    api_key: Arc<RwLock<Option<String>>>,
    client: Client,
    base_url: String,
}

impl OpenRouterProvider {
    pub fn new(config: LlmConfig) -> Result<Self> {
        config.validate().map_err(LlmError::Config)?;
        Ok(Self {
            config,
            api_key: Arc::new(RwLock::new(None)),
            client: Client::new(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
        })
    }

    pub fn with_api_key(config: LlmConfig, api_key: String) -> Result<Self> {
        let mut provider = Self::new(config)?;
        provider.set_api_key(api_key);
        Ok(provider)
    }

    /// Resolve the API credential from OPENROUTER_API_KEY. Absence is not
    /// an error here; an unset key surfaces as "Missing API key" at the
    /// first analyze call.
    pub fn from_env(config: LlmConfig) -> Result<Self> {
        let provider = Self::new(config)?;
        if let Ok(key) = std::env::var(LlmProvider::OpenRouter.env_var_name()) {
            if !key.is_empty() {
                *provider.api_key.write() = Some(key);
            }
        }
        Ok(provider)
    }

    fn get_api_key(&self) -> Result<String> {
        self.api_key
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| LlmError::MissingApiKey("OpenRouter".to_string()))
    }

    /// The endpoint expects images as data URIs; bare base64 gets the
    /// JPEG prefix.
    fn ensure_data_uri(image: &str) -> String {
        if image.starts_with("data:image") {
            image.to_string()
        } else {
            format!("data:image/jpeg;base64,{}", image)
        }
    }
}

#[async_trait]
impl ProviderTrait for OpenRouterProvider {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    fn has_api_key(&self) -> bool {
        self.api_key.read().is_some()
    }

    fn set_api_key(&mut self, key: String) {
        *self.api_key.write() = Some(key);
    }

    async fn analyze(&self, image: &str, mode: Mode) -> Result<String> {
        let api_key = self.get_api_key()?;
        let image_data = Self::ensure_data_uri(image);

        let body = json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "top_p": self.config.top_p,
            "messages": [{
                "role": "user",
                "content": [
                    {
                        "type": "text",
                        "text": prompts::instruction_for(mode)
                    },
                    {
                        "type": "image_url",
                        "image_url": { "url": image_data }
                    }
                ]
            }]
        });

        // Never log the full key
        let api_key_prefix = if api_key.len() > 8 {
            &api_key[..8]
        } else {
            "***"
        };
        debug!("Making request to OpenRouter with key {}...", api_key_prefix);

        let url = format!("{}/chat/completions", self.base_url);
        let mut request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .timeout(std::time::Duration::from_secs(self.config.timeout_secs));

        // Optional headers OpenRouter uses for app rankings
        if let Some(referer) = &self.config.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.config.app_title {
            request = request.header("X-Title", title);
        }

        let response = request.json(&body).send().await?;
        let status = response.status();

        if status == 429 {
            return Err(LlmError::RateLimit);
        }

        if status == 401 || status == 403 {
            return Err(LlmError::AuthenticationFailed);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let error_msg = if text.len() > 500 {
                format!("HTTP {}: {}", status, &text[..500])
            } else {
                format!("HTTP {}: {}", status, text)
            };
            return Err(LlmError::InvalidResponse(error_msg));
        }

        let json: serde_json::Value = response.json().await?;

        // Missing content degrades to empty text; the parser owns the
        // "Unable to analyze scene." fallback
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("");

        Ok(content.trim().to_string())
    }
}
