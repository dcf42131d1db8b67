//! Hugging Face inference-API provider

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

/// Vision analysis through the Hugging Face hosted inference API.
///
/// Secondary backend behind the same trait as OpenRouter. Uses the
/// task-agnostic `{"inputs": {"image", "text"}}` request shape; some
/// hosted models answer without a token, so a missing key is only an
/// authentication problem if the endpoint says so.
pub struct HuggingFaceProvider {
    config: LlmConfig,
    api_key: Arc<RwLock<Option<String>>>,
    client: Client,
    base_url: String,
}

impl HuggingFaceProvider {
    pub fn new(config: LlmConfig) -> Result<Self> {
        config.validate().map_err(LlmError::Config)?;
        Ok(Self {
            config,
            api_key: Arc::new(RwLock::new(None)),
            client: Client::new(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
        })
    }

    pub fn with_api_key(config: LlmConfig, api_key: String) -> Result<Self> {
        let mut provider = Self::new(config)?;
        provider.set_api_key(api_key);
        Ok(provider)
    }

    /// Resolve the API credential from HF_API_TOKEN if present.
    pub fn from_env(config: LlmConfig) -> Result<Self> {
        let provider = Self::new(config)?;
        if let Ok(key) = std::env::var(LlmProvider::HuggingFace.env_var_name()) {
            if !key.is_empty() {
                *provider.api_key.write() = Some(key);
            }
        }
        Ok(provider)
    }

    /// The inference API wants bare base64, not a data URI.
    fn strip_data_uri(image: &str) -> &str {
        match image.find("base64,") {
            Some(idx) => &image[idx + 7..],
            None => image,
        }
    }
}

#[async_trait]
impl ProviderTrait for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn has_api_key(&self) -> bool {
        self.api_key.read().is_some()
    }

    fn set_api_key(&mut self, key: String) {
        *self.api_key.write() = Some(key);
    }

    async fn analyze(&self, image: &str, mode: Mode) -> Result<String> {
        let body = json!({
            "inputs": {
                "image": Self::strip_data_uri(image),
                "text": prompts::instruction_for(mode)
            }
        });

        let url = format!("{}/{}", self.base_url, self.config.model);
        debug!("Making request to Hugging Face model {}", self.config.model);

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(std::time::Duration::from_secs(self.config.timeout_secs));

        let api_key = self.api_key.read().clone();
        if let Some(key) = api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
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

        let text = response.text().await?;

        // Responses usually arrive as [{"generated_text": ...}]; anything
        // else is passed through raw for the parser to make sense of
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(generated) = value
                .get(0)
                .and_then(|v| v.get("generated_text"))
                .and_then(|v| v.as_str())
            {
                return Ok(generated.trim().to_string());
            }
        }

        Ok(text.trim().to_string())
    }
}
