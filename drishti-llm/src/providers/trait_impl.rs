use crate::error::Result;
use async_trait::async_trait;
use drishti_core::Mode;

/// Capability interface over a hosted vision model: one call from an
/// encoded frame plus a mode to raw text. Implementations own their HTTP
/// plumbing; callers treat the returned text as unstructured.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Check if API key is set
    fn has_api_key(&self) -> bool;

    /// Set API key
    fn set_api_key(&mut self, key: String);

    /// Analyze one captured frame, returning the model's raw text.
    ///
    /// `image` is a base64-encoded JPEG, with or without the data-URI
    /// prefix; each provider adapts it to what its endpoint expects.
    async fn analyze(&self, image: &str, mode: Mode) -> Result<String>;
}
