//! Speech engine implementations

pub mod caption;

pub use caption::CaptionEngine;

use crate::config::VoiceConfig;
use crate::error::SpeechError;
use async_trait::async_trait;

/// Trait for speech engines
///
/// `speak` resolves when the utterance finishes; the narrator cancels an
/// utterance by dropping the future mid-flight.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Speak text to completion
    async fn speak(&self, text: &str, voice: &VoiceConfig) -> Result<(), SpeechError>;

    /// Check if engine is available
    fn is_available(&self) -> bool;

    /// Get engine name
    fn name(&self) -> &str;
}
