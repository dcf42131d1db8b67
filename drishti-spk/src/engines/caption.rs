//! Caption fallback engine

use crate::config::VoiceConfig;
use crate::engines::SpeechEngine;
use crate::error::SpeechError;
use async_trait::async_trait;
use tracing::info;

/// Milliseconds per spoken word at rate 1.0
const WORD_MILLIS: f32 = 300.0;

/// Prints each utterance through structured logging instead of audio.
///
/// Stands in when no audio engine is wired up, so alerts still surface
/// as captions. Each caption is paced like real speech, which keeps the
/// narrator's cancellation behavior observable.
pub struct CaptionEngine {
    rate: f32,
}

impl CaptionEngine {
    pub fn new(rate: f32) -> Self {
        Self {
            rate: if rate > 0.0 { rate } else { 1.0 },
        }
    }
}

#[async_trait]
impl SpeechEngine for CaptionEngine {
    async fn speak(&self, text: &str, voice: &VoiceConfig) -> Result<(), SpeechError> {
        info!(language = %voice.language, "caption: {}", text);

        let words = text.split_whitespace().count().max(1);
        let millis = (words as f32 * WORD_MILLIS / self.rate) as u64;
        tokio::time::sleep(std::time::Duration::from_millis(millis)).await;

        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "captions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_engine_always_available() {
        let engine = CaptionEngine::new(1.1);
        assert!(engine.is_available());
        assert_eq!(engine.name(), "captions");
    }

    #[test]
    fn test_caption_engine_speaks() {
        let engine = CaptionEngine::new(10.0);
        let voice = VoiceConfig::default();
        let result = tokio_test::block_on(engine.speak("car is left", &voice));
        assert!(result.is_ok());
    }

    #[test]
    fn test_zero_rate_falls_back_to_normal() {
        // must not divide by zero when pacing
        let engine = CaptionEngine::new(0.0);
        assert_eq!(engine.rate, 1.0);
    }
}
