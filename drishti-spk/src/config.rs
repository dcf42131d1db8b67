//! Configuration for narration

use serde::{Deserialize, Serialize};

/// Narration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Enable spoken output. When disabled, announcements validate and
    /// then drop silently; captions from the engine never fire.
    pub enabled: bool,

    /// Speech rate multiplier (1.0 is normal speed)
    pub rate: f32,

    /// Voice settings
    pub voice: VoiceConfig,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // slightly brisk so alerts land before the scene changes
            rate: 1.1,
            voice: VoiceConfig::default(),
        }
    }
}

impl SpeechConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.25..=4.0).contains(&self.rate) {
            return Err("Rate must be between 0.25 and 4.0".to_string());
        }

        if self.voice.language.trim().is_empty() {
            return Err("Voice language must not be empty".to_string());
        }

        Ok(())
    }
}

/// Voice configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Voice name/identifier, engine-specific
    pub name: Option<String>,

    /// Language code (e.g. "en-IN", "hi-IN")
    pub language: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            name: None,
            language: "en-IN".to_string(),
        }
    }
}
