//! Tests for narration configuration

use drishti_spk::{SpeechConfig, VoiceConfig};

#[test]
fn test_speech_config_default() {
    let config = SpeechConfig::default();
    assert!(config.enabled);
    assert_eq!(config.rate, 1.1);
    assert!(config.voice.name.is_none());
    assert_eq!(config.voice.language, "en-IN");
}

#[test]
fn test_speech_config_validation_rate() {
    let mut config = SpeechConfig::default();
    config.rate = 6.0;
    assert!(config.validate().is_err());

    config.rate = 0.0;
    assert!(config.validate().is_err());

    config.rate = 1.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_speech_config_validation_language() {
    let mut config = SpeechConfig::default();
    config.voice.language = "   ".to_string();
    assert!(config.validate().is_err());

    config.voice.language = "hi-IN".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_voice_config_named_voice() {
    let voice = VoiceConfig {
        name: Some("Lekha".to_string()),
        language: "hi-IN".to_string(),
    };
    let config = SpeechConfig {
        voice,
        ..SpeechConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serde_round_trip() {
    let config = SpeechConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: SpeechConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.enabled, config.enabled);
    assert_eq!(back.rate, config.rate);
    assert_eq!(back.voice.language, config.voice.language);
}
