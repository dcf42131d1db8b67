//! Configuration for the analysis session

use serde::{Deserialize, Serialize};

/// Analysis session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Seconds between capture attempts
    pub interval_secs: u64,

    /// JPEG quality for encoded frames (1-100)
    pub jpeg_quality: u8,

    /// Minimum gap between two alerts, in milliseconds
    pub alert_cooldown_ms: u64,

    /// Money mode: gap after which an unchanged denomination is
    /// confirmed again instead of suppressed
    pub repeat_confirm_ms: u64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            // 8-second cadence stays under free-tier request limits
            interval_secs: 8,
            jpeg_quality: 60,
            alert_cooldown_ms: 3000,
            repeat_confirm_ms: 5000,
        }
    }
}

impl VisionConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.interval_secs == 0 || self.interval_secs > 3600 {
            return Err("Interval must be between 1 and 3600 seconds".to_string());
        }

        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err("JPEG quality must be between 1 and 100".to_string());
        }

        if self.alert_cooldown_ms == 0 {
            return Err("Alert cooldown must be non-zero".to_string());
        }

        if self.repeat_confirm_ms <= self.alert_cooldown_ms {
            return Err("Repeat confirmation gap must exceed the alert cooldown".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = VisionConfig::default();
        assert_eq!(config.interval_secs, 8);
        assert_eq!(config.jpeg_quality, 60);
        assert_eq!(config.alert_cooldown_ms, 3000);
        assert_eq!(config.repeat_confirm_ms, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_interval() {
        let mut config = VisionConfig::default();
        config.interval_secs = 0;
        assert!(config.validate().is_err());

        config.interval_secs = 3601;
        assert!(config.validate().is_err());

        config.interval_secs = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_quality() {
        let mut config = VisionConfig::default();
        config.jpeg_quality = 0;
        assert!(config.validate().is_err());

        config.jpeg_quality = 101;
        assert!(config.validate().is_err());

        config.jpeg_quality = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_gaps() {
        let mut config = VisionConfig::default();
        config.alert_cooldown_ms = 0;
        assert!(config.validate().is_err());

        config.alert_cooldown_ms = 5000;
        config.repeat_confirm_ms = 5000;
        assert!(config.validate().is_err());

        config.alert_cooldown_ms = 3000;
        config.repeat_confirm_ms = 5000;
        assert!(config.validate().is_ok());
    }
}
