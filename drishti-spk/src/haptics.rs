//! Vibration output

use tracing::debug;

/// Vibrate/pause pattern in milliseconds played for urgent alerts.
pub const ALERT_PATTERN: [u64; 3] = [200, 100, 200];

/// Fire-and-forget vibration sink.
pub trait HapticSink: Send + Sync {
    /// Play a vibrate/pause pattern, given in milliseconds.
    fn vibrate(&self, pattern: &[u64]);
}

/// Sink for hosts without a vibration motor.
pub struct NullHaptics;

impl HapticSink for NullHaptics {
    fn vibrate(&self, pattern: &[u64]) {
        debug!("vibration unavailable, dropping pattern {:?}", pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_pattern_shape() {
        assert_eq!(ALERT_PATTERN, [200, 100, 200]);
    }

    #[test]
    fn test_null_haptics_accepts_any_pattern() {
        let haptics = NullHaptics;
        haptics.vibrate(&ALERT_PATTERN);
        haptics.vibrate(&[]);
    }
}
