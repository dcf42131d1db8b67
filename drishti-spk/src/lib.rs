//! drishti-spk: narration and haptics for alert delivery
//!
//! The output side of the pipeline: a speech-engine seam with a caption
//! fallback, a narrator enforcing at most one active utterance, and a
//! fire-and-forget haptic sink for urgent alerts.

pub mod config;
pub mod engines;
pub mod error;
pub mod haptics;
pub mod narrator;

pub use config::{SpeechConfig, VoiceConfig};
pub use engines::{CaptionEngine, SpeechEngine};
pub use error::SpeechError;
pub use haptics::{HapticSink, NullHaptics, ALERT_PATTERN};
pub use narrator::Narrator;
