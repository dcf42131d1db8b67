//! Basic narration example

use drishti_spk::{CaptionEngine, HapticSink, Narrator, NullHaptics, SpeechConfig, ALERT_PATTERN};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = SpeechConfig::default();
    let engine = Arc::new(CaptionEngine::new(config.rate));
    let narrator = Narrator::new(config, engine)?;

    narrator.announce("Street Smart mode activated.")?;
    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    // a new announcement cuts the previous one off mid-utterance
    narrator.announce("An auto-rickshaw is approaching from the right")?;
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    narrator.announce("Stop! Large pothole detected directly ahead")?;

    let haptics = NullHaptics;
    haptics.vibrate(&ALERT_PATTERN);

    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    Ok(())
}
