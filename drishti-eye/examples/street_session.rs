//! Run a street-mode session against a synthetic frame source
//!
//! Set OPENROUTER_API_KEY to let the remote call succeed; without it the
//! pipeline still runs and narrates the missing-key message.

use async_trait::async_trait;
use drishti_core::Mode;
use drishti_eye::{FrameSource, VisionConfig, VisionError, VisionSession};
use drishti_llm::{LlmConfig, OpenRouterProvider};
use drishti_spk::{CaptionEngine, Narrator, NullHaptics, SpeechConfig};
use image::RgbImage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Solid-color stand-in for a camera.
struct TestPattern {
    running: AtomicBool,
}

#[async_trait]
impl FrameSource for TestPattern {
    async fn start(&self) -> Result<(), VisionError> {
        self.running.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn dimensions(&self) -> (u32, u32) {
        if self.running.load(Ordering::SeqCst) {
            (320, 240)
        } else {
            (0, 0)
        }
    }

    async fn capture(&self) -> Result<RgbImage, VisionError> {
        let mut frame = RgbImage::new(320, 240);
        for pixel in frame.pixels_mut() {
            *pixel = image::Rgb([90, 120, 60]);
        }
        Ok(frame)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let frames = Arc::new(TestPattern {
        running: AtomicBool::new(false),
    });
    let provider = Arc::new(OpenRouterProvider::from_env(LlmConfig::default())?);

    let speech = SpeechConfig::default();
    let engine = Arc::new(CaptionEngine::new(speech.rate));
    let narrator = Arc::new(Narrator::new(speech, engine)?);

    let session = VisionSession::new(
        VisionConfig::default(),
        frames,
        provider,
        narrator,
        Arc::new(NullHaptics),
    )?;

    session.activate(Mode::Street).await?;
    println!("Session active; analyzing every 8 seconds. Ctrl+C to stop.");

    // drive one cycle immediately instead of waiting for the first tick
    session.tick().await;
    if let Some(alert) = session.last_alert() {
        println!("last alert: {}", alert);
    }
    if let Some(error) = session.last_error() {
        println!("last error: {}", error);
    }

    tokio::signal::ctrl_c().await?;
    session.deactivate();
    Ok(())
}
