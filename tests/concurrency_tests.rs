//! Scheduling and cancellation: one analysis at a time, dropped ticks,
//! and no side effects from results that outlive their session

use async_trait::async_trait;
use drishti_core::Mode;
use drishti_eye::{FrameSource, VisionConfig, VisionError, VisionSession};
use drishti_llm::{LlmError, Provider};
use drishti_spk::{HapticSink, Narrator, SpeechConfig, SpeechEngine, SpeechError, VoiceConfig};
use image::RgbImage;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const CAR_LEFT: &str = r#"{"objects":[{"type":"car","direction":"left"}]}"#;

struct FakeCamera {
    running: AtomicBool,
}

impl FakeCamera {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            running: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl FrameSource for FakeCamera {
    async fn start(&self) -> Result<(), VisionError> {
        self.running.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn dimensions(&self) -> (u32, u32) {
        if self.running.load(Ordering::SeqCst) {
            (8, 8)
        } else {
            (0, 0)
        }
    }

    async fn capture(&self) -> Result<RgbImage, VisionError> {
        Ok(RgbImage::new(8, 8))
    }
}

struct SlowProvider {
    delay: Duration,
    calls: AtomicUsize,
}

impl SlowProvider {
    fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl Provider for SlowProvider {
    fn name(&self) -> &'static str {
        "slow"
    }

    fn has_api_key(&self) -> bool {
        true
    }

    fn set_api_key(&mut self, _key: String) {}

    async fn analyze(&self, _image: &str, _mode: Mode) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(CAR_LEFT.to_string())
    }
}

struct RecordingEngine {
    spoken: Mutex<Vec<String>>,
}

impl RecordingEngine {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            spoken: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SpeechEngine for RecordingEngine {
    async fn speak(&self, text: &str, _voice: &VoiceConfig) -> Result<(), SpeechError> {
        self.spoken.lock().push(text.to_string());
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "recording"
    }
}

struct NoHaptics;

impl HapticSink for NoHaptics {
    fn vibrate(&self, _pattern: &[u64]) {}
}

fn build(
    config: VisionConfig,
    provider: Arc<SlowProvider>,
) -> (Arc<VisionSession>, Arc<RecordingEngine>, Arc<FakeCamera>) {
    let engine = RecordingEngine::new();
    let narrator = Arc::new(Narrator::new(SpeechConfig::default(), engine.clone()).unwrap());
    let frames = FakeCamera::new();
    let session = Arc::new(
        VisionSession::new(config, frames.clone(), provider, narrator, Arc::new(NoHaptics))
            .unwrap(),
    );
    (session, engine, frames)
}

#[tokio::test]
async fn test_at_most_one_analysis_in_flight() {
    let provider = SlowProvider::new(Duration::from_millis(200));
    let (session, _engine, _frames) = build(VisionConfig::default(), provider.clone());

    session.activate(Mode::Street).await.unwrap();
    tokio::join!(session.tick(), session.tick(), session.tick());

    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert!(!session.is_analyzing());

    session.deactivate();
}

#[tokio::test]
async fn test_scheduled_ticks_fire_without_manual_driving() {
    let provider = SlowProvider::new(Duration::from_millis(0));
    let config = VisionConfig {
        interval_secs: 1,
        ..VisionConfig::default()
    };
    let (session, _engine, _frames) = build(config, provider.clone());

    session.activate(Mode::Street).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1300)).await;

    assert!(provider.calls.load(Ordering::SeqCst) >= 1);

    session.deactivate();
}

#[tokio::test]
async fn test_deactivate_cancels_the_timer() {
    let provider = SlowProvider::new(Duration::from_millis(0));
    let config = VisionConfig {
        interval_secs: 1,
        ..VisionConfig::default()
    };
    let (session, _engine, frames) = build(config, provider.clone());

    session.activate(Mode::Street).await.unwrap();
    session.deactivate();
    assert!(!frames.running.load(Ordering::SeqCst));

    let before = provider.calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert_eq!(provider.calls.load(Ordering::SeqCst), before);
}

#[tokio::test]
async fn test_result_arriving_after_deactivation_is_discarded() {
    let provider = SlowProvider::new(Duration::from_millis(200));
    let (session, engine, _frames) = build(VisionConfig::default(), provider.clone());

    session.activate(Mode::Street).await.unwrap();

    let worker = {
        let session = session.clone();
        tokio::spawn(async move { session.tick().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(session.is_analyzing());

    session.deactivate();
    worker.await.unwrap();

    // the analysis completed after the session ended: no speech, no state
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.last_alert(), None);
    assert!(!engine.spoken.lock().contains(&"car is left".to_string()));
}

#[tokio::test]
async fn test_reactivation_starts_a_clean_session() {
    let provider = SlowProvider::new(Duration::from_millis(0));
    let (session, engine, frames) = build(VisionConfig::default(), provider.clone());

    session.activate(Mode::Street).await.unwrap();
    session.tick().await;
    session.deactivate();
    assert!(!frames.running.load(Ordering::SeqCst));

    session.activate(Mode::Money).await.unwrap();
    assert_eq!(session.mode(), Some(Mode::Money));
    assert!(frames.running.load(Ordering::SeqCst));
    // the previous session's alert history is gone
    assert_eq!(session.last_alert(), None);

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(engine
        .spoken
        .lock()
        .contains(&"Money Sense mode activated.".to_string()));

    session.deactivate();
}
