//! The analysis session: periodic capture, analyze, gate, output

use crate::config::VisionConfig;
use crate::error::VisionError;
use crate::frame::{encode_jpeg_data_uri, FrameSource};
use crate::gate::{self, AlertGate, AlertState};
use crate::parser;
use drishti_core::Mode;
use drishti_llm::Provider;
use drishti_spk::{HapticSink, Narrator, ALERT_PATTERN};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// Spoken and recorded when camera startup fails.
const CAMERA_DENIED: &str = "Camera access denied. Please enable permissions.";

/// One assistive-vision session: owns the frame source, drives the
/// capture/analyze/gate/output cycle on a fixed cadence, and exposes the
/// last alert and error for display.
///
/// State machine: idle -> active(mode) on `activate`, back to idle on
/// `deactivate`. No nested or concurrent active states; at most one
/// analysis is ever in flight.
pub struct VisionSession {
    ctx: SessionContext,
    tick_handle: RwLock<Option<JoinHandle<()>>>,
}

/// Everything a tick needs, cloneable into the spawned loop.
#[derive(Clone)]
struct SessionContext {
    config: Arc<VisionConfig>,
    frames: Arc<dyn FrameSource>,
    provider: Arc<dyn Provider>,
    narrator: Arc<Narrator>,
    haptics: Arc<dyn HapticSink>,
    gate: AlertGate,
    mode: Arc<RwLock<Option<Mode>>>,
    state: Arc<RwLock<AlertState>>,
    in_flight: Arc<RwLock<bool>>,
    generation: Arc<AtomicU64>,
    last_alert: Arc<RwLock<Option<String>>>,
    last_error: Arc<RwLock<Option<String>>>,
}

impl VisionSession {
    pub fn new(
        config: VisionConfig,
        frames: Arc<dyn FrameSource>,
        provider: Arc<dyn Provider>,
        narrator: Arc<Narrator>,
        haptics: Arc<dyn HapticSink>,
    ) -> Result<Self, VisionError> {
        config.validate().map_err(VisionError::Config)?;

        let gate = AlertGate::new(config.alert_cooldown_ms, config.repeat_confirm_ms);

        Ok(Self {
            ctx: SessionContext {
                config: Arc::new(config),
                frames,
                provider,
                narrator,
                haptics,
                gate,
                mode: Arc::new(RwLock::new(None)),
                state: Arc::new(RwLock::new(AlertState::new())),
                in_flight: Arc::new(RwLock::new(false)),
                generation: Arc::new(AtomicU64::new(0)),
                last_alert: Arc::new(RwLock::new(None)),
                last_error: Arc::new(RwLock::new(None)),
            },
            tick_handle: RwLock::new(None),
        })
    }

    /// Enter a mode: start the frame source, announce, begin ticking.
    ///
    /// Camera failure leaves the session idle and re-activatable; the
    /// denial is spoken and recorded but is terminal only for this
    /// activation attempt.
    pub async fn activate(&self, mode: Mode) -> Result<(), VisionError> {
        {
            let mut current = self.ctx.mode.write();
            if current.is_some() {
                return Err(VisionError::Session("Session already active".to_string()));
            }
            *current = Some(mode);
        }

        if let Err(e) = self.ctx.frames.start().await {
            warn!("camera start failed: {}", e);
            *self.ctx.last_error.write() = Some(CAMERA_DENIED.to_string());
            if let Err(speech) = self.ctx.narrator.announce(CAMERA_DENIED) {
                warn!("could not announce camera failure: {}", speech);
            }
            *self.ctx.mode.write() = None;
            return Err(e);
        }

        *self.ctx.state.write() = AlertState::new();
        *self.ctx.last_alert.write() = None;
        *self.ctx.last_error.write() = None;
        *self.ctx.in_flight.write() = false;

        info!("{} session activated", mode.as_str());
        let announcement = format!("{} mode activated.", mode.label());
        if let Err(e) = self.ctx.narrator.announce(&announcement) {
            warn!("activation announcement failed: {}", e);
        }

        let ctx = self.ctx.clone();
        let generation = self.ctx.generation.load(Ordering::SeqCst);
        let period = std::time::Duration::from_secs(ctx.config.interval_secs);
        let handle = tokio::spawn(async move {
            // first capture happens one full period after activation
            let mut ticker = time::interval_at(time::Instant::now() + period, period);
            // a tick that would overlap an in-flight analysis is dropped,
            // never queued
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                ctx.run_tick(generation).await;
            }
        });
        *self.tick_handle.write() = Some(handle);

        Ok(())
    }

    /// Return to idle: cancel the tick loop and any pending speech,
    /// release the camera, discard alert history.
    ///
    /// An analysis in flight at this point is orphaned by the generation
    /// bump and cannot apply side effects when it resolves.
    pub fn deactivate(&self) {
        self.ctx.generation.fetch_add(1, Ordering::SeqCst);

        if let Some(handle) = self.tick_handle.write().take() {
            handle.abort();
        }

        self.ctx.narrator.cancel();
        self.ctx.frames.stop();

        *self.ctx.mode.write() = None;
        *self.ctx.state.write() = AlertState::new();
        *self.ctx.in_flight.write() = false;

        info!("session deactivated");
    }

    /// Run one capture/analyze cycle immediately, subject to the same
    /// skip rules as the scheduled ticks.
    pub async fn tick(&self) {
        let generation = self.ctx.generation.load(Ordering::SeqCst);
        self.ctx.run_tick(generation).await;
    }

    pub fn is_active(&self) -> bool {
        self.ctx.mode.read().is_some()
    }

    pub fn mode(&self) -> Option<Mode> {
        *self.ctx.mode.read()
    }

    pub fn is_analyzing(&self) -> bool {
        *self.ctx.in_flight.read()
    }

    /// Text of the most recent alert, for display alongside speech.
    pub fn last_alert(&self) -> Option<String> {
        self.ctx.last_alert.read().clone()
    }

    /// Most recent error surfaced by the analysis path.
    pub fn last_error(&self) -> Option<String> {
        self.ctx.last_error.read().clone()
    }
}

impl Drop for VisionSession {
    fn drop(&mut self) {
        if let Some(handle) = self.tick_handle.write().take() {
            handle.abort();
        }
    }
}

impl SessionContext {
    /// One scheduled iteration. Skips without capturing when an analysis
    /// is already in flight, the frame source is not ready, or the alert
    /// cooldown has not elapsed. Skipping before capture keeps cooled-down
    /// ticks from burning remote calls.
    async fn run_tick(&self, generation: u64) {
        {
            let mut in_flight = self.in_flight.write();
            if *in_flight {
                debug!("analysis in flight, dropping tick");
                return;
            }

            let (width, height) = self.frames.dimensions();
            if width == 0 || height == 0 {
                debug!("frame source not ready, dropping tick");
                return;
            }

            if self.gate.in_cooldown(&self.state.read(), epoch_ms()) {
                debug!("within alert cooldown, skipping capture");
                return;
            }

            *in_flight = true;
        }

        self.analyze_once(generation).await;

        *self.in_flight.write() = false;
    }

    /// Capture, analyze remotely, normalize, gate, and fire outputs.
    /// Every failure on this path is recovered locally; nothing
    /// propagates out of the cycle.
    async fn analyze_once(&self, generation: u64) {
        let mode = match *self.mode.read() {
            Some(mode) => mode,
            None => return,
        };

        let frame = match self.frames.capture().await {
            Ok(frame) => frame,
            Err(e) => {
                warn!("frame capture failed: {}", e);
                *self.last_error.write() = Some(format!("Camera error: {}", e));
                return;
            }
        };

        let image = match encode_jpeg_data_uri(&frame, self.config.jpeg_quality) {
            Ok(image) => image,
            Err(e) => {
                warn!("frame encoding failed: {}", e);
                *self.last_error.write() = Some(format!("Camera error: {}", e));
                return;
            }
        };

        // the sole suspension point of the cycle
        let raw = match self.provider.analyze(&image, mode).await {
            Ok(text) => text,
            Err(e) => e.user_message(),
        };

        // the session may have ended while the call was in flight; a
        // stale result must not speak, vibrate, or touch state
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("session ended during analysis, discarding result");
            return;
        }

        // error surface and alert pipeline observe the same raw result
        // independently
        if raw.to_lowercase().contains("error") {
            error!("analysis returned an error: {}", raw);
            *self.last_error.write() = Some(raw.clone());
        }

        let message = parser::normalize(&raw, mode);
        let text = match message.as_alert() {
            Some(text) => text.to_string(),
            None => {
                debug!("nothing detected, no alert");
                return;
            }
        };

        let now = epoch_ms();
        let emit = {
            let mut state = self.state.write();
            self.gate.should_emit(&message, mode, &mut state, now)
        };

        if emit {
            info!("alert: {}", text);
            *self.last_alert.write() = Some(text.clone());
            if let Err(e) = self.narrator.announce(&text) {
                warn!("alert announcement failed: {}", e);
            }
            if gate::is_urgent(&text) {
                self.haptics.vibrate(&ALERT_PATTERN);
            }
        }
    }
}

/// Wall-clock epoch milliseconds.
fn epoch_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
