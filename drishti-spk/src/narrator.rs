//! Utterance scheduling with overlap cancellation

use crate::config::SpeechConfig;
use crate::engines::SpeechEngine;
use crate::error::SpeechError;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Longest text the narrator will hand to an engine, in bytes.
const MAX_TEXT_LEN: usize = 1000;

/// Drives a speech engine under the rule: at most one active utterance.
///
/// Starting a new announcement cancels whatever is still being spoken.
/// Alerts interrupt rather than queue; a backlog of stale warnings is
/// worse than silence.
pub struct Narrator {
    config: Arc<SpeechConfig>,
    engine: Arc<dyn SpeechEngine>,
    current: Mutex<Option<JoinHandle<()>>>,
}

impl Narrator {
    pub fn new(config: SpeechConfig, engine: Arc<dyn SpeechEngine>) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Config)?;

        Ok(Self {
            config: Arc::new(config),
            engine,
            current: Mutex::new(None),
        })
    }

    /// Validate and speak fire-and-forget, cancelling any utterance in
    /// progress. With speech disabled this validates the text and drops
    /// it without touching the engine.
    pub fn announce(&self, text: &str) -> Result<(), SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::InvalidInput("Text is empty".to_string()));
        }

        if text.contains('\0') {
            return Err(SpeechError::InvalidInput(
                "Text contains NUL bytes".to_string(),
            ));
        }

        if text.len() > MAX_TEXT_LEN {
            return Err(SpeechError::InvalidInput(format!(
                "Text too long ({} > {} bytes)",
                text.len(),
                MAX_TEXT_LEN
            )));
        }

        if !self.config.enabled {
            debug!("speech disabled, dropping announcement: {}", text);
            return Ok(());
        }

        let engine = self.engine.clone();
        let voice = self.config.voice.clone();
        let text = text.to_string();

        let mut current = self.current.lock();
        if let Some(handle) = current.take() {
            handle.abort();
        }
        *current = Some(tokio::spawn(async move {
            if let Err(e) = engine.speak(&text, &voice).await {
                warn!("speech engine failed: {}", e);
            }
        }));

        Ok(())
    }

    /// Cut off the current utterance, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.current.lock().take() {
            handle.abort();
        }
    }

    /// Whether an utterance is still in flight.
    pub fn is_speaking(&self) -> bool {
        self.current
            .lock()
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}
