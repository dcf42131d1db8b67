//! Alert gating: cooldown, novelty, and repeat confirmation

use drishti_core::{Mode, NormalizedMessage};
use tracing::debug;

/// Mutable alert history for one active session.
///
/// Created when a mode becomes active, discarded on return to idle.
/// `last_emitted_at_ms` never moves backwards for the life of a session.
#[derive(Debug, Clone, Default)]
pub struct AlertState {
    last_message: Option<String>,
    last_emitted_at_ms: u64,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn last_emitted_at_ms(&self) -> u64 {
        self.last_emitted_at_ms
    }
}

/// Decides which normalized messages become user-facing alerts.
#[derive(Debug, Clone, Copy)]
pub struct AlertGate {
    cooldown_ms: u64,
    repeat_confirm_ms: u64,
}

impl Default for AlertGate {
    fn default() -> Self {
        Self::new(3000, 5000)
    }
}

impl AlertGate {
    pub fn new(cooldown_ms: u64, repeat_confirm_ms: u64) -> Self {
        Self {
            cooldown_ms,
            repeat_confirm_ms,
        }
    }

    /// True while the minimum gap since the last alert has not elapsed.
    ///
    /// The session consults this before capturing, so a cooled-down tick
    /// skips the remote call entirely instead of analyzing and dropping.
    pub fn in_cooldown(&self, state: &AlertState, now_ms: u64) -> bool {
        now_ms.saturating_sub(state.last_emitted_at_ms) < self.cooldown_ms
    }

    /// Decide whether to emit, updating `state` when the answer is yes.
    ///
    /// Rules in order: the nothing-sentinel never emits; nothing emits
    /// inside the cooldown window; a changed message emits; in money mode
    /// an unchanged message re-emits once the confirmation gap has
    /// passed, so a user holding the same note keeps getting confirmed.
    pub fn should_emit(
        &self,
        message: &NormalizedMessage,
        mode: Mode,
        state: &mut AlertState,
        now_ms: u64,
    ) -> bool {
        let text = match message.as_alert() {
            Some(text) => text,
            None => return false,
        };

        if self.in_cooldown(state, now_ms) {
            debug!("alert suppressed by cooldown: {}", text);
            return false;
        }

        let is_new = state.last_message.as_deref() != Some(text);
        let confirm_repeat = mode == Mode::Money
            && now_ms.saturating_sub(state.last_emitted_at_ms) > self.repeat_confirm_ms;

        if is_new || confirm_repeat {
            state.last_message = Some(text.to_string());
            // monotonic even if the wall clock stepped backwards
            state.last_emitted_at_ms = state.last_emitted_at_ms.max(now_ms);
            return true;
        }

        false
    }
}

/// Keyword test for alerts that warrant haptic feedback in addition to
/// speech. A property of the text alone, independent of mode.
pub fn is_urgent(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("stop") || lower.contains("very close")
}
