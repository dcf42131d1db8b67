//! Normalized alert messages

use serde::{Deserialize, Serialize};

/// The unit the alert gate reasons over: either one short human-readable
/// finding, or the sentinel for a capture that found nothing.
///
/// The sentinel is a distinct variant rather than a magic string so that
/// "nothing detected" can never reach the speech path by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizedMessage {
    /// A non-empty description of the highest-priority finding.
    Alert(String),
    /// Nothing of interest in this capture.
    Nothing,
}

impl NormalizedMessage {
    /// Build an alert, collapsing blank text to the sentinel.
    pub fn alert(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            NormalizedMessage::Nothing
        } else {
            NormalizedMessage::Alert(text)
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, NormalizedMessage::Nothing)
    }

    pub fn as_alert(&self) -> Option<&str> {
        match self {
            NormalizedMessage::Alert(text) => Some(text),
            NormalizedMessage::Nothing => None,
        }
    }
}
