//! Operating modes

use serde::{Deserialize, Serialize};

/// Operating context selecting the prompt template and parsing rules.
///
/// Immutable for the duration of an active session: set when the user
/// enters a mode, cleared on return to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Obstacle and traffic warnings while walking
    Street,
    /// Currency denomination identification
    Money,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Street => "street",
            Mode::Money => "money",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "street" => Some(Mode::Street),
            "money" => Some(Mode::Money),
            _ => None,
        }
    }

    /// Spoken name used in the activation announcement
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Street => "Street Smart",
            Mode::Money => "Money Sense",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        assert_eq!(Mode::from_str("street"), Some(Mode::Street));
        assert_eq!(Mode::from_str("money"), Some(Mode::Money));
        assert_eq!(Mode::from_str("STREET"), Some(Mode::Street));
        assert_eq!(Mode::from_str("home"), None);
        assert_eq!(Mode::Street.as_str(), "street");
        assert_eq!(Mode::Money.as_str(), "money");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Street.label(), "Street Smart");
        assert_eq!(Mode::Money.label(), "Money Sense");
    }
}
